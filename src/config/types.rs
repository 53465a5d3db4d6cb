// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::autocomplete::MAX_SUGGESTIONS;

/// OpenWeatherMap current weather endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Weather API configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// City list configuration section
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct CitiesConfig {
    /// JSON array of city names; the built-in list is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Autocomplete configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AutocompleteConfig {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

fn default_max_suggestions() -> usize {
    MAX_SUGGESTIONS
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub cities: CitiesConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

impl Config {
    /// Suggestion cap, never below one
    pub fn max_suggestions(&self) -> usize {
        self.autocomplete.max_suggestions.max(1)
    }
}
