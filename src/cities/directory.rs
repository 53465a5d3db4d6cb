use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::WeatherNowError;

/// City list shipped with the binary
const BUILTIN_CITIES: &str = include_str!("../../assets/cities.json");

/// Ordered list of known city names, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityDirectory {
    names: Vec<String>,
}

impl CityDirectory {
    /// Build a directory from names, trimming them and dropping blanks
    pub fn new(names: Vec<String>) -> Self {
        let names = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// The embedded default city list
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CITIES).unwrap_or_default()
    }

    /// Parse a JSON array of city name strings
    pub fn from_json(json: &str) -> Result<Self, WeatherNowError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| WeatherNowError::InvalidCityList(e.to_string()))?;

        let Value::Array(entries) = value else {
            return Err(WeatherNowError::InvalidCityList(
                "expected a JSON array of city names".to_string(),
            ));
        };

        let names = entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| match entry {
                Value::String(name) => Ok(name),
                other => Err(WeatherNowError::InvalidCityList(format!(
                    "entry {} is not a string: {}",
                    idx, other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(names))
    }

    /// Read and parse a city list file
    pub fn load(path: &Path) -> Result<Self, WeatherNowError> {
        let contents = fs::read_to_string(path)?;
        let directory = Self::from_json(&contents)?;
        log::debug!(
            "Loaded {} cities from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// Case-insensitive exact lookup, returning the directory's own spelling
    ///
    /// Only case is folded: surrounding whitespace makes a different name.
    pub fn find(&self, name: &str) -> Option<&str> {
        let needle = name.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.names
            .iter()
            .find(|candidate| candidate.to_lowercase() == needle)
            .map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod directory_tests;
