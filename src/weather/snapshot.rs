//! Weather snapshot model and API payload decoding

use std::fmt;

use serde::Deserialize;

/// Offset between Kelvin and Celsius
const KELVIN_OFFSET: f64 = 273.15;

/// Convert Kelvin to whole degrees Celsius for display
///
/// Halves round up (towards positive infinity), so -0.5 °C shows as 0.
pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    (kelvin - KELVIN_OFFSET + 0.5).floor() as i64
}

/// Weather condition category reported by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Mist,
    Fog,
    /// Any category outside the fixed vocabulary (Drizzle, Haze, Dust, ...)
    Other(String),
}

impl Condition {
    pub fn from_category(category: &str) -> Self {
        match category {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Snow" => Condition::Snow,
            "Thunderstorm" => Condition::Thunderstorm,
            "Mist" => Condition::Mist,
            "Fog" => Condition::Fog,
            other => Condition::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Mist => "Mist",
            Condition::Fog => "Fog",
            Condition::Other(category) => category,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Current conditions for one city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    pub temperature_k: f64,
    pub feels_like_k: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Sea-level pressure, hPa
    pub pressure: f64,
    /// Wind speed, m/s
    pub wind_speed: f64,
    pub condition: Condition,
}

impl WeatherSnapshot {
    /// Decode an OpenWeatherMap current weather response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let payload: ApiPayload = serde_json::from_str(body)?;
        Ok(payload.into())
    }

    pub fn temperature_c(&self) -> i64 {
        kelvin_to_celsius(self.temperature_k)
    }

    pub fn feels_like_c(&self) -> i64 {
        kelvin_to_celsius(self.feels_like_k)
    }

    /// "City, CC", or just the city when the country is missing
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiPayload {
    name: String,
    main: ApiMain,
    #[serde(default)]
    sys: ApiSys,
    #[serde(default)]
    wind: ApiWind,
    #[serde(default)]
    weather: Vec<ApiCondition>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSys {
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    main: String,
}

impl From<ApiPayload> for WeatherSnapshot {
    fn from(payload: ApiPayload) -> Self {
        let condition = payload
            .weather
            .first()
            .map(|w| Condition::from_category(&w.main))
            .unwrap_or(Condition::Clear);

        WeatherSnapshot {
            city: payload.name,
            country: payload.sys.country.unwrap_or_default(),
            temperature_k: payload.main.temp,
            feels_like_k: payload.main.feels_like,
            humidity: payload.main.humidity,
            pressure: payload.main.pressure,
            wind_speed: payload.wind.speed,
            condition,
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
