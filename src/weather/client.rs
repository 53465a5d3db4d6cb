//! OpenWeatherMap HTTP client

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use super::snapshot::WeatherSnapshot;

/// Errors that can occur while fetching weather
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No API key was supplied
    #[error("Weather API not configured: {0}")]
    NotConfigured(String),

    /// Provider unreachable, timed out, or connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Provider has no data for the city (HTTP 404)
    #[error("No weather data found for {0}")]
    NotFound(String),

    /// Provider returned any other error status
    #[error("Weather API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not a current weather payload
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the current weather endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch current conditions for `city`
    ///
    /// The API key is passed per call; the client holds no credentials.
    pub async fn fetch(&self, city: &str, api_key: &str) -> Result<WeatherSnapshot, FetchError> {
        if api_key.trim().is_empty() {
            return Err(FetchError::NotConfigured("API key is empty".to_string()));
        }

        log::debug!("Fetching weather for {}", city);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(city.to_string()));
        }

        if !status.is_success() {
            return Err(FetchError::Api {
                code: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let snapshot =
            WeatherSnapshot::from_json(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        log::debug!("Received weather for {}: {:?}", city, snapshot);
        Ok(snapshot)
    }
}

/// Pull the provider's `message` field out of an error body, if there is one
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
