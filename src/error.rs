use thiserror::Error;

/// Custom error types for weathernow
#[derive(Debug, Error)]
pub enum WeatherNowError {
    /// Committed name has no case-insensitive match in the city list
    #[error("City not found: {0}")]
    UnknownCity(String),

    #[error("Invalid city list: {0}")]
    InvalidCityList(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
