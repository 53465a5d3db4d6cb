//! Weather lookup
//!
//! The HTTP client for the OpenWeatherMap current weather endpoint, the
//! background worker that runs fetches off the UI thread, and the state and
//! rendering of the most recent snapshot.

mod client;
pub mod icons;
mod snapshot;
pub mod weather_render;
mod weather_state;
pub mod worker;

pub use client::{FetchError, WeatherClient};
pub use snapshot::{Condition, WeatherSnapshot, kelvin_to_celsius};
pub use weather_state::{WeatherOutcome, WeatherState};
pub use worker::{WeatherRequest, WeatherResponse};
