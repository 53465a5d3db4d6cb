//! weathernow: terminal weather lookup with city autocomplete
//!
//! Type a city name, pick one of the suggested cities from the built-in (or
//! configured) city list, and the current conditions are fetched from the
//! OpenWeatherMap API and rendered in the terminal.

pub mod app;
pub mod autocomplete;
pub mod cities;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod notification;
pub mod weather;
pub mod widgets;

#[cfg(test)]
mod test_utils;
