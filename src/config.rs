//! Configuration loading
//!
//! Reads `~/.config/weathernow/config.toml`. Every field is optional and a
//! missing file means defaults.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{AutocompleteConfig, CitiesConfig, Config, WeatherConfig};
