//! City directory
//!
//! The ordered, immutable list of known city names that autocomplete matches
//! against and that every commit is validated with.

mod directory;

pub use directory::CityDirectory;
