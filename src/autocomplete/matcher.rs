//! Prefix matching over the city directory

use crate::cities::CityDirectory;

/// Default cap on the number of suggestions shown
pub const MAX_SUGGESTIONS: usize = 5;

/// Return up to `limit` directory entries that start with `prefix`
///
/// Comparison is case-insensitive. Matches keep the directory's order and an
/// empty prefix matches nothing.
pub fn match_prefix(prefix: &str, directory: &CityDirectory, limit: usize) -> Vec<String> {
    if prefix.is_empty() {
        return Vec::new();
    }

    let prefix = prefix.to_lowercase();
    directory
        .names()
        .iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
