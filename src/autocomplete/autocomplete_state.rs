use crate::cities::CityDirectory;

use super::matcher::match_prefix;

/// A non-empty list of suggestions with an in-range active index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
    items: Vec<String>,
    active: usize,
}

impl SuggestionList {
    /// Returns `None` for an empty list, which has nothing to highlight
    pub fn new(items: Vec<String>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, active: 0 })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &str {
        &self.items[self.active]
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    fn select_next(&mut self) {
        self.active = (self.active + 1) % self.items.len();
    }

    fn select_previous(&mut self) {
        self.active = (self.active + self.items.len() - 1) % self.items.len();
    }
}

/// Autocomplete state for the city input
///
/// `Typing` is the only state with a visible list. A non-empty query without
/// a list (dismissed, committed, or unmatched) is `Dismissed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AutocompleteState {
    #[default]
    Idle,
    Typing {
        query: String,
        suggestions: SuggestionList,
    },
    Dismissed {
        query: String,
    },
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Replace the query and recompute suggestions from the directory
    ///
    /// The active index always restarts at the first suggestion.
    pub fn update_query(&mut self, query: &str, directory: &CityDirectory, limit: usize) {
        if query.is_empty() {
            *self = Self::Idle;
            return;
        }

        let query = query.to_string();
        *self = match SuggestionList::new(match_prefix(&query, directory, limit)) {
            Some(suggestions) => Self::Typing { query, suggestions },
            None => Self::Dismissed { query },
        };
    }

    /// Move the highlight down, wrapping to the top
    pub fn select_next(&mut self) {
        if let Self::Typing { suggestions, .. } = self {
            suggestions.select_next();
        }
    }

    /// Move the highlight up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if let Self::Typing { suggestions, .. } = self {
            suggestions.select_previous();
        }
    }

    /// Hide the suggestion list, keeping the query
    pub fn dismiss(&mut self) {
        if let Self::Typing { query, .. } = self {
            *self = Self::Dismissed {
                query: std::mem::take(query),
            };
        }
    }

    /// Record a committed city: the list closes and the query becomes the city
    pub fn set_committed(&mut self, city: &str) {
        *self = if city.is_empty() {
            Self::Idle
        } else {
            Self::Dismissed {
                query: city.to_string(),
            }
        };
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn query(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Typing { query, .. } | Self::Dismissed { query } => query,
        }
    }

    /// Visible suggestions (empty unless the list is open)
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::Typing { suggestions, .. } => suggestions.items(),
            _ => &[],
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        match self {
            Self::Typing { suggestions, .. } => Some(suggestions.active_index()),
            _ => None,
        }
    }

    /// The highlighted suggestion, if the list is open
    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::Typing { suggestions, .. } => Some(suggestions.active()),
            _ => None,
        }
    }

    pub fn suggestion_at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Typing { suggestions, .. } => suggestions.get(index),
            _ => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Typing { .. })
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
