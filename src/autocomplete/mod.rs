pub mod autocomplete_render;
mod autocomplete_state;
mod matcher;

pub use autocomplete_state::{AutocompleteState, SuggestionList};
pub use matcher::{MAX_SUGGESTIONS, match_prefix};
