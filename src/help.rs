//! Help popup module
//!
//! Key and mouse bindings shown in the bottom help line and the F1 popup.

mod content;
pub mod help_line_render;
pub mod help_popup_render;
mod state;

pub use content::{HELP_ENTRIES, HELP_FOOTER};
pub use state::HelpPopupState;
