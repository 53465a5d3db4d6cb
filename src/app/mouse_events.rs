//! Mouse click handling
//!
//! Clicks commit suggestions, trigger the search button, and close the
//! suggestion list when they land anywhere outside it.

use crossterm::event::MouseEvent;

use super::app_state::App;
use crate::autocomplete::autocomplete_render::suggestion_index_at;
use crate::layout::Region;

/// Handle a left click on `region` (None means no component was hit)
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if app.help.visible {
        if region != Some(Region::HelpPopup) {
            app.help.close();
        }
        return;
    }

    match region {
        Some(Region::SuggestionList) => click_suggestion_list(app, mouse),
        Some(Region::SearchButton) => {
            app.autocomplete.dismiss();
            app.search();
        }
        _ => dismiss_suggestions(app),
    }
}

fn click_suggestion_list(app: &mut App, mouse: MouseEvent) {
    let Some(area) = app.layout_regions.suggestion_list else {
        return;
    };
    let offset = app.layout_regions.suggestion_offset;
    if let Some(index) = suggestion_index_at(area, offset, mouse.row) {
        app.commit_suggestion(index);
    }
}

fn dismiss_suggestions(app: &mut App) {
    if app.autocomplete.is_visible() {
        log::debug!("Click outside suggestion list, dismissing");
        app.autocomplete.dismiss();
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
