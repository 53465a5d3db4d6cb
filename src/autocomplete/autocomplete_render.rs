//! Autocomplete popup rendering
//!
//! Draws the suggestion drop-down directly below the city input.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::popup;

const MIN_POPUP_WIDTH: u16 = 20;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

/// Render the suggestion list below `input_area`
///
/// The list scrolls to keep the active row visible when the popup is
/// clipped. The drawn area and scroll offset are recorded so clicks can be
/// mapped back to a suggestion.
pub fn render_popup(app: &mut App, frame: &mut Frame, input_area: Rect) {
    let suggestions = app.autocomplete.suggestions();
    if suggestions.is_empty() {
        return;
    }

    let popup_height = suggestions.len() as u16 + POPUP_BORDER_HEIGHT;
    let max_text_width = suggestions.iter().map(|s| s.width()).max().unwrap_or(0) as u16;
    let popup_width = (max_text_width + POPUP_PADDING).max(MIN_POPUP_WIDTH);

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= POPUP_PADDING {
        return;
    }

    let active = app.autocomplete.active_index();
    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, city)| {
            let line = if Some(i) == active {
                Line::from(Span::styled(
                    format!("► {}", city),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", city),
                    Style::default().fg(Color::White).bg(Color::Black),
                ))
            };
            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Cities ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    let mut state = ListState::default().with_selected(active);
    frame.render_stateful_widget(list, popup_area, &mut state);
    app.layout_regions.suggestion_list = Some(popup_area);
    app.layout_regions.suggestion_offset = state.offset();
}

/// Index of the suggestion drawn at screen row `row`, if any
///
/// `offset` is the index of the first visible suggestion.
pub fn suggestion_index_at(popup_area: Rect, offset: usize, row: u16) -> Option<usize> {
    let first_row = popup_area.y + 1;
    let last_row = popup_area.bottom().saturating_sub(1);
    if row < first_row || row >= last_row {
        return None;
    }
    Some(offset + (row - first_row) as usize)
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
