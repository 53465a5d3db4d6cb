//! Input field rendering
//!
//! Renders the city text area and the search button next to it.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub const SEARCH_BUTTON_LABEL: &str = "[ Search ]";
const SEARCH_BUTTON_WIDTH: u16 = 14;

/// Render the input row and record the input and button areas
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let [input_area, button_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(SEARCH_BUTTON_WIDTH)])
            .areas(area);

    let border_color = if app.autocomplete.is_visible() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" City ")
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(&app.input.textarea, input_area);

    let button_style = if app.input.query().trim().is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(SEARCH_BUTTON_LABEL)
        .style(button_style)
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(button, button_area);

    app.layout_regions.input_field = Some(input_area);
    app.layout_regions.search_button = Some(button_area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
