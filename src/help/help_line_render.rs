//! Help line rendering
//!
//! Renders the key summary at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = if app.autocomplete.is_visible() {
        " ↓/↑: Select | Enter: Look Up | Esc: Close List | F1: Help"
    } else if app.input.query().is_empty() {
        " Type a city name | F1: Help | Esc/Ctrl+C: Quit"
    } else {
        " Ctrl+S: Search | F1: Help | Esc/Ctrl+C: Quit"
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
