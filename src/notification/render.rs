use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 50;
const MARGIN_RIGHT: u16 = 2;
const MARGIN_TOP: u16 = 1;

/// Render the current notification in the top-right corner, if any
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_expired();

    let Some(current) = notification.current() else {
        return;
    };

    let frame_area = frame.area();
    let available = frame_area.width.saturating_sub(MARGIN_RIGHT);
    let width = (current.message.width() as u16 + 4).min(MAX_WIDTH).min(available);
    if width < 5 || frame_area.height < 3 + MARGIN_TOP {
        return;
    }

    // Wrapped line count for the text width inside borders and padding
    let text_width = (width - 4).max(1) as usize;
    let lines = current.message.width().div_ceil(text_width).max(1) as u16;
    let height = (lines + 2).min(frame_area.height - MARGIN_TOP);

    let area = Rect {
        x: frame_area.x + frame_area.width - width - MARGIN_RIGHT,
        y: frame_area.y + MARGIN_TOP,
        width,
        height,
    };

    let color = match current.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(Line::from(current.message.as_str()))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .padding(ratatui::widgets::Padding::horizontal(1)),
        );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
