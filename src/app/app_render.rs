use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::weather::weather_render;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let [title_area, input_area, panel_area, details_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let title = Line::from(vec![Span::styled(
            " WeatherNow ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]);
        frame.render_widget(Paragraph::new(title), title_area);

        crate::input::input_render::render_field(self, frame, input_area);

        weather_render::render_panel(&self.weather, frame, panel_area);
        weather_render::render_details(&self.weather, frame, details_area);
        self.layout_regions.weather_panel = Some(panel_area);
        self.layout_regions.detail_boxes = Some(details_area);

        crate::help::help_line_render::render_line(self, frame, help_area);

        // Drop-down overlays the weather panel, anchored to the text field
        if self.autocomplete.is_visible() {
            let anchor = self.layout_regions.input_field.unwrap_or(input_area);
            crate::autocomplete::autocomplete_render::render_popup(self, frame, anchor);
        }

        if self.help.visible {
            crate::help::help_popup_render::render_popup(self, frame);
        }

        render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
