//! Weather panel rendering
//!
//! Renders the current conditions panel and the row of detail boxes below it.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::icons::{self, ICON_WIDTH};
use super::weather_state::WeatherState;
use crate::widgets::popup;

// Shown before the first successful fetch
const PLACEHOLDER_CITY: &str = "City Name";
const PLACEHOLDER_CONDITION: &str = "Clear";
const MISSING_VALUE: &str = "--";

/// Render the current conditions panel
pub fn render_panel(weather: &WeatherState, frame: &mut Frame, area: Rect) {
    let title = match (&weather.pending_city, weather.loading) {
        (Some(city), true) => format!(" Current Weather (loading {}…) ", city),
        _ => " Current Weather ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = popup::inset_rect(inner, 1, 0);
    let [text_area, icon_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(ICON_WIDTH)]).areas(inner);

    let snapshot = weather.snapshot.as_ref();
    let temperature = snapshot.map(|s| s.temperature_c()).unwrap_or(0);
    let place = snapshot
        .map(|s| s.display_name())
        .unwrap_or_else(|| PLACEHOLDER_CITY.to_string());
    let condition = snapshot
        .map(|s| s.condition.label().to_string())
        .unwrap_or_else(|| PLACEHOLDER_CONDITION.to_string());

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                temperature.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" °C", Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            place,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(condition, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines), text_area);

    let icon = match snapshot {
        Some(s) => icons::icon_for(&s.condition),
        None => icons::fallback_icon(),
    };
    let icon_lines: Vec<Line> = icon
        .lines
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(icon.color))))
        .collect();
    frame.render_widget(Paragraph::new(icon_lines), icon_area);
}

/// Render the humidity / pressure / wind / feels-like boxes
pub fn render_details(weather: &WeatherState, frame: &mut Frame, area: Rect) {
    let boxes = detail_values(weather);
    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for ((title, value), box_area) in boxes.into_iter().zip(areas.iter()) {
        let widget = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(widget, *box_area);
    }
}

/// Titles and formatted values for the detail boxes
pub fn detail_values(weather: &WeatherState) -> [(&'static str, String); 4] {
    match &weather.snapshot {
        Some(s) => [
            ("Humidity", format!("{}%", s.humidity)),
            ("Pressure", format!("{} hPa", s.pressure)),
            ("Wind", format!("{} m/s", s.wind_speed)),
            ("Feels Like", format!("{}°C", s.feels_like_c())),
        ],
        None => [
            ("Humidity", MISSING_VALUE.to_string()),
            ("Pressure", MISSING_VALUE.to_string()),
            ("Wind", MISSING_VALUE.to_string()),
            ("Feels Like", MISSING_VALUE.to_string()),
        ],
    }
}

#[cfg(test)]
#[path = "weather_render_tests.rs"]
mod weather_render_tests;
