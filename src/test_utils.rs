#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::cities::CityDirectory;
    use crate::config::Config;
    use crate::weather::{Condition, WeatherRequest, WeatherResponse, WeatherSnapshot};

    /// OpenWeatherMap current weather body for London
    pub const LONDON_JSON: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "base": "stations",
        "main": {
            "temp": 288.15,
            "feels_like": 287.6,
            "temp_min": 286.9,
            "temp_max": 289.3,
            "pressure": 1012,
            "humidity": 72
        },
        "visibility": 10000,
        "wind": {"speed": 4.6, "deg": 240},
        "clouds": {"all": 75},
        "dt": 1700000000,
        "sys": {"type": 2, "id": 2075535, "country": "GB", "sunrise": 1699946000, "sunset": 1699978000},
        "timezone": 0,
        "id": 2643743,
        "name": "London",
        "cod": 200
    }"#;

    /// The snapshot `LONDON_JSON` decodes to, under another city name
    pub fn sample_snapshot(city: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            city: city.to_string(),
            country: "GB".to_string(),
            temperature_k: 288.15,
            feels_like_k: 287.6,
            humidity: 72.0,
            pressure: 1012.0,
            wind_speed: 4.6,
            condition: Condition::Clouds,
        }
    }

    pub fn test_directory() -> CityDirectory {
        CityDirectory::new(vec![
            "Paris".to_string(),
            "London".to_string(),
            "Lisbon".to_string(),
        ])
    }

    /// App over Paris / London / Lisbon with no weather worker
    pub fn test_app() -> App {
        App::new(test_directory(), &Config::default())
    }

    /// App wired to in-test channels standing in for the weather worker
    pub fn test_app_with_worker() -> (App, UnboundedReceiver<WeatherRequest>, Sender<WeatherResponse>) {
        let mut app = test_app();
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.weather.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one key press at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    pub fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buffer[(x, y)].symbol());
            }
            output.push('\n');
        }
        output
    }

    pub fn render_app(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }
}
