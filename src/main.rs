use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event;
use ratatui::DefaultTerminal;

use weathernow::app::{App, MouseCaptureGuard};
use weathernow::cities::CityDirectory;
use weathernow::config::{self, Config, ConfigResult};
use weathernow::weather::{WeatherClient, worker};

/// How long to wait for input before redrawing and polling the worker
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal weather lookup with city autocomplete
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// City to look up on startup
    city: Option<String>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// JSON array of city names to suggest from (default: built-in list)
    #[arg(long, value_name = "FILE")]
    cities: Option<PathBuf>,

    /// Config file (default: ~/.config/weathernow/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    // Everything that can fail outright happens before the terminal is taken over
    let directory = load_directory(&args, &config)?;
    let client = WeatherClient::new(
        config.weather.base_url.clone(),
        Duration::from_secs(config.weather.timeout_secs),
    )?;

    // Flag and environment first, then the config file
    let api_key = args.api_key.clone().or_else(|| config.weather.api_key.clone());

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(client, api_key, request_rx, response_tx);

    let mut app = App::new(directory, &config);
    app.weather.set_channels(request_tx, response_rx);
    if let Some(warning) = warning {
        app.notification.show_error(&warning);
    }
    if let Some(city) = &args.city {
        app.commit_city(city);
    }

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();

    // Dropping the app closes the request channel and lets the worker exit
    drop(app);
    if worker_handle.join().is_err() {
        log::warn!("Weather worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    let _mouse_capture = MouseCaptureGuard::new(std::io::stdout())?;

    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// `--cities` wins over `[cities] path`; with neither the built-in list is used
fn load_directory(args: &Args, config: &Config) -> Result<CityDirectory> {
    let path = args.cities.as_ref().or(config.cities.path.as_ref());

    match path {
        Some(path) => {
            let directory = CityDirectory::load(path)
                .wrap_err_with(|| format!("Failed to load city list from {}", path.display()))?;
            log::debug!("Loaded {} cities from {}", directory.len(), path.display());
            Ok(directory)
        }
        None => Ok(CityDirectory::builtin()),
    }
}

/// Debug builds log to a file in the temp dir; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::io::Write;

    let path = std::env::temp_dir().join("weathernow.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
