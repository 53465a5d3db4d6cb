use crate::autocomplete::AutocompleteState;
use crate::cities::CityDirectory;
use crate::config::Config;
use crate::error::WeatherNowError;
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::weather::{WeatherOutcome, WeatherState};

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: AutocompleteState,
    pub weather: WeatherState,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    pub layout_regions: LayoutRegions,
    pub directory: CityDirectory,
    pub max_suggestions: usize,
    pub should_quit: bool,
}

impl App {
    /// Create the app without a weather worker; see `WeatherState::set_channels`
    pub fn new(directory: CityDirectory, config: &Config) -> Self {
        Self {
            input: InputState::new(),
            autocomplete: AutocompleteState::new(),
            weather: WeatherState::new(),
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            layout_regions: LayoutRegions::new(),
            directory,
            max_suggestions: config.max_suggestions(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Recompute suggestions after the input text changed
    pub fn on_query_changed(&mut self) {
        let query = self.input.query().to_string();
        self.autocomplete
            .update_query(&query, &self.directory, self.max_suggestions);
    }

    /// Clear the input and return to idle
    pub fn reset_query(&mut self) {
        self.input.clear();
        self.autocomplete.reset();
    }

    /// Commit the highlighted suggestion; no-op without an open list
    pub fn commit_selected(&mut self) {
        if let Some(city) = self.autocomplete.selected().map(str::to_string) {
            self.commit_city(&city);
        }
    }

    /// Commit the suggestion at `index` of the open list
    pub fn commit_suggestion(&mut self, index: usize) {
        if let Some(city) = self.autocomplete.suggestion_at(index).map(str::to_string) {
            self.commit_city(&city);
        }
    }

    /// Explicit search: commit the literal query whatever the list shows
    pub fn search(&mut self) {
        let query = self.input.query().to_string();
        if query.trim().is_empty() {
            log::debug!("Ignoring search with an empty query");
            return;
        }
        self.commit_city(&query);
    }

    /// Validate `name` against the directory and request its weather
    ///
    /// Unknown names are reported, reset the query and never reach the worker.
    pub fn commit_city(&mut self, name: &str) {
        let Some(city) = self.directory.find(name).map(str::to_string) else {
            let error = WeatherNowError::UnknownCity(name.trim().to_string());
            log::debug!("Rejected commit: {}", error);
            self.notification.show_error(&error.to_string());
            self.reset_query();
            return;
        };

        log::debug!("Committing {}", city);
        self.autocomplete.set_committed(&city);
        self.input.set_text(&city);

        if !self.weather.send_request(&city) {
            self.notification
                .show_error("Weather service is not available");
        }
    }

    /// Apply finished weather fetches and expire old notifications
    pub fn tick(&mut self) {
        while let Some(outcome) = self.weather.poll_response() {
            self.apply_outcome(outcome);
        }
        self.notification.clear_expired();
    }

    fn apply_outcome(&mut self, outcome: WeatherOutcome) {
        match outcome {
            WeatherOutcome::Updated { city } => {
                log::debug!("Weather updated for {}", city);
                self.reset_query();
            }
            WeatherOutcome::Failed { city, error } => {
                log::warn!("Weather lookup for {} failed: {}", city, error);
                self.notification
                    .show_error(&format!("Could not load weather for {}: {}", city, error));
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
