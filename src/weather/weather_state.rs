//! Weather state management
//!
//! Holds the latest snapshot and the channel handles for talking to the
//! weather worker.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::client::FetchError;
use super::snapshot::WeatherSnapshot;
use super::worker::{WeatherRequest, WeatherResponse};

/// Result of a completed fetch, as seen by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherOutcome {
    /// The snapshot was replaced
    Updated { city: String },
    /// The fetch failed; the previous snapshot is kept
    Failed { city: String, error: FetchError },
}

/// Weather panel state
#[derive(Default)]
pub struct WeatherState {
    /// Most recent successful result, replaced wholesale
    pub snapshot: Option<WeatherSnapshot>,
    /// Whether the latest request is still outstanding
    pub loading: bool,
    /// City of the latest request
    pub pending_city: Option<String>,
    /// Incremented for each new request
    /// Responses for older ids are discarded
    pub request_id: u64,
    pub request_tx: Option<UnboundedSender<WeatherRequest>>,
    pub response_rx: Option<Receiver<WeatherResponse>>,
}

impl WeatherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<WeatherRequest>,
        response_rx: Receiver<WeatherResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Send a fetch request for `city`
    ///
    /// Returns false when there is no worker to send to.
    pub fn send_request(&mut self, city: &str) -> bool {
        let Some(tx) = &self.request_tx else {
            return false;
        };

        let request_id = self.request_id.wrapping_add(1);
        let request = WeatherRequest::Fetch {
            city: city.to_string(),
            request_id,
        };

        if tx.send(request).is_err() {
            log::warn!("Weather worker is gone, request for {} not sent", city);
            return false;
        }

        log::debug!("Sent weather request {} for {}", request_id, city);
        self.request_id = request_id;
        self.loading = true;
        self.pending_city = Some(city.to_string());
        true
    }

    /// Take the next response for the latest request, if one has arrived
    ///
    /// Responses to superseded requests are dropped without touching state.
    pub fn poll_response(&mut self) -> Option<WeatherOutcome> {
        let rx = self.response_rx.as_ref()?;

        loop {
            let response = match rx.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    if self.loading {
                        log::warn!("Weather worker disconnected with a request in flight");
                        self.loading = false;
                    }
                    return None;
                }
            };

            if response.request_id() != self.request_id {
                log::debug!(
                    "Discarding stale weather response {} (current: {})",
                    response.request_id(),
                    self.request_id
                );
                continue;
            }

            self.loading = false;
            let city = self.pending_city.take().unwrap_or_default();

            return Some(match response {
                WeatherResponse::Success { snapshot, .. } => {
                    self.snapshot = Some(snapshot);
                    WeatherOutcome::Updated { city }
                }
                WeatherResponse::Failure { error, .. } => WeatherOutcome::Failed { city, error },
            });
        }
    }
}

#[cfg(test)]
#[path = "weather_state_tests.rs"]
mod weather_state_tests;
