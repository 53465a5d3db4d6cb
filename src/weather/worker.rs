//! Weather Worker Thread
//!
//! Runs weather fetches on a background thread so the UI stays responsive.
//! Requests arrive over a channel; each one is fetched concurrently on the
//! worker's runtime and the result is sent back tagged with its request id.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::{FetchError, WeatherClient};
use super::snapshot::WeatherSnapshot;

/// Request messages sent to the weather worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherRequest {
    Fetch {
        city: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the weather worker
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherResponse {
    Success {
        snapshot: WeatherSnapshot,
        request_id: u64,
    },
    Failure {
        error: FetchError,
        request_id: u64,
    },
}

impl WeatherResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            WeatherResponse::Success { request_id, .. }
            | WeatherResponse::Failure { request_id, .. } => *request_id,
        }
    }
}

/// Spawn the weather worker thread
///
/// The credential is handed over here and forwarded to every fetch; the
/// worker never reads it from the environment. The thread exits once
/// `request_rx` is closed.
pub fn spawn_worker(
    client: WeatherClient,
    api_key: Option<String>,
    request_rx: UnboundedReceiver<WeatherRequest>,
    response_tx: Sender<WeatherResponse>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start weather worker runtime: {}", e);
                return;
            }
        };

        runtime.block_on(worker_loop(client, api_key, request_rx, response_tx));
    })
}

/// Main worker loop - processes requests until the channel is closed
///
/// Fetches are not serialized: a new request starts while earlier ones are
/// still in flight, and callers discard stale results by request id.
async fn worker_loop(
    client: WeatherClient,
    api_key: Option<String>,
    mut request_rx: UnboundedReceiver<WeatherRequest>,
    response_tx: Sender<WeatherResponse>,
) {
    let client = Arc::new(client);
    let api_key: Option<Arc<str>> = api_key
        .filter(|k| !k.trim().is_empty())
        .map(Arc::from);

    if api_key.is_none() {
        log::debug!("Weather API key not configured");
    }

    while let Some(request) = request_rx.recv().await {
        match request {
            WeatherRequest::Fetch { city, request_id } => {
                let client = Arc::clone(&client);
                let api_key = api_key.clone();
                let response_tx = response_tx.clone();

                tokio::spawn(async move {
                    let response =
                        handle_fetch(&client, api_key.as_deref(), city, request_id).await;
                    if response_tx.send(response).is_err() {
                        log::debug!("UI disconnected, dropping response {}", request_id);
                    }
                });
            }
        }
    }

    log::debug!("Weather worker shutting down");
}

async fn handle_fetch(
    client: &WeatherClient,
    api_key: Option<&str>,
    city: String,
    request_id: u64,
) -> WeatherResponse {
    let Some(api_key) = api_key else {
        return WeatherResponse::Failure {
            error: FetchError::NotConfigured(
                "Missing API key. Use --api-key, OPENWEATHER_API_KEY, or [weather] api_key in config."
                    .to_string(),
            ),
            request_id,
        };
    };

    match client.fetch(&city, api_key).await {
        Ok(snapshot) => WeatherResponse::Success {
            snapshot,
            request_id,
        },
        Err(error) => {
            log::warn!("Weather fetch {} for {} failed: {}", request_id, city, error);
            WeatherResponse::Failure { error, request_id }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
