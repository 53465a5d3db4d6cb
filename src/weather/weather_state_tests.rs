//! Tests for WeatherState

use std::sync::mpsc;

use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use super::*;
use crate::test_utils::test_helpers::sample_snapshot;

fn connected_state() -> (
    WeatherState,
    UnboundedReceiver<WeatherRequest>,
    mpsc::Sender<WeatherResponse>,
) {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let mut state = WeatherState::new();
    state.set_channels(request_tx, response_rx);
    (state, request_rx, response_tx)
}

#[test]
fn test_new_state() {
    let state = WeatherState::new();
    assert!(state.snapshot.is_none());
    assert!(!state.loading);
    assert_eq!(state.request_id, 0);
}

#[test]
fn test_send_without_channel_fails() {
    let mut state = WeatherState::new();
    assert!(!state.send_request("London"));
    assert!(!state.loading);
}

#[test]
fn test_send_request_increments_id() {
    let (mut state, mut request_rx, _response_tx) = connected_state();

    assert!(state.send_request("London"));
    assert!(state.loading);
    assert_eq!(state.request_id, 1);
    assert_eq!(
        request_rx.try_recv().unwrap(),
        WeatherRequest::Fetch {
            city: "London".to_string(),
            request_id: 1
        }
    );

    assert!(state.send_request("Lisbon"));
    assert_eq!(state.request_id, 2);
}

#[test]
fn test_send_after_worker_exit_fails() {
    let (mut state, request_rx, _response_tx) = connected_state();
    drop(request_rx);

    assert!(!state.send_request("London"));
    assert_eq!(state.request_id, 0);
    assert!(!state.loading);
}

#[test]
fn test_poll_without_response() {
    let (mut state, _request_rx, _response_tx) = connected_state();
    assert!(state.poll_response().is_none());
}

#[test]
fn test_success_replaces_snapshot() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("London");

    response_tx
        .send(WeatherResponse::Success {
            snapshot: sample_snapshot("London"),
            request_id: 1,
        })
        .unwrap();

    assert_eq!(
        state.poll_response(),
        Some(WeatherOutcome::Updated {
            city: "London".to_string()
        })
    );
    assert!(!state.loading);
    assert_eq!(state.snapshot.as_ref().unwrap().city, "London");
}

#[test]
fn test_failure_keeps_previous_snapshot() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.snapshot = Some(sample_snapshot("Paris"));
    state.send_request("London");

    response_tx
        .send(WeatherResponse::Failure {
            error: FetchError::Network("timeout".to_string()),
            request_id: 1,
        })
        .unwrap();

    let outcome = state.poll_response().unwrap();
    assert!(matches!(outcome, WeatherOutcome::Failed { ref city, .. } if city == "London"));
    assert!(!state.loading);
    assert_eq!(state.snapshot.as_ref().unwrap().city, "Paris");
}

#[test]
fn test_stale_response_is_discarded() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("London");
    state.send_request("Lisbon");

    // The older request resolves last but must not overwrite the newer one
    response_tx
        .send(WeatherResponse::Success {
            snapshot: sample_snapshot("Lisbon"),
            request_id: 2,
        })
        .unwrap();
    response_tx
        .send(WeatherResponse::Success {
            snapshot: sample_snapshot("London"),
            request_id: 1,
        })
        .unwrap();

    assert_eq!(
        state.poll_response(),
        Some(WeatherOutcome::Updated {
            city: "Lisbon".to_string()
        })
    );
    assert!(state.poll_response().is_none());
    assert_eq!(state.snapshot.as_ref().unwrap().city, "Lisbon");
}

#[test]
fn test_stale_only_responses_leave_loading() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("London");
    state.send_request("Lisbon");

    response_tx
        .send(WeatherResponse::Failure {
            error: FetchError::Network("x".to_string()),
            request_id: 1,
        })
        .unwrap();

    assert!(state.poll_response().is_none());
    assert!(state.loading);
}

#[test]
fn test_disconnect_clears_loading() {
    let (mut state, _request_rx, response_tx) = connected_state();
    state.send_request("London");
    drop(response_tx);

    assert!(state.poll_response().is_none());
    assert!(!state.loading);
}
