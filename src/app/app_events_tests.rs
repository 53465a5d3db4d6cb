//! Tests for keyboard and paste handling

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use proptest::prelude::*;

use crate::test_utils::test_helpers::{
    key, key_with_mods, test_app, test_app_with_worker, type_text,
};
use crate::weather::WeatherRequest;

#[test]
fn test_typing_opens_suggestions() {
    let mut app = test_app();
    type_text(&mut app, "l");

    assert_eq!(app.query(), "l");
    assert_eq!(app.autocomplete.suggestions(), ["London", "Lisbon"]);
    assert_eq!(app.autocomplete.active_index(), Some(0));
}

#[test]
fn test_backspace_recomputes_suggestions() {
    let mut app = test_app();
    type_text(&mut app, "lo");
    assert_eq!(app.autocomplete.suggestions(), ["London"]);

    app.handle_key_event(key(KeyCode::Backspace));

    assert_eq!(app.autocomplete.suggestions(), ["London", "Lisbon"]);
    assert_eq!(app.autocomplete.active_index(), Some(0));
}

#[test]
fn test_clearing_input_returns_to_idle() {
    let mut app = test_app();
    type_text(&mut app, "p");
    app.handle_key_event(key(KeyCode::Backspace));

    assert!(!app.autocomplete.is_visible());
    assert_eq!(app.autocomplete.query(), "");
}

#[test]
fn test_down_up_wrap_around() {
    let mut app = test_app();
    type_text(&mut app, "l");

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.autocomplete.active_index(), Some(1));
    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.autocomplete.active_index(), Some(0));
    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.autocomplete.active_index(), Some(1));
    assert_eq!(app.query(), "l");
}

#[test]
fn test_enter_commits_active_suggestion() {
    let (mut app, mut request_rx, _response_tx) = test_app_with_worker();
    type_text(&mut app, "l");
    app.handle_key_event(key(KeyCode::Down));

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(
        request_rx.try_recv().unwrap(),
        WeatherRequest::Fetch {
            city: "Lisbon".to_string(),
            request_id: 1,
        }
    );
    assert_eq!(app.query(), "Lisbon");
    assert!(!app.autocomplete.is_visible());
}

#[test]
fn test_enter_without_list_does_nothing() {
    let (mut app, mut request_rx, _response_tx) = test_app_with_worker();
    type_text(&mut app, "Paris");
    app.handle_key_event(key(KeyCode::Esc));

    app.handle_key_event(key(KeyCode::Enter));

    assert!(request_rx.try_recv().is_err());
    assert_eq!(app.query(), "Paris");
    assert!(!app.should_quit());
}

#[test]
fn test_ctrl_s_searches_literal_query() {
    let (mut app, mut request_rx, _response_tx) = test_app_with_worker();
    type_text(&mut app, "LONDON");

    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));

    match request_rx.try_recv().unwrap() {
        WeatherRequest::Fetch { city, .. } => assert_eq!(city, "London"),
    }
}

#[test]
fn test_ctrl_s_unknown_city_resets_query() {
    let (mut app, mut request_rx, _response_tx) = test_app_with_worker();
    type_text(&mut app, "Zanzibarrrr");

    app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));

    assert!(request_rx.try_recv().is_err());
    assert_eq!(app.query(), "");
    assert_eq!(
        app.notification.current_message(),
        Some("City not found: Zanzibarrrr")
    );
}

#[test]
fn test_esc_dismisses_list_then_quits() {
    let mut app = test_app();
    type_text(&mut app, "l");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.autocomplete.is_visible());
    assert_eq!(app.query(), "l");
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[test]
fn test_typing_after_dismiss_reopens_list() {
    let mut app = test_app();
    type_text(&mut app, "l");
    app.handle_key_event(key(KeyCode::Esc));

    type_text(&mut app, "i");

    assert_eq!(app.autocomplete.suggestions(), ["Lisbon"]);
}

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    type_text(&mut app, "l");
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_f1_toggles_help_and_blocks_typing() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    type_text(&mut app, "lo");
    assert_eq!(app.query(), "");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
    assert!(!app.should_quit());

    app.handle_key_event(key(KeyCode::F(1)));
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(!app.help.visible);
}

#[test]
fn test_key_release_events_are_ignored() {
    let mut app = test_app();
    let mut release = key(KeyCode::Char('x'));
    release.kind = KeyEventKind::Release;

    app.handle_event(Event::Key(release));

    assert_eq!(app.query(), "");
}

#[test]
fn test_paste_updates_query_and_suggestions() {
    let mut app = test_app();
    app.handle_event(Event::Paste("Lis".to_string()));

    assert_eq!(app.query(), "Lis");
    assert_eq!(app.autocomplete.suggestions(), ["Lisbon"]);
}

#[test]
fn test_paste_with_newline_stays_single_line() {
    let mut app = test_app();
    app.handle_paste_event("Par\nis".to_string());

    assert_eq!(app.query(), "Par is");
    assert_eq!(app.input.textarea.lines().len(), 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Whatever is typed, the list always matches the current input
    #[test]
    fn prop_suggestions_follow_input(text in "[a-zA-Z ]{0,8}") {
        let mut app = test_app();
        type_text(&mut app, &text);

        let expected = crate::autocomplete::match_prefix(
            app.query(),
            &app.directory,
            app.max_suggestions,
        );
        prop_assert_eq!(app.autocomplete.suggestions(), expected.as_slice());
        prop_assert!(app.autocomplete.suggestions().len() <= 5);
    }

    /// Navigation never changes the query and keeps the index in range
    #[test]
    fn prop_navigation_keeps_query(moves in prop::collection::vec(any::<bool>(), 0..20)) {
        let mut app = test_app();
        type_text(&mut app, "l");

        for down in moves {
            let code = if down { KeyCode::Down } else { KeyCode::Up };
            app.handle_key_event(key(code));
        }

        prop_assert_eq!(app.query(), "l");
        let index = app.autocomplete.active_index().unwrap();
        prop_assert!(index < app.autocomplete.suggestions().len());
    }

    /// An unknown city never reaches the worker
    #[test]
    fn prop_unknown_city_never_fetched(name in "[xqz]{3,10}") {
        let (mut app, mut request_rx, _response_tx) = test_app_with_worker();
        type_text(&mut app, &name);
        app.handle_key_event(key_with_mods(KeyCode::Char('s'), KeyModifiers::CONTROL));

        prop_assert!(request_rx.try_recv().is_err());
        prop_assert_eq!(app.query(), "");
    }
}
