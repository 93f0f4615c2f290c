//! Mounting, default times, the error state and teardown.

use chrono::NaiveTime;
use crossterm::event::KeyCode;

use timepick::core::{Field, OverlayState};
use timepick::tea::{DisplayState, Message, INVALID_DEFAULT_TIME_MESSAGE};

use super::fixtures::{config, Picker};

#[test]
fn test_valid_12h_default_time() {
    let picker = Picker::with_default("09:49 AM");

    assert_eq!(picker.text(Field::Hour), "09");
    assert_eq!(picker.text(Field::Minute), "49");
    assert_eq!(picker.text(Field::Meridiem), "AM");
    assert_eq!(picker.model.display, DisplayState::Ready);
    assert_eq!(picker.notifications, vec!["09:49 AM"]);
}

#[test]
fn test_lowercase_meridiem_default_is_normalized() {
    let picker = Picker::with_default("07:05 pm");
    assert_eq!(picker.display(), "07:05 PM");
    assert_eq!(picker.highlighted(Field::Meridiem), Some("PM"));
}

#[test]
fn test_malformed_default_time_enters_error_state() {
    let mut picker = Picker::with_default("9:49");

    assert_eq!(
        picker.model.display,
        DisplayState::Error(INVALID_DEFAULT_TIME_MESSAGE.to_string())
    );
    assert!(picker.notifications.is_empty());

    let snapshot = picker.model.snapshot();
    assert_eq!(snapshot.error.as_deref(), Some(INVALID_DEFAULT_TIME_MESSAGE));

    // Terminal: nothing brings the controls back.
    picker.focus(Field::Hour);
    picker.type_str("11");
    picker.click_inside();
    assert!(picker.model.is_error());
    assert_eq!(picker.model.overlay.state(), OverlayState::Closed);
    assert!(picker.notifications.is_empty());
}

#[test]
fn test_default_time_must_match_active_format() {
    // A 12h value is malformed in 24h mode and the other way round.
    let picker = Picker::mount(config(Some("09:49 AM"), true));
    assert!(picker.model.is_error());

    let picker = Picker::mount(config(Some("21:05"), false));
    assert!(picker.model.is_error());

    let picker = Picker::mount(config(Some("21:05"), true));
    assert!(!picker.model.is_error());
    assert_eq!(picker.notifications, vec!["21:05"]);
}

#[test]
fn test_out_of_range_default_time_enters_error_state() {
    for value in ["99:99 AM", "13:00 AM", "09:60 AM"] {
        let picker = Picker::with_default(value);
        assert!(picker.model.is_error(), "{:?} should not mount", value);
        assert!(picker.notifications.is_empty());
    }

    let picker = Picker::mount(config(Some("24:00"), true));
    assert!(picker.model.is_error());
}

#[test]
fn test_non_ascii_digit_default_time_enters_error_state() {
    let mut picker = Picker::with_default("\u{0660}\u{0669}:\u{0664}\u{0669} AM");
    assert!(picker.model.is_error());
    assert!(picker.notifications.is_empty());

    picker.focus(Field::Hour);
    picker.type_str("11");
    assert!(picker.notifications.is_empty());
}

#[test]
fn test_24h_without_default_time() {
    let picker = Picker::mount_at(config(None, true), NaiveTime::from_hms_opt(0, 7, 0).unwrap());

    assert_eq!(picker.display(), "00:07");
    assert!(picker.model.lists.list(Field::Meridiem).is_none());

    let snapshot = picker.model.snapshot();
    assert!(snapshot.fields.iter().all(|f| f.field != Field::Meridiem));
    let hours: Vec<&str> = snapshot.lists[0]
        .entries
        .iter()
        .map(|e| e.text.as_str())
        .collect();
    let expected: Vec<String> = (0..24).map(|h| format!("{:02}", h)).collect();
    assert_eq!(hours, expected);
}

#[test]
fn test_clock_seed_in_12h_mode() {
    let picker = Picker::mount_at(config(None, false), NaiveTime::from_hms_opt(0, 5, 0).unwrap());
    assert_eq!(picker.display(), "12:05 AM");

    let picker = Picker::mount_at(config(None, false), NaiveTime::from_hms_opt(13, 45, 0).unwrap());
    assert_eq!(picker.display(), "01:45 PM");
}

#[test]
fn test_teardown_removes_the_only_listener() {
    let mut picker = Picker::with_default("09:49 AM");
    assert_eq!(picker.hub.listener_count(), 1);

    picker.send(Message::Teardown);
    assert_eq!(picker.hub.listener_count(), 0);
    assert!(!picker.model.overlay.is_listening());
    assert_eq!(picker.model.display, DisplayState::Unmounted);

    // Idempotent.
    picker.send(Message::Teardown);
    assert_eq!(picker.hub.listener_count(), 0);

    // Nothing reacts once unmounted.
    picker.focus(Field::Hour);
    picker.type_str("11");
    assert_eq!(picker.display(), "09:49 AM");
    assert_eq!(picker.notifications, vec!["09:49 AM"]);
}

#[test]
fn test_teardown_in_error_state() {
    let mut picker = Picker::with_default("bogus");
    picker.send(Message::Teardown);
    assert_eq!(picker.hub.listener_count(), 0);
}

#[test]
fn test_escape_quits_from_any_state() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.key(KeyCode::Esc);
    assert!(picker.quit);

    let mut picker = Picker::with_default("bogus");
    picker.key(KeyCode::Esc);
    assert!(picker.quit);
}

#[test]
fn test_each_widget_has_its_own_boundary() {
    let first = Picker::with_default("09:49 AM");
    let second = Picker::with_default("10:15 PM");
    assert_ne!(first.model.root(), second.model.root());
}
