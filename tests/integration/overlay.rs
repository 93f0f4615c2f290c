//! Overlay open/close transitions.

use crossterm::event::KeyCode;

use timepick::core::{Field, NodeId, OverlayState};
use timepick::tea::Message;
use timepick::WidgetConfig;

use super::fixtures::Picker;

#[test]
fn test_starts_closed() {
    let picker = Picker::with_default("09:49 AM");
    assert_eq!(picker.model.overlay.state(), OverlayState::Closed);
    assert!(!picker.model.snapshot().overlay_open);
}

#[test]
fn test_inside_interaction_opens_outside_closes() {
    let mut picker = Picker::with_default("09:49 AM");

    picker.click_inside();
    assert!(picker.model.overlay.is_open());

    picker.click_outside();
    assert!(!picker.model.overlay.is_open());
}

#[test]
fn test_nested_target_counts_as_inside() {
    let mut picker = Picker::with_default("09:49 AM");
    let root = picker.model.root();
    picker.send(Message::Interaction {
        ancestry: vec![NodeId::next(), NodeId::next(), root],
    });
    assert!(picker.model.overlay.is_open());

    // A foreign tree is outside, however deep.
    picker.send(Message::Interaction {
        ancestry: vec![NodeId::next(), NodeId::next()],
    });
    assert!(!picker.model.overlay.is_open());
}

#[test]
fn test_focus_opens() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.key(KeyCode::Tab);
    assert_eq!(picker.model.focus, Some(Field::Hour));
    assert!(picker.model.overlay.is_open());
}

#[test]
fn test_enter_closes_only_on_meridiem() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Minute);
    picker.key(KeyCode::Enter);
    assert!(picker.model.overlay.is_open());

    picker.focus(Field::Meridiem);
    picker.key(KeyCode::Enter);
    assert!(!picker.model.overlay.is_open());
}

#[test]
fn test_meridiem_key_closes() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Meridiem);
    assert!(picker.model.overlay.is_open());

    picker.type_str("P");
    assert!(!picker.model.overlay.is_open());
    assert_eq!(picker.display(), "09:49 PM");
}

#[test]
fn test_highlight_survives_close_and_reopen() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Minute);
    picker.click_entry(Field::Minute, "12");
    picker.click_outside();
    picker.click_inside();

    assert!(picker.model.overlay.is_open());
    assert_eq!(picker.highlighted(Field::Minute), Some("12"));
}

#[test]
fn test_dropdown_disabled_never_opens() {
    let config = WidgetConfig {
        default_time: Some("09:49 AM".to_string()),
        show_dropdown: false,
        ..WidgetConfig::default()
    };
    let mut picker = Picker::mount(config);
    picker.focus(Field::Hour);
    picker.click_inside();
    assert!(!picker.model.overlay.is_open());

    // Lists are still built and kept in sync.
    picker.type_str("11");
    assert_eq!(picker.highlighted(Field::Hour), Some("11"));
}

#[test]
fn test_outside_interaction_after_teardown_is_ignored() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.click_inside();
    picker.send(Message::Teardown);
    assert!(!picker.model.overlay.is_open());

    picker.click_outside();
    assert_eq!(picker.model.overlay.state(), OverlayState::Closed);
}
