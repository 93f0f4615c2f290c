//! List clicks and reverse-sync from typed input.

use crossterm::event::KeyCode;

use timepick::core::Field;
use timepick::tea::Message;

use super::fixtures::Picker;

fn highlighted_count(picker: &Picker, field: Field) -> usize {
    picker
        .model
        .snapshot()
        .lists
        .iter()
        .filter(|l| l.field == field)
        .flat_map(|l| l.entries.iter())
        .filter(|e| e.highlighted)
        .count()
}

#[test]
fn test_click_after_typing_wins() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Minute);
    picker.type_str("1");
    assert_eq!(picker.text(Field::Minute), "1");

    picker.click_entry(Field::Minute, "37");
    assert_eq!(picker.text(Field::Minute), "37");
    assert_eq!(picker.highlighted(Field::Minute), Some("37"));
    assert_eq!(picker.display(), "09:37 AM");

    for field in [Field::Hour, Field::Minute, Field::Meridiem] {
        assert_eq!(highlighted_count(&picker, field), 1, "{}", field);
    }
}

#[test]
fn test_click_scrolls_group_to_top() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Minute);

    picker.click_entry(Field::Minute, "01");
    let list = picker.model.lists.list(Field::Minute).unwrap();
    // "00" and "01" share a row; the pair's head is scrolled to the top.
    assert_eq!(list.scroll_top(), 0);
    assert_eq!(list.highlighted_text(), Some("01"));

    picker.click_entry(Field::Minute, "42");
    let list = picker.model.lists.list(Field::Minute).unwrap();
    assert_eq!(list.scroll_top(), 42);
}

#[test]
fn test_typed_commit_moves_highlight() {
    let mut picker = Picker::with_default("09:49 AM");
    assert_eq!(picker.highlighted(Field::Hour), Some("09"));

    picker.focus(Field::Hour);
    picker.type_str("11");
    assert_eq!(picker.highlighted(Field::Hour), Some("11"));
    assert_eq!(highlighted_count(&picker, Field::Hour), 1);
}

#[test]
fn test_pending_digit_keeps_previous_highlight() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Hour);
    picker.key(KeyCode::Backspace);
    picker.key(KeyCode::Backspace);
    picker.type_str("1");

    assert_eq!(picker.highlighted(Field::Hour), Some("09"));
}

#[test]
fn test_meridiem_click() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Meridiem);
    picker.click_entry(Field::Meridiem, "PM");

    assert_eq!(picker.display(), "09:49 PM");
    assert_eq!(picker.highlighted(Field::Meridiem), Some("PM"));
    assert_eq!(picker.last_notification(), Some("09:49 PM"));
}

#[test]
fn test_click_while_closed_is_ignored() {
    let mut picker = Picker::with_default("09:49 AM");
    assert!(!picker.model.overlay.is_open());

    picker.send(Message::ListClick {
        field: Field::Hour,
        index: 0,
    });
    assert_eq!(picker.display(), "09:49 AM");
    assert_eq!(picker.highlighted(Field::Hour), Some("09"));
}

#[test]
fn test_click_out_of_range_index_is_ignored() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Hour);
    picker.send(Message::ListClick {
        field: Field::Hour,
        index: 99,
    });
    assert_eq!(picker.display(), "09:49 AM");
}

#[test]
fn test_same_value_click_does_not_notify() {
    let mut picker = Picker::with_default("09:49 AM");
    picker.focus(Field::Hour);
    let before = picker.notifications.len();

    picker.click_entry(Field::Hour, "09");
    assert_eq!(picker.notifications.len(), before);
}
