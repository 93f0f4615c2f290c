//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by whoever hosts the widget.

use crate::core::{Field, FormatMode};

/// Output commands from the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `onTimeSelected`: the display value changed to this non-empty string.
    NotifyTimeSelected(String),

    /// A field committed; the host should move focus to this field and
    /// report it back with `Message::FocusIn`.
    FocusField(Field),

    /// Focus should leave the widget.
    ReleaseFocus,

    Quit,
}

impl Command {
    /// Focus hand-off that follows a commit of `field`.
    pub fn advance_from(field: Field, mode: FormatMode) -> Self {
        match field.next(mode) {
            Some(next) => Command::FocusField(next),
            None => Command::ReleaseFocus,
        }
    }
}
