//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - keyboard events from the
//! terminal, or the lower-level UI events any other host can produce
//! directly.

use crossterm::event::KeyEvent;

use crate::core::{Field, NodeId};

/// Input messages to the update function.
#[derive(Debug, Clone)]
pub enum Message {
    // Keyboard/terminal events
    /// Raw key press, routed to the focused field.
    Key(KeyEvent),

    // Field events
    /// The field's accumulated text after one character was inserted or
    /// removed.
    FieldInput { field: Field, text: String },
    FocusIn(Field),
    Blur(Field),
    /// Focus left the widget entirely.
    FocusOut,

    // List and pointer events
    ListClick { field: Field, index: usize },
    /// Pointer interaction anywhere in the host; `ancestry` is the target
    /// followed by its ancestors. Empty means outside everything.
    Interaction { ancestry: Vec<NodeId> },
    EnterPressed,

    // Lifecycle
    Teardown,
}
