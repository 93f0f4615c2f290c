//! Headless time editing engine.
//!
//! Everything here is presentation-agnostic and synchronous: callers feed in
//! field text, list clicks and interaction events, and read back values and
//! highlight state.

pub mod field;
pub mod listener;
pub mod mask;
pub mod overlay;
pub mod selection;
pub mod time_value;
pub mod validator;

pub use field::{Field, FormatMode, Meridiem};
pub use listener::{InteractionHub, Subscription};
pub use mask::{mask_digits, mask_meridiem, MaskOutcome, MeridiemOutcome};
pub use overlay::{Boundary, NodeId, Overlay, OverlayState};
pub use selection::{ListEntry, SelectionList, SelectionSync};
pub use time_value::TimeValue;
pub use validator::{validate_default_time, DefaultTime};
