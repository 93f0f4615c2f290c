//! The Elm Architecture (TEA) wrapper around the time editing engine.
//!
//! This module provides a clean separation of concerns:
//! - `Model`: Pure widget state
//! - `Message`: UI events (keys, focus, clicks, pointer interactions)
//! - `Command`: Outputs for the host (notifications, focus hand-offs)
//! - `update`: Transition function that mutates the model

pub mod command;
pub mod message;
pub mod model;
pub mod update;

pub use command::Command;
pub use message::Message;
pub use model::{DisplayState, Model, INVALID_DEFAULT_TIME_MESSAGE};
pub use update::update;
