//! Integration test suite for timepick.
//!
//! These tests drive a mounted widget through the public message/command
//! interface, the same way a host does, and check the externally observable
//! behavior: field text, list highlights, overlay state and the
//! `onTimeSelected` notifications.
//!
//! # Test Categories
//!
//! - `lifecycle`: construction, default times, error state, teardown
//! - `typing`: keystroke masking and focus hand-off
//! - `list_sync`: list clicks and reverse-sync from typed input
//! - `overlay`: open/close transitions
//! - `config_file`: loading widget options from TOML


mod config_file;
mod lifecycle;
mod list_sync;
mod overlay;
