//! Structured logging for debugging timepick.
//!
//! Log levels:
//! - ERROR: Terminal failures (terminal setup, render errors)
//! - WARN: Configuration errors, such as a malformed default time
//! - INFO: High-level notifications (startup, shutdown, selected time)
//! - DEBUG: Commits, overlay transitions, focus hand-offs
//! - TRACE: Rejected keystrokes and other per-event noise
//!
//! Debug mode can be enabled with `--debug` or `TIMEPICK_DEBUG=1`. The level
//! can be set explicitly with `TIMEPICK_LOG=<level>`, which wins over both.
//!
//! Nothing is written until [`init`] has been called, so the library stays
//! silent when embedded or under test.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Log levels for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Parse a level name as accepted by `TIMEPICK_LOG` (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Pick the effective level from the debug flag and the two env vars.
fn resolve_level(debug: bool, debug_env: Option<&str>, level_env: Option<&str>) -> LogLevel {
    if let Some(level) = level_env.and_then(LogLevel::parse) {
        return level;
    }
    let env_debug = debug_env
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if debug || env_debug {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

/// Initialize logging to ~/.timepick/timepick.log.
pub fn init(debug: bool) {
    let debug_env = std::env::var("TIMEPICK_DEBUG").ok();
    let level_env = std::env::var("TIMEPICK_LOG").ok();
    set_level(resolve_level(
        debug,
        debug_env.as_deref(),
        level_env.as_deref(),
    ));

    if let Some(app_dir) = dirs::home_dir().map(|h| h.join(".timepick")) {
        let _ = std::fs::create_dir_all(&app_dir);
        let path = app_dir.join("timepick.log");
        // Truncate file on startup
        let _ = std::fs::write(&path, "");
        LOG_PATH.set(path).ok();
    }
}

/// Path of the active log file, if logging was initialized.
pub fn log_path() -> Option<&'static Path> {
    LOG_PATH.get().map(PathBuf::as_path)
}

/// Set the minimum log level for output.
pub fn set_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Get the current log level.
pub fn get_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

fn format_line(timestamp: &str, level: LogLevel, msg: &str) -> String {
    format!("[{}] [{:<5}] {}", timestamp, level.as_str(), msg)
}

/// Log a message at the specified level.
pub fn log_at(level: LogLevel, msg: &str) {
    if level > get_level() {
        return;
    }

    let Some(path) = LOG_PATH.get() else { return };
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let _ = writeln!(file, "{}", format_line(&timestamp, level, msg));
    }
}

/// Log macro for INFO level.
#[macro_export]
macro_rules! tlog {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Info, &format!($($arg)*))
    };
}

/// Log macro for ERROR level.
#[macro_export]
macro_rules! tlog_error {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Error, &format!($($arg)*))
    };
}

/// Log macro for WARN level.
#[macro_export]
macro_rules! tlog_warn {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Warn, &format!($($arg)*))
    };
}

/// Log macro for DEBUG level (only logs when debug mode is enabled).
#[macro_export]
macro_rules! tlog_debug {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Debug, &format!($($arg)*))
    };
}

/// Log macro for TRACE level.
#[macro_export]
macro_rules! tlog_trace {
    ($($arg:tt)*) => {
        $crate::log::log_at($crate::log::LogLevel::Trace, &format!($($arg)*))
    };
}
