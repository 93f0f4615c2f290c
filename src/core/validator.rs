//! One-shot validation of an externally supplied default time.
//!
//! The shape must be `HH:MM` in 24h mode or `HH:MM AM|PM` (any case) in 12h
//! mode, with ASCII digits only, and each field must be in range for the
//! mode: the parsed value becomes the first restore-on-blur target.

use regex::Regex;
use std::sync::LazyLock;

use super::field::{Field, FormatMode, Meridiem};
use crate::{Error, Result};

static TIME_24H_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").unwrap());

static TIME_12H_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2}) ((?i:AM|PM))$").unwrap());

/// Field texts extracted from a valid default time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTime {
    pub hour: String,
    pub minute: String,
    pub meridiem: Option<Meridiem>,
}

pub fn validate_default_time(value: &str, mode: FormatMode) -> Result<DefaultTime> {
    let re = match mode {
        FormatMode::Hour12 => &*TIME_12H_RE,
        FormatMode::Hour24 => &*TIME_24H_RE,
    };
    let invalid = || Error::InvalidDefaultTime {
        value: value.to_string(),
        expected: mode.pattern_hint(),
    };
    let caps = re.captures(value).ok_or_else(invalid)?;

    if !Field::Hour.is_complete(&caps[1], mode) || !Field::Minute.is_complete(&caps[2], mode) {
        return Err(invalid());
    }

    Ok(DefaultTime {
        hour: caps[1].to_string(),
        minute: caps[2].to_string(),
        meridiem: caps.get(3).and_then(|m| Meridiem::parse(m.as_str())),
    })
}
