//! Canonical time value and its derived display string.
//!
//! Field texts may be transiently partial while a field is being edited; the
//! display string never is. Empty fields render as `00`, single digits are
//! left-padded, and a cleared meridiem is left out.

use chrono::{NaiveTime, Timelike};

use super::field::{Field, FormatMode, Meridiem};
use super::validator::DefaultTime;
use crate::tlog_debug;

#[derive(Debug, Clone)]
pub struct TimeValue {
    mode: FormatMode,
    hour: String,
    minute: String,
    meridiem: Option<Meridiem>,

    // Most recent complete value per field, used to restore on blur.
    last_hour: String,
    last_minute: String,
    last_meridiem: Option<Meridiem>,

    display: String,
    last_notified: Option<String>,
}

impl TimeValue {
    /// Build from complete field values. In 24h mode the meridiem is dropped.
    pub fn new(hour: &str, minute: &str, meridiem: Option<Meridiem>, mode: FormatMode) -> Self {
        let meridiem = if mode.has_meridiem() { meridiem } else { None };
        let mut value = Self {
            mode,
            hour: hour.to_string(),
            minute: minute.to_string(),
            meridiem,
            last_hour: hour.to_string(),
            last_minute: minute.to_string(),
            last_meridiem: meridiem,
            display: String::new(),
            last_notified: None,
        };
        value.display = value.compute_display();
        value
    }

    /// Seed from a wall-clock reading supplied by the caller.
    pub fn from_clock(now: NaiveTime, mode: FormatMode) -> Self {
        let minute = format!("{:02}", now.minute());
        match mode {
            FormatMode::Hour24 => Self::new(&format!("{:02}", now.hour()), &minute, None, mode),
            FormatMode::Hour12 => {
                let (_, hour12) = now.hour12();
                Self::new(
                    &format!("{:02}", hour12),
                    &minute,
                    Some(Meridiem::from_hour24(now.hour())),
                    mode,
                )
            }
        }
    }

    pub fn from_default(default: &DefaultTime, mode: FormatMode) -> Self {
        Self::new(&default.hour, &default.minute, default.meridiem, mode)
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn hour(&self) -> &str {
        &self.hour
    }

    pub fn minute(&self) -> &str {
        &self.minute
    }

    pub fn meridiem(&self) -> Option<Meridiem> {
        self.meridiem
    }

    /// Current text of a field as the user sees it in the input.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Hour => &self.hour,
            Field::Minute => &self.minute,
            Field::Meridiem => self.meridiem.map(|m| m.as_str()).unwrap_or(""),
        }
    }

    pub fn last_committed(&self, field: Field) -> &str {
        match field {
            Field::Hour => &self.last_hour,
            Field::Minute => &self.last_minute,
            Field::Meridiem => self.last_meridiem.map(|m| m.as_str()).unwrap_or(""),
        }
    }

    pub fn is_complete(&self, field: Field) -> bool {
        field.is_complete(self.text(field), self.mode)
    }

    pub fn display_value(&self) -> &str {
        &self.display
    }

    /// Set the hour text. Returns the display value to announce, if any.
    pub fn set_hour(&mut self, text: &str) -> Option<String> {
        self.hour = text.to_string();
        if Field::Hour.is_complete(text, self.mode) {
            self.last_hour = text.to_string();
        }
        self.recompute()
    }

    /// Set the minute text. Returns the display value to announce, if any.
    pub fn set_minute(&mut self, text: &str) -> Option<String> {
        self.minute = text.to_string();
        if Field::Minute.is_complete(text, self.mode) {
            self.last_minute = text.to_string();
        }
        self.recompute()
    }

    /// Set or clear the meridiem. Ignored in 24h mode.
    pub fn set_meridiem(&mut self, meridiem: Option<Meridiem>) -> Option<String> {
        if !self.mode.has_meridiem() {
            return None;
        }
        self.meridiem = meridiem;
        if meridiem.is_some() {
            self.last_meridiem = meridiem;
        }
        self.recompute()
    }

    /// Set any field from its raw text. Meridiem text that is not `AM`/`PM`
    /// clears the field.
    pub fn set(&mut self, field: Field, text: &str) -> Option<String> {
        match field {
            Field::Hour => self.set_hour(text),
            Field::Minute => self.set_minute(text),
            Field::Meridiem => self.set_meridiem(Meridiem::parse(text)),
        }
    }

    /// Put a partially edited field back to its last committed value.
    /// Complete fields are left alone.
    pub fn restore(&mut self, field: Field) -> Option<String> {
        if self.is_complete(field) {
            return None;
        }
        let previous = self.last_committed(field).to_string();
        tlog_debug!("Restoring {} to '{}'", field, previous);
        self.set(field, &previous)
    }

    /// Announce the current display value once, e.g. right after mount.
    pub fn announce(&mut self) -> Option<String> {
        self.take_notification()
    }

    fn recompute(&mut self) -> Option<String> {
        self.display = self.compute_display();
        self.take_notification()
    }

    fn take_notification(&mut self) -> Option<String> {
        if self.display.is_empty() || self.last_notified.as_deref() == Some(self.display.as_str())
        {
            return None;
        }
        self.last_notified = Some(self.display.clone());
        Some(self.display.clone())
    }

    fn compute_display(&self) -> String {
        let mut display = format!("{}:{}", pad(&self.hour), pad(&self.minute));
        if let Some(meridiem) = self.meridiem {
            display.push(' ');
            display.push_str(meridiem.as_str());
        }
        display
    }
}

fn pad(text: &str) -> String {
    format!("{:0>2}", text)
}
