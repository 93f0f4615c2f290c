//! Field identities, format modes and the digit bounds they imply.

use std::fmt;

/// Hour display convention. Fixed for the lifetime of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatMode {
    #[default]
    Hour12,
    Hour24,
}

impl FormatMode {
    pub fn from_24_hour(use_24_hour: bool) -> Self {
        if use_24_hour {
            FormatMode::Hour24
        } else {
            FormatMode::Hour12
        }
    }

    pub fn has_meridiem(&self) -> bool {
        matches!(self, FormatMode::Hour12)
    }

    /// Fields present in this mode, in focus order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormatMode::Hour12 => &[Field::Hour, Field::Minute, Field::Meridiem],
            FormatMode::Hour24 => &[Field::Hour, Field::Minute],
        }
    }

    /// Human readable shape of a valid default time.
    pub fn pattern_hint(&self) -> &'static str {
        match self {
            FormatMode::Hour12 => "HH:MM AM/PM",
            FormatMode::Hour24 => "HH:MM",
        }
    }
}

/// One of the three editable time components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hour,
    Minute,
    Meridiem,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Hour => "Hour",
            Field::Minute => "Minute",
            Field::Meridiem => "AM/PM",
        }
    }

    /// Field that receives focus after this one commits.
    /// `None` means focus leaves the widget.
    pub fn next(&self, mode: FormatMode) -> Option<Field> {
        match self {
            Field::Hour => Some(Field::Minute),
            Field::Minute if mode.has_meridiem() => Some(Field::Meridiem),
            Field::Minute | Field::Meridiem => None,
        }
    }

    pub fn previous(&self) -> Option<Field> {
        match self {
            Field::Hour => None,
            Field::Minute => Some(Field::Hour),
            Field::Meridiem => Some(Field::Minute),
        }
    }

    /// Inclusive numeric bounds for digit fields, `None` for the meridiem.
    pub fn bounds(&self, mode: FormatMode) -> Option<(u8, u8)> {
        match (self, mode) {
            (Field::Hour, FormatMode::Hour12) => Some((1, 12)),
            (Field::Hour, FormatMode::Hour24) => Some((0, 23)),
            (Field::Minute, _) => Some((0, 59)),
            (Field::Meridiem, _) => None,
        }
    }

    /// True when `text` is a complete, in-range two-digit value.
    pub fn is_complete(&self, text: &str, mode: FormatMode) -> bool {
        match self.bounds(mode) {
            Some((min, max)) => {
                text.len() == 2
                    && text.bytes().all(|b| b.is_ascii_digit())
                    && text
                        .parse::<u8>()
                        .map(|v| (min..=max).contains(&v))
                        .unwrap_or(false)
            }
            None => Meridiem::parse(text).is_some(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The AM/PM designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    /// Accepts `AM`/`PM` in any case.
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("AM") {
            Some(Meridiem::Am)
        } else if text.eq_ignore_ascii_case("PM") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    /// Keystroke shortcut: `a`/`A` and `p`/`P`.
    pub fn from_key(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Meridiem::Am),
            'P' => Some(Meridiem::Pm),
            _ => None,
        }
    }

    pub fn from_hour24(hour: u32) -> Self {
        if hour >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
