//! Per-keystroke masking of field input.
//!
//! Each call receives the field's text before the keystroke and the candidate
//! text after it, and decides what the field should hold. Invalid keystrokes
//! are absorbed: the caller keeps the previous text.
//!
//! Digit fields follow a two-character sliding window:
//! - one digit that could still grow into a valid value stays pending
//! - one digit that cannot grow is promoted to `0d` and commits
//! - two digits commit if in range, otherwise the new digit is discarded
//! - typing over a full field keeps the most recent valid suffix

use super::field::{Field, FormatMode, Meridiem};

/// Result of masking a digit field keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskOutcome {
    /// Keystroke discarded; the field keeps its previous text.
    Rejected,
    /// Accepted partial value (empty or one digit); more input expected.
    Pending(String),
    /// Complete two-digit value; focus should move on.
    Committed(String),
}

/// Result of masking a meridiem keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeridiemOutcome {
    Selected(Meridiem),
    /// Field cleared and left pending until blur.
    Cleared,
}

/// Mask a keystroke into the hour or minute field.
///
/// Calling this for [`Field::Meridiem`] rejects the keystroke; use
/// [`mask_meridiem`] instead.
pub fn mask_digits(field: Field, mode: FormatMode, previous: &str, candidate: &str) -> MaskOutcome {
    let Some((_, max)) = field.bounds(mode) else {
        return MaskOutcome::Rejected;
    };

    if candidate.is_empty() {
        return MaskOutcome::Pending(String::new());
    }
    if !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return MaskOutcome::Rejected;
    }

    let inserting = candidate.len() > previous.len();
    if !inserting {
        // Deletion or replacement: never promote, only accept what is there.
        return match candidate.len() {
            1 => MaskOutcome::Pending(candidate.to_string()),
            2 if field.is_complete(candidate, mode) => MaskOutcome::Committed(candidate.to_string()),
            _ => MaskOutcome::Rejected,
        };
    }

    match candidate.len() {
        1 => single_digit(field, mode, max, candidate),
        2 if field.is_complete(candidate, mode) => MaskOutcome::Committed(candidate.to_string()),
        2 => MaskOutcome::Rejected,
        len => {
            let window = &candidate[len - 2..];
            if field.is_complete(window, mode) {
                MaskOutcome::Committed(window.to_string())
            } else {
                single_digit(field, mode, max, &candidate[len - 1..])
            }
        }
    }
}

fn single_digit(field: Field, mode: FormatMode, max: u8, digit: &str) -> MaskOutcome {
    let Ok(value) = digit.parse::<u8>() else {
        return MaskOutcome::Rejected;
    };
    if value.saturating_mul(10) <= max {
        return MaskOutcome::Pending(digit.to_string());
    }
    let padded = format!("0{}", digit);
    if field.is_complete(&padded, mode) {
        MaskOutcome::Committed(padded)
    } else {
        MaskOutcome::Rejected
    }
}

/// Mask a keystroke into the meridiem field.
///
/// Only the last typed character matters: `a`/`p` in any case select,
/// anything else (including a deletion) clears the field.
pub fn mask_meridiem(previous: &str, candidate: &str) -> MeridiemOutcome {
    if candidate.len() < previous.len() {
        return MeridiemOutcome::Cleared;
    }
    candidate
        .chars()
        .last()
        .and_then(Meridiem::from_key)
        .map(MeridiemOutcome::Selected)
        .unwrap_or(MeridiemOutcome::Cleared)
}
