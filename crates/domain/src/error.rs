// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Activity name is not recognized.
    InvalidActivity(String),
    /// Role name is not recognized.
    InvalidRole(String),
    /// Failed to parse a calendar date from a string.
    InvalidDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Slot hour is outside the 0-23 range.
    InvalidSlotHour(u8),
    /// Slot label does not have the `HH:00` shape.
    InvalidSlotLabel(String),
    /// Grid generation was asked for an impossible range.
    InvalidRange {
        /// The requested first hour.
        start_hour: u8,
        /// The requested number of slots.
        count: usize,
        /// Description of the violated constraint.
        reason: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidActivity(name) => write!(f, "Unknown activity: {name}"),
            Self::InvalidRole(name) => write!(f, "Unknown role: {name}"),
            Self::InvalidDate { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidSlotHour(hour) => {
                write!(f, "Invalid slot hour: {hour}. Must be between 0 and 23")
            }
            Self::InvalidSlotLabel(label) => {
                write!(f, "Invalid slot label '{label}'. Expected 'HH:00'")
            }
            Self::InvalidRange {
                start_hour,
                count,
                reason,
            } => {
                write!(
                    f,
                    "Invalid slot range (start hour {start_hour}, count {count}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
