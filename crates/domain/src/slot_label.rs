// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// First bookable hour of the operating day.
pub const OPENING_HOUR: u8 = 6;

/// Hour the operating day ends (exclusive); the last slot starts at 23:00.
pub const CLOSING_HOUR: u8 = 24;

/// Number of hour-slots in one operating day.
pub const SLOTS_PER_DAY: usize = (CLOSING_HOUR - OPENING_HOUR) as usize;

/// Identifies one bookable hour-slot.
///
/// A label is the slot's start hour, rendered `"HH:00"`, with an implied
/// one-hour duration. Labels are generated, never stored, and order
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotLabel {
    /// The slot's start hour (0-23).
    hour: u8,
}

impl SlotLabel {
    /// Creates a `SlotLabel` for the given start hour.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is not between 0 and 23.
    pub const fn from_hour(hour: u8) -> Result<Self, DomainError> {
        if hour <= 23 {
            Ok(Self { hour })
        } else {
            Err(DomainError::InvalidSlotHour(hour))
        }
    }

    /// Parses a `SlotLabel` from its `"HH:00"` rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a two-digit hour between
    /// 00 and 23 followed by `:00`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidSlotLabel(s.to_string());
        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        if hour_part.len() != 2 || minute_part != "00" {
            return Err(invalid());
        }
        let hour: u8 = hour_part.parse().map_err(|_| invalid())?;
        Self::from_hour(hour).map_err(|_| invalid())
    }

    /// Returns the slot's start hour.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Renders the slot's start label, e.g. `"06:00"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}:00", self.hour)
    }

    /// Renders the slot's end label, e.g. `"07:00"`.
    ///
    /// The 23:00 slot legitimately renders `"24:00"`; callers must format
    /// accordingly rather than wrapping to the next day.
    #[must_use]
    pub fn end_label(&self) -> String {
        format!("{:02}:00", self.hour + 1)
    }
}

impl std::fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

/// Generates `count` consecutive hourly labels beginning at `start_hour`.
///
/// The generator never wraps past hour 23: a run that would produce a slot
/// starting at 24:00 or later is rejected instead of silently wrapping.
///
/// # Errors
///
/// Returns `DomainError::InvalidRange` if `count` is zero, `start_hour` is
/// outside 0-23, or the run would pass the 23:00 slot.
pub fn generate_slot_grid(start_hour: u8, count: usize) -> Result<Vec<SlotLabel>, DomainError> {
    if count == 0 {
        return Err(DomainError::InvalidRange {
            start_hour,
            count,
            reason: "slot count must be greater than 0",
        });
    }
    if start_hour > 23 {
        return Err(DomainError::InvalidRange {
            start_hour,
            count,
            reason: "start hour must be between 0 and 23",
        });
    }
    if usize::from(start_hour) + count > 24 {
        return Err(DomainError::InvalidRange {
            start_hour,
            count,
            reason: "grid must not run past the 23:00 slot",
        });
    }

    // The checks above bound count to at most 24, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation)]
    let last_hour: u8 = start_hour + (count as u8) - 1;

    Ok((start_hour..=last_hour)
        .map(|hour| SlotLabel { hour })
        .collect())
}

/// Returns the full operating-day grid: [`SLOTS_PER_DAY`] slots from
/// [`OPENING_HOUR`] through the 23:00 slot.
#[must_use]
pub fn operating_grid() -> Vec<SlotLabel> {
    (OPENING_HOUR..CLOSING_HOUR)
        .map(|hour| SlotLabel { hour })
        .collect()
}
