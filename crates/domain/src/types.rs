// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::slot_label::SlotLabel;
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// ISO calendar-date format used everywhere a date crosses a boundary.
const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Represents a bookable activity.
///
/// The activity is the partition key for booked and blocked records:
/// two activities never share a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Activity {
    /// 5v5 football turf.
    Football,
    /// 5v5 box cricket.
    Cricket,
}

impl Activity {
    /// All bookable activities.
    pub const ALL: [Self; 2] = [Self::Football, Self::Cricket];

    /// Parses an activity from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known activity.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Football" => Ok(Self::Football),
            "Cricket" => Ok(Self::Cricket),
            _ => Err(DomainError::InvalidActivity(s.to_string())),
        }
    }

    /// Returns the string representation of this activity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "Football",
            Self::Cricket => "Cricket",
        }
    }

    /// Price of one hour-slot in whole rupees.
    ///
    /// Both activities are currently priced identically.
    #[must_use]
    pub const fn unit_price(&self) -> u32 {
        match self {
            Self::Football | Self::Cricket => 1500,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actor roles for authorization.
///
/// A role is resolved exactly once at session start and threaded explicitly
/// through dispatch. It is never re-derived from the actor's identity at a
/// call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Customer role: may select open slots and purchase them.
    Customer,
    /// Admin role: may block and unblock slots and view revenue.
    Admin,
}

impl Role {
    /// Parses a role from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Customer" => Ok(Self::Customer),
            "Admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The paying customer's identity as handed to the payment collaborator
/// and stamped on booked records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// The payer's email address.
    pub email: String,
    /// The payer's display name.
    pub name: String,
}

impl Payer {
    /// Creates a new `Payer`.
    #[must_use]
    pub const fn new(email: String, name: String) -> Self {
        Self { email, name }
    }
}

/// A calendar date a slot board is viewed and booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotDate {
    /// The calendar date.
    date: Date,
}

impl SlotDate {
    /// Creates a `SlotDate` from an already-validated date.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self { date }
    }

    /// Parses a `SlotDate` from an ISO `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid ISO calendar date.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Date::parse(s, DATE_FORMAT)
            .map(|date| Self { date })
            .map_err(|e| DomainError::InvalidDate {
                date_string: s.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the start instant of the given slot on this date.
    #[must_use]
    pub fn start_of(&self, slot: SlotLabel) -> PrimitiveDateTime {
        // Slot hours are validated to 0-23 at construction, so this cannot fail.
        let start: Time = Time::from_hms(slot.hour(), 0, 0).unwrap_or(Time::MIDNIGHT);
        PrimitiveDateTime::new(self.date, start)
    }

    /// Returns whether this date is `now`'s calendar day.
    #[must_use]
    pub fn is_on(&self, now: OffsetDateTime) -> bool {
        self.date == now.date()
    }
}

impl std::fmt::Display for SlotDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted: String = self.date.format(DATE_FORMAT).map_err(|_| std::fmt::Error)?;
        write!(f, "{formatted}")
    }
}
