// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Derived status of one slot for one `(activity, date)` viewing.
///
/// A status is computed fresh from the current record sets, the actor's
/// selection, and the wall clock; it is never persisted. Exactly one status
/// applies per slot, decided in precedence order:
/// `Booked` > `Blocked` > `Past` > `Selected` > `Available`.
/// A booked slot is never shown as selectable, even if it is also past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    /// A confirmed reservation exists for the slot.
    Booked,
    /// An administrator has marked the slot unavailable.
    Blocked,
    /// The slot's start instant has already passed today.
    Past,
    /// The current actor has tentatively chosen the slot.
    Selected,
    /// The slot is open.
    Available,
}

impl SlotStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "Booked",
            Self::Blocked => "Blocked",
            Self::Past => "Past",
            Self::Selected => "Selected",
            Self::Available => "Available",
        }
    }

    /// Returns whether an actor may toggle a slot with this status.
    ///
    /// Only open slots enter a selection; `Selected` stays toggleable so
    /// the actor can deselect it again.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Selected | Self::Available)
    }
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
