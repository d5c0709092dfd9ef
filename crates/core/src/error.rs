// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slot_board_domain::{DomainError, SlotLabel, SlotStatus};

/// Errors that can occur during slot board transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An action was dispatched with nothing selected.
    EmptySelection,
    /// A slot was submitted for selection while booked, blocked, or past.
    SlotNotSelectable {
        /// The offending slot.
        slot: SlotLabel,
        /// The status that forbids selection.
        status: SlotStatus,
    },
    /// A slot was submitted that is not on the grid being viewed.
    SlotNotOnGrid {
        /// The offending slot.
        slot: SlotLabel,
    },
    /// An unblock was requested for a slot with no known blocked record.
    NotBlocked {
        /// The slot that is not blocked.
        slot: SlotLabel,
    },
    /// A purchase was started while another payment is already pending.
    PaymentAlreadyPending,
    /// A payment outcome arrived with no pending payment.
    NoPendingPayment,
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "No slot selected"),
            Self::SlotNotSelectable { slot, status } => {
                write!(f, "Slot {slot} cannot be selected: it is {status}")
            }
            Self::SlotNotOnGrid { slot } => {
                write!(f, "Slot {slot} is not on the grid being viewed")
            }
            Self::NotBlocked { slot } => {
                write!(f, "Slot {slot} has no blocked record to remove")
            }
            Self::PaymentAlreadyPending => {
                write!(f, "A payment is already pending for this selection")
            }
            Self::NoPendingPayment => write!(f, "No payment is pending"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
