// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dispatch::PurchaseHandoff;
use crate::error::CoreError;
use slot_board_domain::{BookedRecord, Payer};

/// The customer payment flow for one finalized selection.
///
/// Per slot the lifecycle is
/// `Available → Selected → PendingPayment → Booked` on success, or back to
/// `Selected` on failure or dismissal. `Booked` is terminal; a record never
/// transitions back. No record exists before [`Self::confirm`], so aborting
/// a pending payment has nothing to undo — the selection simply becomes
/// actionable again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PurchaseFlow {
    /// A selection is in hand; no payment has been started.
    #[default]
    Selecting,
    /// An order has been created and the checkout is open; the flow is
    /// suspended until the payment collaborator's callback fires.
    PendingPayment {
        /// The handoff the order was created for.
        handoff: PurchaseHandoff,
        /// The payment collaborator's order identifier.
        order_id: String,
    },
}

impl PurchaseFlow {
    /// Creates a flow in the `Selecting` state.
    #[must_use]
    pub const fn new() -> Self {
        Self::Selecting
    }

    /// Suspends the flow on a freshly created order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PaymentAlreadyPending` if a payment is already
    /// in flight.
    pub fn begin(self, handoff: PurchaseHandoff, order_id: String) -> Result<Self, CoreError> {
        match self {
            Self::Selecting => Ok(Self::PendingPayment { handoff, order_id }),
            Self::PendingPayment { .. } => Err(CoreError::PaymentAlreadyPending),
        }
    }

    /// Settles a successful payment.
    ///
    /// Emits one `BookedRecord` per slot in the pending handoff — these are
    /// what the caller must persist — and returns the flow to `Selecting`.
    ///
    /// # Arguments
    ///
    /// * `payment_id` - The payment reference from the success callback
    /// * `payer` - The paying customer's identity
    /// * `created_at` - RFC 3339 timestamp to stamp on the records
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NoPendingPayment` if no payment was pending.
    pub fn confirm(
        self,
        payment_id: &str,
        payer: &Payer,
        created_at: &str,
    ) -> Result<(Vec<BookedRecord>, Self), CoreError> {
        match self {
            Self::PendingPayment { handoff, order_id } => {
                // A handoff is bounded by the 24-slot day, so the cast is lossless.
                #[allow(clippy::cast_possible_truncation)]
                let slots_booked: u32 = handoff.slots.len() as u32;

                let records: Vec<BookedRecord> = handoff
                    .slots
                    .iter()
                    .map(|&slot| {
                        BookedRecord::new(
                            handoff.activity,
                            handoff.date,
                            slot,
                            payer.email.clone(),
                            payer.name.clone(),
                            handoff.unit_price,
                            handoff.total_amount,
                            slots_booked,
                            payment_id.to_string(),
                            order_id.clone(),
                            created_at.to_string(),
                        )
                    })
                    .collect();

                Ok((records, Self::Selecting))
            }
            Self::Selecting => Err(CoreError::NoPendingPayment),
        }
    }

    /// Abandons a pending payment after a failure or a dismissed checkout.
    ///
    /// No records were created yet, so nothing is rolled back; the slots
    /// return to the selectable state and the selection is retained by the
    /// caller.
    #[must_use]
    pub fn abort(self) -> Self {
        Self::Selecting
    }
}
