// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slot_label::SlotLabel;
use crate::types::{Activity, SlotDate};
use serde::{Deserialize, Serialize};

/// One confirmed reservation.
///
/// A booked record is created only after a successful payment callback and
/// is never mutated afterwards (cancellation and refunds are out of scope).
/// Uniqueness of `(activity, date, slot)` is relied upon but not enforced
/// at the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedRecord {
    /// Canonical identifier assigned by the persistence layer.
    /// `None` indicates the record has not been persisted yet.
    pub booked_id: Option<i64>,
    /// The activity the reservation is for.
    pub activity: Activity,
    /// The calendar date of the reservation.
    pub date: SlotDate,
    /// The reserved slot.
    pub slot: SlotLabel,
    /// The paying customer's email address.
    pub payer_email: String,
    /// The paying customer's display name.
    pub payer_name: String,
    /// Amount paid for this slot in whole rupees (the unit price).
    pub amount_paid: u32,
    /// Total amount of the order this slot belonged to, in whole rupees.
    pub total_amount: u32,
    /// Number of slots booked in the same order.
    pub slots_booked: u32,
    /// The payment gateway's payment reference.
    pub payment_id: String,
    /// The payment gateway's order identifier.
    pub order_id: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl BookedRecord {
    /// Creates a `BookedRecord` without a persisted ID.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        activity: Activity,
        date: SlotDate,
        slot: SlotLabel,
        payer_email: String,
        payer_name: String,
        amount_paid: u32,
        total_amount: u32,
        slots_booked: u32,
        payment_id: String,
        order_id: String,
        created_at: String,
    ) -> Self {
        Self {
            booked_id: None,
            activity,
            date,
            slot,
            payer_email,
            payer_name,
            amount_paid,
            total_amount,
            slots_booked,
            payment_id,
            order_id,
            created_at,
        }
    }

    /// Creates a `BookedRecord` with an existing ID (from persistence).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        booked_id: i64,
        activity: Activity,
        date: SlotDate,
        slot: SlotLabel,
        payer_email: String,
        payer_name: String,
        amount_paid: u32,
        total_amount: u32,
        slots_booked: u32,
        payment_id: String,
        order_id: String,
        created_at: String,
    ) -> Self {
        Self {
            booked_id: Some(booked_id),
            activity,
            date,
            slot,
            payer_email,
            payer_name,
            amount_paid,
            total_amount,
            slots_booked,
            payment_id,
            order_id,
            created_at,
        }
    }
}

/// One administrator-imposed unavailability.
///
/// Created by an admin block action and deleted outright by an unblock;
/// no history is retained after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRecord {
    /// Canonical identifier assigned by the persistence layer.
    /// `None` indicates the record has not been persisted yet.
    pub blocked_id: Option<i64>,
    /// The activity the block applies to.
    pub activity: Activity,
    /// The calendar date the block applies to.
    pub date: SlotDate,
    /// The blocked slot.
    pub slot: SlotLabel,
    /// Email address of the administrator who imposed the block.
    pub blocked_by: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl BlockedRecord {
    /// Creates a `BlockedRecord` without a persisted ID.
    #[must_use]
    pub const fn new(
        activity: Activity,
        date: SlotDate,
        slot: SlotLabel,
        blocked_by: String,
        created_at: String,
    ) -> Self {
        Self {
            blocked_id: None,
            activity,
            date,
            slot,
            blocked_by,
            created_at,
        }
    }

    /// Creates a `BlockedRecord` with an existing ID (from persistence).
    #[must_use]
    pub const fn with_id(
        blocked_id: i64,
        activity: Activity,
        date: SlotDate,
        slot: SlotLabel,
        blocked_by: String,
        created_at: String,
    ) -> Self {
        Self {
            blocked_id: Some(blocked_id),
            activity,
            date,
            slot,
            blocked_by,
            created_at,
        }
    }
}
