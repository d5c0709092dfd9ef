// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::selection::SelectionSet;
use slot_board_domain::{Activity, Role, SlotDate, SlotLabel};
use std::collections::BTreeMap;

/// The `(activity, date)` pair a selection was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardContext {
    /// The activity being booked or managed.
    pub activity: Activity,
    /// The calendar date being booked or managed.
    pub date: SlotDate,
}

impl BoardContext {
    /// Creates a new `BoardContext`.
    #[must_use]
    pub const fn new(activity: Activity, date: SlotDate) -> Self {
        Self { activity, date }
    }
}

/// A finalized customer purchase, ready to hand to the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseHandoff {
    /// The activity being purchased.
    pub activity: Activity,
    /// The calendar date being purchased.
    pub date: SlotDate,
    /// The purchased slots in ascending chronological order.
    pub slots: Vec<SlotLabel>,
    /// Price of one slot in whole rupees.
    pub unit_price: u32,
    /// `unit_price` times the number of slots, in whole rupees.
    pub total_amount: u32,
}

/// A finalized admin block action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRequest {
    /// The activity the blocks apply to.
    pub activity: Activity,
    /// The calendar date the blocks apply to.
    pub date: SlotDate,
    /// The slots to block, in ascending chronological order.
    pub slots: Vec<SlotLabel>,
}

/// The single external effect a finalized selection turns into.
///
/// Which arm is produced depends only on the actor's role: customers buy,
/// admins block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the selection to the payment collaborator.
    PurchaseHandoff(PurchaseHandoff),
    /// Create one blocked record per selected slot.
    BlockSlots(BlockRequest),
}

/// Turns a finalized selection into exactly one external effect.
///
/// # Arguments
///
/// * `role` - The actor's role, resolved once at session start
/// * `selection` - The finalized selection
/// * `context` - The `(activity, date)` pair the selection was made against
///
/// # Errors
///
/// Returns `CoreError::EmptySelection` if nothing is selected. No external
/// call is made in that case.
pub fn dispatch(
    role: Role,
    selection: &SelectionSet,
    context: &BoardContext,
) -> Result<Effect, CoreError> {
    if selection.is_empty() {
        return Err(CoreError::EmptySelection);
    }

    let slots: Vec<SlotLabel> = selection.ordered();

    match role {
        Role::Customer => {
            let unit_price: u32 = context.activity.unit_price();
            // A selection is bounded by the 24-slot day, so the cast is lossless.
            #[allow(clippy::cast_possible_truncation)]
            let slot_count: u32 = slots.len() as u32;

            Ok(Effect::PurchaseHandoff(PurchaseHandoff {
                activity: context.activity,
                date: context.date,
                slots,
                unit_price,
                total_amount: unit_price * slot_count,
            }))
        }
        Role::Admin => Ok(Effect::BlockSlots(BlockRequest {
            activity: context.activity,
            date: context.date,
            slots,
        })),
    }
}

/// Resolves the blocked record a single-slot unblock must delete.
///
/// Unblocking is not selection-driven: it acts on one already-blocked slot
/// directly, using the record id carried in the availability snapshot.
///
/// # Errors
///
/// Returns `CoreError::NotBlocked` if no blocked record is known for the
/// slot.
pub fn resolve_unblock(
    slot: SlotLabel,
    blocked: &BTreeMap<SlotLabel, i64>,
) -> Result<i64, CoreError> {
    blocked
        .get(&slot)
        .copied()
        .ok_or(CoreError::NotBlocked { slot })
}
