// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::selection::SelectionSet;
use crate::snapshot::AvailabilitySnapshot;
use slot_board_domain::{SlotDate, SlotLabel, SlotStatus};
use std::collections::BTreeMap;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Computes the status of every slot on the grid.
///
/// Total and deterministic: every label in `grid` receives exactly one
/// status, the inputs are not mutated, and there are no side effects.
/// Conditions are evaluated in precedence order:
///
/// 1. booked
/// 2. blocked
/// 3. past
/// 4. selected
/// 5. available
///
/// A slot is `Past` only when `date` is `now`'s calendar day and the slot's
/// **start** instant is strictly before `now`. Boards viewed for other days
/// never show `Past`: future days obviously, and the rare view of an
/// already-elapsed date is left to the date picker to prevent.
///
/// # Arguments
///
/// * `grid` - The slot labels to classify
/// * `snapshot` - The booked and blocked reads, joined
/// * `date` - The calendar date the board is viewed for
/// * `selection` - The actor's current tentative selection
/// * `now` - The current wall-clock time
#[must_use]
pub fn compute_statuses(
    grid: &[SlotLabel],
    snapshot: &AvailabilitySnapshot,
    date: SlotDate,
    selection: &SelectionSet,
    now: OffsetDateTime,
) -> BTreeMap<SlotLabel, SlotStatus> {
    let now_instant: PrimitiveDateTime = PrimitiveDateTime::new(now.date(), now.time());

    grid.iter()
        .map(|&slot| {
            let status: SlotStatus = if snapshot.booked.contains(&slot) {
                SlotStatus::Booked
            } else if snapshot.blocked.contains_key(&slot) {
                SlotStatus::Blocked
            } else if date.is_on(now) && date.start_of(slot) < now_instant {
                SlotStatus::Past
            } else if selection.contains(slot) {
                SlotStatus::Selected
            } else {
                SlotStatus::Available
            };
            (slot, status)
        })
        .collect()
}
