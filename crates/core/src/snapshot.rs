// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use slot_board_domain::SlotLabel;
use std::collections::{BTreeMap, BTreeSet};
use time::OffsetDateTime;

/// The two availability reads joined into one value.
///
/// Booked and blocked slots are fetched as two independent reads; joining
/// them here before any status is computed makes the snapshot's staleness
/// explicit instead of leaving two half-merged sets in flight. A snapshot
/// is only as fresh as `fetched_at` — a concurrent booking elsewhere is not
/// visible until the board is re-fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySnapshot {
    /// Slots with a confirmed reservation.
    pub booked: BTreeSet<SlotLabel>,
    /// Admin-blocked slots, keyed to the blocked record id that an
    /// unblock must delete.
    pub blocked: BTreeMap<SlotLabel, i64>,
    /// When the two reads were taken.
    pub fetched_at: OffsetDateTime,
}

impl AvailabilitySnapshot {
    /// Creates a new `AvailabilitySnapshot`.
    #[must_use]
    pub const fn new(
        booked: BTreeSet<SlotLabel>,
        blocked: BTreeMap<SlotLabel, i64>,
        fetched_at: OffsetDateTime,
    ) -> Self {
        Self {
            booked,
            blocked,
            fetched_at,
        }
    }
}
