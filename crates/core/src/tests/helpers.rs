// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::dispatch::BoardContext;
use crate::merge::compute_statuses;
use crate::selection::SelectionSet;
use crate::snapshot::AvailabilitySnapshot;
use slot_board_domain::{
    Activity, Payer, SlotDate, SlotLabel, SlotStatus, generate_slot_grid, operating_grid,
};
use std::collections::{BTreeMap, BTreeSet};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn slot(hour: u8) -> SlotLabel {
    SlotLabel::from_hour(hour).unwrap()
}

pub fn test_date() -> SlotDate {
    SlotDate::parse("2026-08-10").unwrap()
}

pub fn test_context() -> BoardContext {
    BoardContext::new(Activity::Football, test_date())
}

/// Midnight at the start of the test date — no slot is past yet.
pub fn midnight() -> OffsetDateTime {
    datetime!(2026-08-10 00:00 UTC)
}

pub fn test_payer() -> Payer {
    Payer::new(
        String::from("customer@example.com"),
        String::from("Test Customer"),
    )
}

pub fn snapshot(booked_hours: &[u8], blocked: &[(u8, i64)]) -> AvailabilitySnapshot {
    let booked: BTreeSet<SlotLabel> = booked_hours.iter().map(|&h| slot(h)).collect();
    let blocked: BTreeMap<SlotLabel, i64> =
        blocked.iter().map(|&(h, id)| (slot(h), id)).collect();
    AvailabilitySnapshot::new(booked, blocked, midnight())
}

/// Statuses for a 09:00-11:00 grid with an empty selection at midnight.
pub fn statuses_9_to_11(
    snap: &AvailabilitySnapshot,
) -> BTreeMap<SlotLabel, SlotStatus> {
    let grid: Vec<SlotLabel> = generate_slot_grid(9, 3).unwrap();
    compute_statuses(&grid, snap, test_date(), &SelectionSet::new(), midnight())
}

/// Statuses for the full operating day with an empty selection at midnight.
pub fn statuses_full_day(snap: &AvailabilitySnapshot) -> BTreeMap<SlotLabel, SlotStatus> {
    let grid: Vec<SlotLabel> = operating_grid();
    compute_statuses(&grid, snap, test_date(), &SelectionSet::new(), midnight())
}
