// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read operations for booked and blocked slots.

use crate::data_models::{BookedSlotRow, booked_row_to_record};
use crate::diesel_schema::{blocked_slots, booked_slots};
use crate::error::PersistenceError;
use diesel::SqliteConnection;
use diesel::prelude::*;
use slot_board_domain::{Activity, BookedRecord, SlotDate, SlotLabel};
use std::collections::{BTreeMap, BTreeSet};

/// Returns the start labels of every booked slot for one board.
///
/// # Errors
///
/// Returns an error if the query fails or a stored label no longer parses.
pub fn list_booked(
    conn: &mut SqliteConnection,
    activity: Activity,
    date: SlotDate,
) -> Result<BTreeSet<SlotLabel>, PersistenceError> {
    let start_times: Vec<String> = booked_slots::table
        .filter(booked_slots::activity.eq(activity.as_str()))
        .filter(booked_slots::date.eq(date.to_string()))
        .select(booked_slots::start_time)
        .load::<String>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_booked: {e}")))?;

    start_times
        .iter()
        .map(|s| {
            SlotLabel::parse(s).map_err(|e| PersistenceError::SerializationError(e.to_string()))
        })
        .collect()
}

/// Returns every blocked slot for one board, keyed to its row ID.
///
/// The ID is what an unblock must delete, so it travels with the label in
/// every availability snapshot.
///
/// # Errors
///
/// Returns an error if the query fails or a stored label no longer parses.
pub fn list_blocked(
    conn: &mut SqliteConnection,
    activity: Activity,
    date: SlotDate,
) -> Result<BTreeMap<SlotLabel, i64>, PersistenceError> {
    let rows: Vec<(i64, String)> = blocked_slots::table
        .filter(blocked_slots::activity.eq(activity.as_str()))
        .filter(blocked_slots::date.eq(date.to_string()))
        .select((blocked_slots::blocked_id, blocked_slots::start_time))
        .load::<(i64, String)>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_blocked: {e}")))?;

    rows.into_iter()
        .map(|(blocked_id, start_time)| {
            SlotLabel::parse(&start_time)
                .map(|slot| (slot, blocked_id))
                .map_err(|e| PersistenceError::SerializationError(e.to_string()))
        })
        .collect()
}

/// Returns every booked record for one activity, ordered by date and slot.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn list_booked_records(
    conn: &mut SqliteConnection,
    activity: Activity,
) -> Result<Vec<BookedRecord>, PersistenceError> {
    let rows: Vec<BookedSlotRow> = booked_slots::table
        .filter(booked_slots::activity.eq(activity.as_str()))
        .order((booked_slots::date.asc(), booked_slots::start_time.asc()))
        .load::<BookedSlotRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_booked_records: {e}")))?;

    rows.into_iter().map(booked_row_to_record).collect()
}

/// Returns every booked record paid for by the given email address,
/// ordered by date and slot.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row no longer parses.
pub fn list_booked_for_payer(
    conn: &mut SqliteConnection,
    payer_email: &str,
) -> Result<Vec<BookedRecord>, PersistenceError> {
    let rows: Vec<BookedSlotRow> = booked_slots::table
        .filter(booked_slots::payer_email.eq(payer_email))
        .order((booked_slots::date.asc(), booked_slots::start_time.asc()))
        .load::<BookedSlotRow>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_booked_for_payer: {e}")))?;

    rows.into_iter().map(booked_row_to_record).collect()
}
