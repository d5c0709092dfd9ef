// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations for booked and blocked slots.

use crate::backend;
use crate::data_models::{new_blocked_slot, new_booked_slot};
use crate::diesel_schema::{blocked_slots, booked_slots};
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;
use slot_board_domain::{BlockedRecord, BookedRecord};

/// Inserts one booked slot and returns its new row ID.
///
/// There is deliberately no uniqueness check on `(activity, date, slot)`:
/// two snapshots racing to book the same slot both succeed, exactly as the
/// availability model allows.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_booked(
    conn: &mut SqliteConnection,
    record: &BookedRecord,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(booked_slots::table)
        .values(new_booked_slot(record))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_booked: {e}")))?;

    backend::get_last_insert_rowid(conn)
}

/// Inserts one blocked slot and returns its new row ID.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_blocked(
    conn: &mut SqliteConnection,
    record: &BlockedRecord,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(blocked_slots::table)
        .values(new_blocked_slot(record))
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("insert_blocked: {e}")))?;

    backend::get_last_insert_rowid(conn)
}

/// Deletes one blocked slot by ID.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row has the given ID — the
/// record may have been unblocked by another session since the caller's
/// snapshot was taken.
pub fn delete_blocked(conn: &mut SqliteConnection, blocked_id: i64) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(blocked_slots::table.filter(blocked_slots::blocked_id.eq(blocked_id)))
            .execute(conn)
            .map_err(|e| PersistenceError::QueryFailed(format!("delete_blocked: {e}")))?;

    if deleted == 0 {
        return Err(PersistenceError::NotFound(format!(
            "blocked slot {blocked_id}"
        )));
    }
    Ok(())
}
