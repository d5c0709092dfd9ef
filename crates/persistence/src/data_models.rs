// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs bridging domain records and the database tables.

use crate::error::PersistenceError;
use diesel::prelude::{Insertable, Queryable};
use slot_board_domain::{Activity, BlockedRecord, BookedRecord, SlotDate, SlotLabel};

/// Insertable representation of a booked slot.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::booked_slots)]
pub struct NewBookedSlot {
    pub activity: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub payer_email: String,
    pub payer_name: String,
    pub amount_paid: i32,
    pub total_amount: i32,
    pub slots_booked: i32,
    pub payment_id: String,
    pub order_id: String,
    pub created_at: String,
}

/// Queryable representation of a booked slot.
///
/// Field order must match the column order in `diesel_schema`.
#[derive(Debug, Clone, Queryable)]
pub struct BookedSlotRow {
    pub booked_id: i64,
    pub activity: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub payer_email: String,
    pub payer_name: String,
    pub amount_paid: i32,
    pub total_amount: i32,
    pub slots_booked: i32,
    pub payment_id: String,
    pub order_id: String,
    pub created_at: String,
}

/// Insertable representation of a blocked slot.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::diesel_schema::blocked_slots)]
pub struct NewBlockedSlot {
    pub activity: String,
    pub date: String,
    pub start_time: String,
    pub blocked_by: String,
    pub created_at: String,
}

/// Converts a domain booked record into an insertable row.
#[must_use]
pub fn new_booked_slot(record: &BookedRecord) -> NewBookedSlot {
    NewBookedSlot {
        activity: record.activity.as_str().to_string(),
        date: record.date.to_string(),
        start_time: record.slot.label(),
        end_time: record.slot.end_label(),
        payer_email: record.payer_email.clone(),
        payer_name: record.payer_name.clone(),
        amount_paid: to_db_amount(record.amount_paid),
        total_amount: to_db_amount(record.total_amount),
        slots_booked: to_db_amount(record.slots_booked),
        payment_id: record.payment_id.clone(),
        order_id: record.order_id.clone(),
        created_at: record.created_at.clone(),
    }
}

/// Converts a domain blocked record into an insertable row.
#[must_use]
pub fn new_blocked_slot(record: &BlockedRecord) -> NewBlockedSlot {
    NewBlockedSlot {
        activity: record.activity.as_str().to_string(),
        date: record.date.to_string(),
        start_time: record.slot.label(),
        blocked_by: record.blocked_by.clone(),
        created_at: record.created_at.clone(),
    }
}

/// Converts a stored booked row back into a domain record.
///
/// # Errors
///
/// Returns `PersistenceError::SerializationError` if a stored value no
/// longer parses as a domain value.
pub fn booked_row_to_record(row: BookedSlotRow) -> Result<BookedRecord, PersistenceError> {
    let activity: Activity = Activity::parse(&row.activity)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let date: SlotDate = SlotDate::parse(&row.date)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;
    let slot: SlotLabel = SlotLabel::parse(&row.start_time)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    Ok(BookedRecord::with_id(
        row.booked_id,
        activity,
        date,
        slot,
        row.payer_email,
        row.payer_name,
        from_db_amount(row.amount_paid)?,
        from_db_amount(row.total_amount)?,
        from_db_amount(row.slots_booked)?,
        row.payment_id,
        row.order_id,
        row.created_at,
    ))
}

/// Amounts are stored as SQLite INTEGER; they are always small positive
/// values, so the narrowing in both directions is checked rather than cast.
fn to_db_amount(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn from_db_amount(value: i32) -> Result<u32, PersistenceError> {
    u32::try_from(value).map_err(|_| {
        PersistenceError::SerializationError(format!("negative stored amount: {value}"))
    })
}
