// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{PersistenceError, SlotStore, SqlitePersistence};
use slot_board_domain::{Activity, BlockedRecord, BookedRecord, SlotDate, SlotLabel};
use std::collections::{BTreeMap, BTreeSet};

fn store() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

fn slot(hour: u8) -> SlotLabel {
    SlotLabel::from_hour(hour).unwrap()
}

fn date() -> SlotDate {
    SlotDate::parse("2026-08-10").unwrap()
}

fn booked(hour: u8) -> BookedRecord {
    BookedRecord::new(
        Activity::Football,
        date(),
        slot(hour),
        String::from("customer@example.com"),
        String::from("Test Customer"),
        1500,
        1500,
        1,
        String::from("pay_1"),
        String::from("order_1"),
        String::from("2026-08-09T12:00:00Z"),
    )
}

fn blocked(hour: u8) -> BlockedRecord {
    BlockedRecord::new(
        Activity::Football,
        date(),
        slot(hour),
        String::from("admin@example.com"),
        String::from("2026-08-09T12:00:00Z"),
    )
}

#[test]
fn test_created_booked_slot_is_listed_for_its_board() {
    let mut store: SqlitePersistence = store();

    let id: i64 = store.create_booked(&booked(10)).unwrap();
    assert!(id > 0);

    let listed: BTreeSet<SlotLabel> = store.list_booked(Activity::Football, date()).unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed.contains(&slot(10)));
}

#[test]
fn test_boards_are_partitioned_by_activity_and_date() {
    let mut store: SqlitePersistence = store();
    store.create_booked(&booked(10)).unwrap();

    let other_activity: BTreeSet<SlotLabel> =
        store.list_booked(Activity::Cricket, date()).unwrap();
    assert!(other_activity.is_empty());

    let other_date: BTreeSet<SlotLabel> = store
        .list_booked(Activity::Football, SlotDate::parse("2026-08-11").unwrap())
        .unwrap();
    assert!(other_date.is_empty());
}

#[test]
fn test_blocked_slots_carry_their_record_ids() {
    let mut store: SqlitePersistence = store();

    let id: i64 = store.create_blocked(&blocked(14)).unwrap();

    let listed: BTreeMap<SlotLabel, i64> =
        store.list_blocked(Activity::Football, date()).unwrap();
    assert_eq!(listed.get(&slot(14)), Some(&id));
}

#[test]
fn test_deleting_a_blocked_slot_removes_it_from_the_board() {
    let mut store: SqlitePersistence = store();
    let id: i64 = store.create_blocked(&blocked(14)).unwrap();

    store.delete_blocked(id).unwrap();

    let listed: BTreeMap<SlotLabel, i64> =
        store.list_blocked(Activity::Football, date()).unwrap();
    assert!(listed.is_empty());
}

#[test]
fn test_deleting_an_unknown_blocked_id_reports_not_found() {
    let mut store: SqlitePersistence = store();

    let result = store.delete_blocked(999);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_booked_records_round_trip_with_ids() {
    let mut store: SqlitePersistence = store();
    let id: i64 = store.create_booked(&booked(10)).unwrap();

    let records: Vec<BookedRecord> = store.list_booked_records(Activity::Football).unwrap();

    assert_eq!(records.len(), 1);
    let record: &BookedRecord = &records[0];
    assert_eq!(record.booked_id, Some(id));
    assert_eq!(record.activity, Activity::Football);
    assert_eq!(record.slot, slot(10));
    assert_eq!(record.amount_paid, 1500);
    assert_eq!(record.payment_id, "pay_1");
    assert_eq!(record.created_at, "2026-08-09T12:00:00Z");
}

#[test]
fn test_payer_listing_filters_by_email() {
    let mut store: SqlitePersistence = store();
    store.create_booked(&booked(10)).unwrap();

    let mut other: BookedRecord = booked(11);
    other.payer_email = String::from("someone-else@example.com");
    store.create_booked(&other).unwrap();

    let mine: Vec<BookedRecord> = store
        .list_booked_for_payer("customer@example.com")
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].slot, slot(10));
}

#[test]
fn test_no_uniqueness_is_enforced_on_double_booking() {
    // Two sessions racing on stale snapshots can both book the same slot;
    // the store accepts both rows. Detection is the merger's job, and only
    // as of its snapshot.
    let mut store: SqlitePersistence = store();

    store.create_booked(&booked(10)).unwrap();
    store.create_booked(&booked(10)).unwrap();

    let records: Vec<BookedRecord> = store.list_booked_records(Activity::Football).unwrap();
    assert_eq!(records.len(), 2);
}
