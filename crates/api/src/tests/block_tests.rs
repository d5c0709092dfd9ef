// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers::{block_slots, get_slot_board, unblock_slot};
use crate::request_response::{
    BlockSlotsRequest, BlockSlotsResponse, SlotBoardRequest, SlotBoardResponse,
    UnblockSlotRequest, UnblockSlotResponse,
};
use crate::tests::helpers::{TestStore, create_test_admin, labels, slot, test_now};

fn block_request(hours: &[u8]) -> BlockSlotsRequest {
    BlockSlotsRequest {
        activity: String::from("Football"),
        date: String::from("2026-08-10"),
        slots: labels(hours),
    }
}

fn board_status(store: &mut TestStore, start_time: &str) -> String {
    let response: SlotBoardResponse = get_slot_board(
        store,
        &SlotBoardRequest {
            activity: String::from("Football"),
            date: String::from("2026-08-10"),
        },
        test_now(),
    )
    .unwrap();
    response
        .slots
        .iter()
        .find(|s| s.start_time == start_time)
        .map(|s| s.status.clone())
        .unwrap()
}

#[test]
fn test_admin_blocks_selected_slots() {
    let mut store: TestStore = TestStore::new();

    let response: BlockSlotsResponse = block_slots(
        &mut store,
        &create_test_admin(),
        &block_request(&[14, 15]),
        test_now(),
    )
    .unwrap();

    assert_eq!(response.blocked, vec!["14:00", "15:00"]);
    assert!(response.failed.is_empty());
    assert_eq!(response.message, "Slot(s) marked as unavailable");
    assert_eq!(board_status(&mut store, "14:00"), "Blocked");
    assert_eq!(board_status(&mut store, "15:00"), "Blocked");
}

#[test]
fn test_partial_write_failure_reports_the_failed_slots() {
    let mut store: TestStore = TestStore::new();
    store.fail_block_on = vec![slot(15)];

    let response: BlockSlotsResponse = block_slots(
        &mut store,
        &create_test_admin(),
        &block_request(&[14, 15]),
        test_now(),
    )
    .unwrap();

    // The succeeded block stays in place; the failed slot is reported for
    // retry, not rolled back.
    assert_eq!(response.blocked, vec!["14:00"]);
    assert_eq!(response.failed, vec!["15:00"]);
    assert_eq!(board_status(&mut store, "14:00"), "Blocked");
    assert_eq!(board_status(&mut store, "15:00"), "Available");
}

#[test]
fn test_blocking_an_empty_selection_fails_without_writes() {
    let mut store: TestStore = TestStore::new();

    let result = block_slots(
        &mut store,
        &create_test_admin(),
        &block_request(&[]),
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "non_empty_selection"
    ));
    assert_eq!(board_status(&mut store, "14:00"), "Available");
}

#[test]
fn test_blocking_an_already_blocked_slot_is_rejected() {
    let mut store: TestStore = TestStore::new();
    block_slots(
        &mut store,
        &create_test_admin(),
        &block_request(&[14]),
        test_now(),
    )
    .unwrap();

    let result = block_slots(
        &mut store,
        &create_test_admin(),
        &block_request(&[14]),
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "selectable_slots_only"
    ));
}

#[test]
fn test_unblocking_restores_the_slot() {
    let mut store: TestStore = TestStore::new();
    block_slots(
        &mut store,
        &create_test_admin(),
        &block_request(&[14]),
        test_now(),
    )
    .unwrap();

    let response: UnblockSlotResponse = unblock_slot(
        &mut store,
        &create_test_admin(),
        &UnblockSlotRequest {
            activity: String::from("Football"),
            date: String::from("2026-08-10"),
            slot: String::from("14:00"),
        },
        test_now(),
    )
    .unwrap();

    assert_eq!(response.slot, "14:00");
    assert_eq!(response.message, "Slot 14:00 is now available");
    assert_eq!(board_status(&mut store, "14:00"), "Available");
}

#[test]
fn test_unblocking_a_slot_that_is_not_blocked_fails() {
    let mut store: TestStore = TestStore::new();

    let result = unblock_slot(
        &mut store,
        &create_test_admin(),
        &UnblockSlotRequest {
            activity: String::from("Football"),
            date: String::from("2026-08-10"),
            slot: String::from("14:00"),
        },
        test_now(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Blocked slot"
    ));
}
