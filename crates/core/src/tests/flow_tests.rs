// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dispatch::{Effect, PurchaseHandoff, dispatch};
use crate::error::CoreError;
use crate::flow::PurchaseFlow;
use crate::selection::SelectionSet;
use crate::snapshot::AvailabilitySnapshot;
use crate::tests::helpers::{slot, snapshot, statuses_full_day, test_context, test_payer};
use slot_board_domain::{BookedRecord, Role, SlotLabel, SlotStatus};
use std::collections::BTreeMap;

fn handoff_for(hours: &[u8]) -> PurchaseHandoff {
    let snap: AvailabilitySnapshot = snapshot(&[], &[]);
    let statuses: BTreeMap<SlotLabel, SlotStatus> = statuses_full_day(&snap);
    let selection: SelectionSet = hours
        .iter()
        .fold(SelectionSet::new(), |acc, &h| acc.toggle(slot(h), &statuses));
    match dispatch(Role::Customer, &selection, &test_context()).unwrap() {
        Effect::PurchaseHandoff(handoff) => handoff,
        Effect::BlockSlots(_) => panic!("customer dispatch must not block"),
    }
}

#[test]
fn test_confirm_emits_one_record_per_slot() {
    let handoff: PurchaseHandoff = handoff_for(&[9, 10]);
    let flow: PurchaseFlow = PurchaseFlow::new()
        .begin(handoff, String::from("order_123"))
        .unwrap();

    let (records, next): (Vec<BookedRecord>, PurchaseFlow) = flow
        .confirm("pay_456", &test_payer(), "2026-08-09T12:00:00Z")
        .unwrap();

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.booked_id, None);
        assert_eq!(record.payment_id, "pay_456");
        assert_eq!(record.order_id, "order_123");
        assert_eq!(record.amount_paid, 1500);
        assert_eq!(record.total_amount, 3000);
        assert_eq!(record.slots_booked, 2);
        assert_eq!(record.payer_email, "customer@example.com");
    }
    assert_eq!(records[0].slot, slot(9));
    assert_eq!(records[1].slot, slot(10));
    assert_eq!(next, PurchaseFlow::Selecting);
}

#[test]
fn test_dismissed_checkout_returns_to_selecting_without_records() {
    let handoff: PurchaseHandoff = handoff_for(&[18]);
    let flow: PurchaseFlow = PurchaseFlow::new()
        .begin(handoff.clone(), String::from("order_123"))
        .unwrap();

    let after: PurchaseFlow = flow.abort();

    assert_eq!(after, PurchaseFlow::Selecting);
    // The selection the handoff was cut from is untouched by the abort;
    // confirming now is an error because nothing is pending.
    assert_eq!(
        after.confirm("pay_456", &test_payer(), "2026-08-09T12:00:00Z"),
        Err(CoreError::NoPendingPayment)
    );
}

#[test]
fn test_confirm_without_a_pending_payment_fails() {
    let result = PurchaseFlow::new().confirm("pay_456", &test_payer(), "2026-08-09T12:00:00Z");
    assert_eq!(result, Err(CoreError::NoPendingPayment));
}

#[test]
fn test_beginning_twice_fails() {
    let flow: PurchaseFlow = PurchaseFlow::new()
        .begin(handoff_for(&[9]), String::from("order_1"))
        .unwrap();

    let result = flow.begin(handoff_for(&[10]), String::from("order_2"));

    assert_eq!(result, Err(CoreError::PaymentAlreadyPending));
}
