// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and collaborator fakes.

use crate::auth::AuthenticatedActor;
use slot_board_domain::{Activity, BlockedRecord, BookedRecord, Role, SlotDate, SlotLabel};
use slot_board_gateway::{ConfirmationEmail, GatewayError, Mailer, OrderId, PaymentGateway};
use slot_board_persistence::{PersistenceError, SlotStore, SqlitePersistence};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("admin@example.com"),
        String::from("Test Admin"),
        Role::Admin,
    )
}

pub fn create_test_customer() -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("customer@example.com"),
        String::from("Test Customer"),
        Role::Customer,
    )
}

/// Midnight at the start of the test date — no slot is past yet.
pub fn test_now() -> OffsetDateTime {
    datetime!(2026-08-10 00:00 UTC)
}

pub fn slot(hour: u8) -> SlotLabel {
    SlotLabel::from_hour(hour).unwrap()
}

pub fn labels(hours: &[u8]) -> Vec<String> {
    hours.iter().map(|&h| slot(h).label()).collect()
}

/// Store wrapper that fails writes for chosen slots, for exercising the
/// fan-out partial-failure path.
pub struct TestStore {
    inner: SqlitePersistence,
    pub fail_block_on: Vec<SlotLabel>,
    pub fail_book_on: Vec<SlotLabel>,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            inner: SqlitePersistence::new_in_memory()
                .expect("Failed to create in-memory persistence"),
            fail_block_on: Vec::new(),
            fail_book_on: Vec::new(),
        }
    }
}

impl SlotStore for TestStore {
    fn list_booked(
        &mut self,
        activity: Activity,
        date: SlotDate,
    ) -> Result<BTreeSet<SlotLabel>, PersistenceError> {
        self.inner.list_booked(activity, date)
    }

    fn list_blocked(
        &mut self,
        activity: Activity,
        date: SlotDate,
    ) -> Result<BTreeMap<SlotLabel, i64>, PersistenceError> {
        self.inner.list_blocked(activity, date)
    }

    fn create_booked(&mut self, record: &BookedRecord) -> Result<i64, PersistenceError> {
        if self.fail_book_on.contains(&record.slot) {
            return Err(PersistenceError::QueryFailed(String::from(
                "simulated network error",
            )));
        }
        self.inner.create_booked(record)
    }

    fn create_blocked(&mut self, record: &BlockedRecord) -> Result<i64, PersistenceError> {
        if self.fail_block_on.contains(&record.slot) {
            return Err(PersistenceError::QueryFailed(String::from(
                "simulated network error",
            )));
        }
        self.inner.create_blocked(record)
    }

    fn delete_blocked(&mut self, blocked_id: i64) -> Result<(), PersistenceError> {
        self.inner.delete_blocked(blocked_id)
    }

    fn list_booked_records(
        &mut self,
        activity: Activity,
    ) -> Result<Vec<BookedRecord>, PersistenceError> {
        self.inner.list_booked_records(activity)
    }

    fn list_booked_for_payer(
        &mut self,
        payer_email: &str,
    ) -> Result<Vec<BookedRecord>, PersistenceError> {
        self.inner.list_booked_for_payer(payer_email)
    }
}

/// Gateway fake that hands out a fixed order ID and records the amount it
/// was asked for.
pub struct MockGateway {
    pub order_id: String,
    pub last_amount_paise: Mutex<Option<u64>>,
}

impl MockGateway {
    pub fn new(order_id: &str) -> Self {
        Self {
            order_id: order_id.to_string(),
            last_amount_paise: Mutex::new(None),
        }
    }
}

impl PaymentGateway for MockGateway {
    async fn create_order(
        &self,
        amount_paise: u64,
        _currency: &str,
        _receipt: &str,
    ) -> Result<OrderId, GatewayError> {
        *self.last_amount_paise.lock().unwrap() = Some(amount_paise);
        Ok(OrderId::new(self.order_id.clone()))
    }
}

/// Gateway fake that refuses every order.
pub struct FailingGateway;

impl PaymentGateway for FailingGateway {
    async fn create_order(
        &self,
        _amount_paise: u64,
        _currency: &str,
        _receipt: &str,
    ) -> Result<OrderId, GatewayError> {
        Err(GatewayError::OrderCreationFailed(String::from(
            "status 401 Unauthorized: bad key",
        )))
    }
}

/// Mailer fake that records what it was asked to send.
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ConfirmationEmail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl Mailer for RecordingMailer {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<(), GatewayError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Mailer fake that always fails, for proving email is best-effort.
pub struct FailingMailer;

impl Mailer for FailingMailer {
    async fn send_confirmation(&self, _email: &ConfirmationEmail) -> Result<(), GatewayError> {
        Err(GatewayError::EmailSendFailed(String::from(
            "simulated mail outage",
        )))
    }
}
