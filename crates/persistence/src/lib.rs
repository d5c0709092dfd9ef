// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the SuperKick turf slot board.
//!
//! This crate owns the booked and blocked slot records and exposes them
//! through the [`SlotStore`] contract the rest of the system consumes. It
//! is built on Diesel over `SQLite`:
//!
//! - In-memory databases for unit tests — fast, deterministic, isolated
//!   per test via an atomic counter
//! - File-backed databases (WAL journaling) for deployment
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite` only
//! - No external database infrastructure is ever required

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use slot_board_domain::{Activity, BlockedRecord, BookedRecord, SlotDate, SlotLabel};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The persistence contract the slot board consumes.
///
/// The reads feed availability snapshots; the writes are the only way
/// booked and blocked records come into or go out of existence. Booked
/// records are never updated or deleted through this contract.
pub trait SlotStore {
    /// Returns the start labels of every booked slot for one
    /// `(activity, date)` board.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_booked(
        &mut self,
        activity: Activity,
        date: SlotDate,
    ) -> Result<BTreeSet<SlotLabel>, PersistenceError>;

    /// Returns every blocked slot for one `(activity, date)` board, keyed
    /// to the blocked record ID an unblock must delete.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_blocked(
        &mut self,
        activity: Activity,
        date: SlotDate,
    ) -> Result<BTreeMap<SlotLabel, i64>, PersistenceError>;

    /// Creates one booked record and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn create_booked(&mut self, record: &BookedRecord) -> Result<i64, PersistenceError>;

    /// Creates one blocked record and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn create_blocked(&mut self, record: &BlockedRecord) -> Result<i64, PersistenceError>;

    /// Deletes one blocked record by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no record has the given ID.
    fn delete_blocked(&mut self, blocked_id: i64) -> Result<(), PersistenceError>;

    /// Returns every booked record for one activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_booked_records(
        &mut self,
        activity: Activity,
    ) -> Result<Vec<BookedRecord>, PersistenceError>;

    /// Returns every booked record paid for by the given email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn list_booked_for_payer(
        &mut self,
        payer_email: &str,
    ) -> Result<Vec<BookedRecord>, PersistenceError>;
}

/// `SQLite`-backed [`SlotStore`] implementation.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via an atomic
    /// counter, ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_slot_board_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file databases.
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }
}

impl SlotStore for SqlitePersistence {
    fn list_booked(
        &mut self,
        activity: Activity,
        date: SlotDate,
    ) -> Result<BTreeSet<SlotLabel>, PersistenceError> {
        queries::list_booked(&mut self.conn, activity, date)
    }

    fn list_blocked(
        &mut self,
        activity: Activity,
        date: SlotDate,
    ) -> Result<BTreeMap<SlotLabel, i64>, PersistenceError> {
        queries::list_blocked(&mut self.conn, activity, date)
    }

    fn create_booked(&mut self, record: &BookedRecord) -> Result<i64, PersistenceError> {
        mutations::insert_booked(&mut self.conn, record)
    }

    fn create_blocked(&mut self, record: &BlockedRecord) -> Result<i64, PersistenceError> {
        mutations::insert_blocked(&mut self.conn, record)
    }

    fn delete_blocked(&mut self, blocked_id: i64) -> Result<(), PersistenceError> {
        mutations::delete_blocked(&mut self.conn, blocked_id)
    }

    fn list_booked_records(
        &mut self,
        activity: Activity,
    ) -> Result<Vec<BookedRecord>, PersistenceError> {
        queries::list_booked_records(&mut self.conn, activity)
    }

    fn list_booked_for_payer(
        &mut self,
        payer_email: &str,
    ) -> Result<Vec<BookedRecord>, PersistenceError> {
        queries::list_booked_for_payer(&mut self.conn, payer_email)
    }
}
