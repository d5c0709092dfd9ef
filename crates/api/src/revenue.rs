// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Revenue aggregation over booked records.

use slot_board_domain::BookedRecord;
use time::OffsetDateTime;

/// Revenue totals over four calendar windows.
///
/// Windows are keyed by the **booking date** (the day being played), not
/// the day the payment happened, and each record contributes its per-slot
/// `amount_paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevenueSummary {
    /// All-time revenue in whole rupees.
    pub total: u64,
    /// Revenue from bookings dated `now`'s calendar day.
    pub today: u64,
    /// Revenue from bookings dated `now`'s calendar month.
    pub this_month: u64,
    /// Revenue from bookings dated `now`'s calendar year.
    pub this_year: u64,
}

/// Aggregates booked records into revenue windows.
#[must_use]
pub fn summarize(records: &[BookedRecord], now: OffsetDateTime) -> RevenueSummary {
    let mut summary: RevenueSummary = RevenueSummary::default();

    for record in records {
        let amount: u64 = u64::from(record.amount_paid);
        let date: time::Date = record.date.date();

        summary.total += amount;
        if date == now.date() {
            summary.today += amount;
        }
        if date.month() == now.month() && date.year() == now.year() {
            summary.this_month += amount;
        }
        if date.year() == now.year() {
            summary.this_year += amount;
        }
    }

    summary
}
