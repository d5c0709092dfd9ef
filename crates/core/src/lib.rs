// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dispatch;
mod error;
mod flow;
mod merge;
mod selection;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use dispatch::{BlockRequest, BoardContext, Effect, PurchaseHandoff, dispatch, resolve_unblock};
pub use error::CoreError;
pub use flow::PurchaseFlow;
pub use merge::compute_statuses;
pub use selection::SelectionSet;
pub use snapshot::AvailabilitySnapshot;
