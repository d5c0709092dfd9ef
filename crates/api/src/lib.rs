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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;
mod revenue;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, authenticate_stub};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_gateway_error,
    translate_persistence_error,
};
pub use handlers::{
    ORDER_CURRENCY, block_slots, confirm_booking, create_order, get_slot_board, list_my_bookings,
    revenue_summary, unblock_slot,
};
pub use request_response::{
    BlockSlotsRequest, BlockSlotsResponse, BookingInfo, ConfirmBookingRequest,
    ConfirmBookingResponse, CreateOrderRequest, CreateOrderResponse, MyBookingsResponse,
    RevenueResponse, SlotBoardRequest, SlotBoardResponse, SlotInfo, UnblockSlotRequest,
    UnblockSlotResponse,
};
pub use revenue::{RevenueSummary, summarize};
