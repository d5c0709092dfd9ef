// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request for one `(activity, date)` slot board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBoardRequest {
    /// The activity name.
    pub activity: String,
    /// The date, `YYYY-MM-DD`.
    pub date: String,
}

/// One slot on a rendered board.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotInfo {
    /// The slot's start label, e.g. `"06:00"`.
    pub start_time: String,
    /// The slot's end label; the last slot of the day reads `"24:00"`.
    pub end_time: String,
    /// The slot's status name.
    pub status: String,
}

/// API response for a slot board read.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlotBoardResponse {
    /// The activity the board is for.
    pub activity: String,
    /// The date the board is for.
    pub date: String,
    /// Every slot of the operating day, in order.
    pub slots: Vec<SlotInfo>,
    /// RFC 3339 instant the availability snapshot was taken; the board is
    /// only as fresh as this.
    pub fetched_at: String,
    /// Price of one slot in whole rupees.
    pub unit_price: u32,
}

/// API request to block the selected slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSlotsRequest {
    /// The activity name.
    pub activity: String,
    /// The date, `YYYY-MM-DD`.
    pub date: String,
    /// The selected slot labels.
    pub slots: Vec<String>,
}

/// API response for a block action.
///
/// The writes fan out one per slot with no transaction, so both lists can
/// be non-empty at once: succeeded blocks stay in place and the failed
/// slots are reported for precise retry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlockSlotsResponse {
    /// Labels of the slots that were blocked.
    pub blocked: Vec<String>,
    /// Labels of the slots whose write failed.
    pub failed: Vec<String>,
    /// A human-readable outcome message.
    pub message: String,
}

/// API request to unblock one already-blocked slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnblockSlotRequest {
    /// The activity name.
    pub activity: String,
    /// The date, `YYYY-MM-DD`.
    pub date: String,
    /// The blocked slot's label.
    pub slot: String,
}

/// API response for a successful unblock.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnblockSlotResponse {
    /// The unblocked slot's label.
    pub slot: String,
    /// A human-readable outcome message.
    pub message: String,
}

/// API request to create a payment order for the selected slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    /// The activity name.
    pub activity: String,
    /// The date, `YYYY-MM-DD`.
    pub date: String,
    /// The selected slot labels.
    pub slots: Vec<String>,
}

/// API response for a created payment order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateOrderResponse {
    /// The payment collaborator's order identifier.
    pub order_id: String,
    /// ISO currency code of the order.
    pub currency: String,
    /// The order total in the currency's minor unit (paise).
    pub amount_paise: u64,
    /// Price of one slot in whole rupees.
    pub unit_price: u32,
    /// The order total in whole rupees.
    pub total_amount: u32,
    /// The slots the order covers, ascending.
    pub slots: Vec<String>,
}

/// API request delivering a successful payment callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmBookingRequest {
    /// The activity name.
    pub activity: String,
    /// The date, `YYYY-MM-DD`.
    pub date: String,
    /// The slots the order covered.
    pub slots: Vec<String>,
    /// The order the payment settled.
    pub order_id: String,
    /// The payment reference from the gateway.
    pub payment_id: String,
}

/// API response for a booking confirmation.
///
/// Like blocking, record creation fans out one write per slot; a partial
/// failure after payment is surfaced here, never swallowed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConfirmBookingResponse {
    /// Labels of the slots whose records were created.
    pub booked: Vec<String>,
    /// Labels of the slots whose record creation failed.
    pub failed: Vec<String>,
    /// A human-readable outcome message.
    pub message: String,
}

/// One booked record as reported to admins and customers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The booked activity.
    pub activity: String,
    /// The booked date, `YYYY-MM-DD`.
    pub date: String,
    /// The slot's start label.
    pub start_time: String,
    /// The slot's end label.
    pub end_time: String,
    /// The paying customer's email.
    pub payer_email: String,
    /// The paying customer's display name.
    pub payer_name: String,
    /// Amount paid for this slot in whole rupees.
    pub amount_paid: u32,
    /// Total of the order this slot belonged to, in whole rupees.
    pub total_amount: u32,
    /// The payment reference.
    pub payment_id: String,
    /// The order identifier.
    pub order_id: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// API response for the admin revenue dashboard.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RevenueResponse {
    /// All-time revenue in whole rupees.
    pub total: u64,
    /// Revenue from bookings dated today.
    pub today: u64,
    /// Revenue from bookings dated this calendar month.
    pub this_month: u64,
    /// Revenue from bookings dated this calendar year.
    pub this_year: u64,
    /// Every booking record, across all activities.
    pub bookings: Vec<BookingInfo>,
}

/// API response for a customer's own bookings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MyBookingsResponse {
    /// The customer's bookings, ordered by date and slot.
    pub bookings: Vec<BookingInfo>,
}
