// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for slot board reads, admin block management,
//! the customer purchase flow, and reporting.
//!
//! Handlers are generic over the [`SlotStore`], [`PaymentGateway`], and
//! [`Mailer`] collaborator contracts so they can be exercised without a
//! real database or network.

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_gateway_error,
    translate_persistence_error,
};
use crate::request_response::{
    BlockSlotsRequest, BlockSlotsResponse, BookingInfo, ConfirmBookingRequest,
    ConfirmBookingResponse, CreateOrderRequest, CreateOrderResponse, MyBookingsResponse,
    RevenueResponse, SlotBoardRequest, SlotBoardResponse, SlotInfo, UnblockSlotRequest,
    UnblockSlotResponse,
};
use crate::revenue::{RevenueSummary, summarize};
use slot_board::{
    AvailabilitySnapshot, BoardContext, Effect, PurchaseFlow, PurchaseHandoff, SelectionSet,
    compute_statuses, dispatch, resolve_unblock,
};
use slot_board_domain::{
    Activity, BlockedRecord, BookedRecord, SlotDate, SlotLabel, SlotStatus, operating_grid,
};
use slot_board_gateway::{
    ConfirmationEmail, Mailer, OrderId, PaymentGateway, send_confirmation_best_effort,
};
use slot_board_persistence::SlotStore;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{error, info, warn};

/// Currency every order is created in.
pub const ORDER_CURRENCY: &str = "INR";

/// Parses the `(activity, date)` pair every request carries.
fn parse_board(activity: &str, date: &str) -> Result<BoardContext, ApiError> {
    let activity: Activity = Activity::parse(activity).map_err(translate_domain_error)?;
    let date: SlotDate = SlotDate::parse(date).map_err(translate_domain_error)?;
    Ok(BoardContext::new(activity, date))
}

/// Parses client-submitted slot labels.
fn parse_slots(labels: &[String]) -> Result<Vec<SlotLabel>, ApiError> {
    labels
        .iter()
        .map(|s| SlotLabel::parse(s).map_err(translate_domain_error))
        .collect()
}

/// Takes the two availability reads and joins them into one snapshot.
fn load_snapshot<S: SlotStore>(
    store: &mut S,
    context: &BoardContext,
    now: OffsetDateTime,
) -> Result<AvailabilitySnapshot, ApiError> {
    let booked = store
        .list_booked(context.activity, context.date)
        .map_err(translate_persistence_error)?;
    let blocked = store
        .list_blocked(context.activity, context.date)
        .map_err(translate_persistence_error)?;
    Ok(AvailabilitySnapshot::new(booked, blocked, now))
}

/// Computes the board's statuses with no selection applied.
///
/// Selections live in the actor's session, not on the server, so a board
/// read never shows `Selected`; a write validates the submitted selection
/// against these statuses instead.
fn board_statuses(
    snapshot: &AvailabilitySnapshot,
    context: &BoardContext,
    now: OffsetDateTime,
) -> BTreeMap<SlotLabel, SlotStatus> {
    let grid: Vec<SlotLabel> = operating_grid();
    compute_statuses(&grid, snapshot, context.date, &SelectionSet::new(), now)
}

fn rfc3339(instant: OffsetDateTime) -> Result<String, ApiError> {
    instant.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}

fn booking_info(record: &BookedRecord) -> BookingInfo {
    BookingInfo {
        activity: record.activity.as_str().to_string(),
        date: record.date.to_string(),
        start_time: record.slot.label(),
        end_time: record.slot.end_label(),
        payer_email: record.payer_email.clone(),
        payer_name: record.payer_name.clone(),
        amount_paid: record.amount_paid,
        total_amount: record.total_amount,
        payment_id: record.payment_id.clone(),
        order_id: record.order_id.clone(),
        created_at: record.created_at.clone(),
    }
}

/// Returns the full slot board for one `(activity, date)` pair.
///
/// # Errors
///
/// Returns an error if the inputs don't parse or the availability reads
/// fail.
pub fn get_slot_board<S: SlotStore>(
    store: &mut S,
    request: &SlotBoardRequest,
    now: OffsetDateTime,
) -> Result<SlotBoardResponse, ApiError> {
    let context: BoardContext = parse_board(&request.activity, &request.date)?;
    let snapshot: AvailabilitySnapshot = load_snapshot(store, &context, now)?;
    let statuses: BTreeMap<SlotLabel, SlotStatus> = board_statuses(&snapshot, &context, now);

    let slots: Vec<SlotInfo> = operating_grid()
        .iter()
        .map(|slot| SlotInfo {
            start_time: slot.label(),
            end_time: slot.end_label(),
            status: statuses[slot].as_str().to_string(),
        })
        .collect();

    Ok(SlotBoardResponse {
        activity: context.activity.as_str().to_string(),
        date: context.date.to_string(),
        slots,
        fetched_at: rfc3339(snapshot.fetched_at)?,
        unit_price: context.activity.unit_price(),
    })
}

/// Blocks the selected slots. Admin only.
///
/// The writes fan out one per slot with no transaction; failures are
/// collected instead of aborting the batch, so succeeded blocks stay in
/// place and the caller learns exactly which slots to retry.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the inputs don't parse,
/// or any submitted slot is not currently selectable.
pub fn block_slots<S: SlotStore>(
    store: &mut S,
    actor: &AuthenticatedActor,
    request: &BlockSlotsRequest,
    now: OffsetDateTime,
) -> Result<BlockSlotsResponse, ApiError> {
    AuthorizationService::authorize_block(actor)?;

    let context: BoardContext = parse_board(&request.activity, &request.date)?;
    let labels: Vec<SlotLabel> = parse_slots(&request.slots)?;
    let snapshot: AvailabilitySnapshot = load_snapshot(store, &context, now)?;
    let statuses: BTreeMap<SlotLabel, SlotStatus> = board_statuses(&snapshot, &context, now);

    let selection: SelectionSet =
        SelectionSet::try_select(&labels, &statuses).map_err(translate_core_error)?;
    let effect: Effect =
        dispatch(actor.role, &selection, &context).map_err(translate_core_error)?;
    let Effect::BlockSlots(block) = effect else {
        return Err(ApiError::Internal {
            message: String::from("admin dispatch must produce a block effect"),
        });
    };

    let created_at: String = rfc3339(now)?;
    let mut blocked: Vec<String> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for slot in block.slots {
        let record: BlockedRecord = BlockedRecord::new(
            context.activity,
            context.date,
            slot,
            actor.email.clone(),
            created_at.clone(),
        );
        match store.create_blocked(&record) {
            Ok(_) => blocked.push(slot.label()),
            Err(err) => {
                warn!("Failed to block slot {slot}: {err}");
                failed.push(slot.label());
            }
        }
    }

    let message: String = if failed.is_empty() {
        String::from("Slot(s) marked as unavailable")
    } else {
        format!(
            "Blocked {} slot(s); {} failed and can be retried",
            blocked.len(),
            failed.len()
        )
    };

    info!(
        "Admin {} blocked {}/{} slot(s) on {} {}",
        actor.email,
        blocked.len(),
        blocked.len() + failed.len(),
        context.activity,
        context.date
    );

    Ok(BlockSlotsResponse {
        blocked,
        failed,
        message,
    })
}

/// Unblocks one already-blocked slot. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the inputs don't parse,
/// no blocked record is known for the slot, or the delete fails.
pub fn unblock_slot<S: SlotStore>(
    store: &mut S,
    actor: &AuthenticatedActor,
    request: &UnblockSlotRequest,
    now: OffsetDateTime,
) -> Result<UnblockSlotResponse, ApiError> {
    AuthorizationService::authorize_unblock(actor)?;

    let context: BoardContext = parse_board(&request.activity, &request.date)?;
    let slot: SlotLabel = SlotLabel::parse(&request.slot).map_err(translate_domain_error)?;
    let snapshot: AvailabilitySnapshot = load_snapshot(store, &context, now)?;

    let blocked_id: i64 =
        resolve_unblock(slot, &snapshot.blocked).map_err(translate_core_error)?;
    store
        .delete_blocked(blocked_id)
        .map_err(translate_persistence_error)?;

    info!(
        "Admin {} unblocked slot {slot} on {} {}",
        actor.email, context.activity, context.date
    );

    Ok(UnblockSlotResponse {
        slot: slot.label(),
        message: format!("Slot {} is now available", slot.label()),
    })
}

/// Creates a payment order for the selected slots. Customer only.
///
/// On success the customer's checkout opens against the returned order;
/// no record exists yet, and none will until the payment callback lands in
/// [`confirm_booking`].
///
/// # Errors
///
/// Returns an error if the actor is not a Customer, the inputs don't
/// parse, the selection is empty or includes an unavailable slot, or the
/// payment collaborator refuses the order.
pub async fn create_order<S: SlotStore, G: PaymentGateway>(
    store: &mut S,
    gateway: &G,
    actor: &AuthenticatedActor,
    request: &CreateOrderRequest,
    now: OffsetDateTime,
) -> Result<CreateOrderResponse, ApiError> {
    AuthorizationService::authorize_purchase(actor)?;

    let context: BoardContext = parse_board(&request.activity, &request.date)?;
    let labels: Vec<SlotLabel> = parse_slots(&request.slots)?;
    let snapshot: AvailabilitySnapshot = load_snapshot(store, &context, now)?;
    let statuses: BTreeMap<SlotLabel, SlotStatus> = board_statuses(&snapshot, &context, now);

    let selection: SelectionSet =
        SelectionSet::try_select(&labels, &statuses).map_err(translate_core_error)?;
    let effect: Effect =
        dispatch(actor.role, &selection, &context).map_err(translate_core_error)?;
    let Effect::PurchaseHandoff(handoff) = effect else {
        return Err(ApiError::Internal {
            message: String::from("customer dispatch must produce a purchase handoff"),
        });
    };

    let amount_paise: u64 = u64::from(handoff.total_amount) * 100;
    let receipt: String = format!("receipt_order_{}", rand::random::<u32>());
    let order_id: OrderId = gateway
        .create_order(amount_paise, ORDER_CURRENCY, &receipt)
        .await
        .map_err(translate_gateway_error)?;

    info!(
        "Created order {order_id} for {} slot(s) on {} {}",
        handoff.slots.len(),
        context.activity,
        context.date
    );

    Ok(CreateOrderResponse {
        order_id: order_id.as_str().to_string(),
        currency: ORDER_CURRENCY.to_string(),
        amount_paise,
        unit_price: handoff.unit_price,
        total_amount: handoff.total_amount,
        slots: handoff.slots.iter().map(SlotLabel::label).collect(),
    })
}

/// Settles a successful payment callback by creating the booked records.
/// Customer only.
///
/// The slots were validated when the order was created; they are **not**
/// re-validated against a fresh snapshot here — the payment has already
/// happened, and refusing to save a paid booking would be strictly worse
/// than the double-booking race it might catch. Record creation fans out
/// one write per slot; a partial failure after payment is surfaced in the
/// response, never swallowed.
///
/// # Errors
///
/// Returns an error if the actor is not a Customer, the inputs don't
/// parse, or the callback names no slots.
pub async fn confirm_booking<S: SlotStore, M: Mailer>(
    store: &mut S,
    mailer: Option<&M>,
    actor: &AuthenticatedActor,
    request: &ConfirmBookingRequest,
    now: OffsetDateTime,
) -> Result<ConfirmBookingResponse, ApiError> {
    AuthorizationService::authorize_purchase(actor)?;

    let context: BoardContext = parse_board(&request.activity, &request.date)?;
    let mut slots: Vec<SlotLabel> = parse_slots(&request.slots)?;
    slots.sort_unstable();
    slots.dedup();
    if slots.is_empty() {
        return Err(translate_core_error(slot_board::CoreError::EmptySelection));
    }

    let unit_price: u32 = context.activity.unit_price();
    // Bounded by the 24-slot day, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation)]
    let slot_count: u32 = slots.len() as u32;
    let total_amount: u32 = unit_price * slot_count;

    let handoff: PurchaseHandoff = PurchaseHandoff {
        activity: context.activity,
        date: context.date,
        slots,
        unit_price,
        total_amount,
    };

    let flow: PurchaseFlow = PurchaseFlow::new()
        .begin(handoff, request.order_id.clone())
        .map_err(translate_core_error)?;
    let created_at: String = rfc3339(now)?;
    let payer = actor.payer();
    let (records, _) = flow
        .confirm(&request.payment_id, &payer, &created_at)
        .map_err(translate_core_error)?;

    let mut booked: Vec<String> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for record in &records {
        match store.create_booked(record) {
            Ok(_) => booked.push(record.slot.label()),
            Err(err) => {
                error!("Booking save failed for slot {}: {err}", record.slot);
                failed.push(record.slot.label());
            }
        }
    }

    if !booked.is_empty() {
        let email: ConfirmationEmail = ConfirmationEmail {
            to: payer.email.clone(),
            name: payer.name.clone(),
            activity: context.activity.as_str().to_string(),
            date: context.date.to_string(),
            slots: booked.clone(),
            total_amount,
            payment_id: request.payment_id.clone(),
        };
        send_confirmation_best_effort(mailer, &email).await;
    }

    let message: String = if failed.is_empty() {
        String::from("Booking Confirmed!")
    } else {
        String::from("Payment successful, but some booking records failed to save")
    };

    info!(
        "Confirmed {}/{} slot(s) for {} on {} {} (payment {})",
        booked.len(),
        booked.len() + failed.len(),
        payer.email,
        context.activity,
        context.date,
        request.payment_id
    );

    Ok(ConfirmBookingResponse {
        booked,
        failed,
        message,
    })
}

/// Returns revenue totals and every booking record. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or a read fails.
pub fn revenue_summary<S: SlotStore>(
    store: &mut S,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<RevenueResponse, ApiError> {
    AuthorizationService::authorize_revenue_view(actor)?;

    let mut records: Vec<BookedRecord> = Vec::new();
    for activity in Activity::ALL {
        records.extend(
            store
                .list_booked_records(activity)
                .map_err(translate_persistence_error)?,
        );
    }

    let summary: RevenueSummary = summarize(&records, now);

    Ok(RevenueResponse {
        total: summary.total,
        today: summary.today,
        this_month: summary.this_month,
        this_year: summary.this_year,
        bookings: records.iter().map(booking_info).collect(),
    })
}

/// Returns the requesting actor's own bookings.
///
/// # Errors
///
/// Returns an error if the read fails.
pub fn list_my_bookings<S: SlotStore>(
    store: &mut S,
    actor: &AuthenticatedActor,
) -> Result<MyBookingsResponse, ApiError> {
    let records: Vec<BookedRecord> = store
        .list_booked_for_payer(&actor.email)
        .map_err(translate_persistence_error)?;

    Ok(MyBookingsResponse {
        bookings: records.iter().map(booking_info).collect(),
    })
}
