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

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{info, warn};

use slot_board_api::{
    ApiError, BlockSlotsRequest, BlockSlotsResponse, ConfirmBookingRequest,
    ConfirmBookingResponse, CreateOrderRequest, CreateOrderResponse, MyBookingsResponse,
    RevenueResponse, SlotBoardRequest, SlotBoardResponse, UnblockSlotRequest,
    UnblockSlotResponse, authenticate_stub, block_slots, confirm_booking, create_order,
    get_slot_board, list_my_bookings, revenue_summary, unblock_slot,
};
use slot_board_gateway::{RazorpayClient, ResendMailer};
use slot_board_persistence::{PersistenceError, SqlitePersistence};

/// Slot Board Server - HTTP server for the SuperKick turf booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer, wrapped in a Mutex for safe concurrent access.
    store: Arc<Mutex<SqlitePersistence>>,
    /// The payment gateway client.
    gateway: Arc<RazorpayClient>,
    /// The confirmation mailer, if configured.
    mailer: Arc<Option<ResendMailer>>,
}

/// Query parameters for a slot board read.
#[derive(Debug, Clone, Deserialize)]
struct SlotBoardQuery {
    /// The activity name.
    activity: String,
    /// The date, `YYYY-MM-DD`.
    date: String,
}

/// Identity fields every state-changing request carries.
///
/// The identity provider is external; these fields arrive pre-verified and
/// the role was resolved once at session start.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorFields {
    /// The actor's email address.
    actor_email: String,
    /// The actor's display name.
    #[serde(default)]
    actor_name: String,
    /// The actor's role ("Customer" or "Admin").
    actor_role: String,
}

/// API request for blocking slots.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BlockSlotsApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The activity name.
    activity: String,
    /// The date, `YYYY-MM-DD`.
    date: String,
    /// The selected slot labels.
    slots: Vec<String>,
}

/// API request for unblocking one slot.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UnblockSlotApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The activity name.
    activity: String,
    /// The date, `YYYY-MM-DD`.
    date: String,
    /// The blocked slot's label.
    slot: String,
}

/// API request for creating a payment order.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateOrderApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The activity name.
    activity: String,
    /// The date, `YYYY-MM-DD`.
    date: String,
    /// The selected slot labels.
    slots: Vec<String>,
}

/// API request delivering a successful payment callback.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ConfirmBookingApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
    /// The activity name.
    activity: String,
    /// The date, `YYYY-MM-DD`.
    date: String,
    /// The slots the order covered.
    slots: Vec<String>,
    /// The order the payment settled.
    order_id: String,
    /// The payment reference from the gateway.
    payment_id: String,
}

/// API request carrying only actor identity (revenue, own bookings).
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorOnlyApiRequest {
    #[serde(flatten)]
    actor: ActorFields,
}

/// Standard error response body.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PaymentOrderFailed { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        tracing::error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

async fn get_board(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<SlotBoardQuery>,
) -> Result<Json<SlotBoardResponse>, HttpError> {
    let request: SlotBoardRequest = SlotBoardRequest {
        activity: query.activity,
        date: query.date,
    };
    let mut store = state.store.lock().await;
    let response: SlotBoardResponse =
        get_slot_board(&mut *store, &request, OffsetDateTime::now_utc())?;
    Ok(Json(response))
}

async fn post_block_slots(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<BlockSlotsApiRequest>,
) -> Result<Json<BlockSlotsResponse>, HttpError> {
    let actor = authenticate_stub(
        &request.actor.actor_email,
        &request.actor.actor_name,
        &request.actor.actor_role,
    )?;
    let api_request: BlockSlotsRequest = BlockSlotsRequest {
        activity: request.activity,
        date: request.date,
        slots: request.slots,
    };
    let mut store = state.store.lock().await;
    let response: BlockSlotsResponse = block_slots(
        &mut *store,
        &actor,
        &api_request,
        OffsetDateTime::now_utc(),
    )?;
    Ok(Json(response))
}

async fn post_unblock_slot(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<UnblockSlotApiRequest>,
) -> Result<Json<UnblockSlotResponse>, HttpError> {
    let actor = authenticate_stub(
        &request.actor.actor_email,
        &request.actor.actor_name,
        &request.actor.actor_role,
    )?;
    let api_request: UnblockSlotRequest = UnblockSlotRequest {
        activity: request.activity,
        date: request.date,
        slot: request.slot,
    };
    let mut store = state.store.lock().await;
    let response: UnblockSlotResponse = unblock_slot(
        &mut *store,
        &actor,
        &api_request,
        OffsetDateTime::now_utc(),
    )?;
    Ok(Json(response))
}

async fn post_create_order(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<CreateOrderApiRequest>,
) -> Result<Json<CreateOrderResponse>, HttpError> {
    let actor = authenticate_stub(
        &request.actor.actor_email,
        &request.actor.actor_name,
        &request.actor.actor_role,
    )?;
    let api_request: CreateOrderRequest = CreateOrderRequest {
        activity: request.activity,
        date: request.date,
        slots: request.slots,
    };
    let mut store = state.store.lock().await;
    let response: CreateOrderResponse = create_order(
        &mut *store,
        state.gateway.as_ref(),
        &actor,
        &api_request,
        OffsetDateTime::now_utc(),
    )
    .await?;
    Ok(Json(response))
}

async fn post_confirm_booking(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<ConfirmBookingApiRequest>,
) -> Result<Json<ConfirmBookingResponse>, HttpError> {
    let actor = authenticate_stub(
        &request.actor.actor_email,
        &request.actor.actor_name,
        &request.actor.actor_role,
    )?;
    let api_request: ConfirmBookingRequest = ConfirmBookingRequest {
        activity: request.activity,
        date: request.date,
        slots: request.slots,
        order_id: request.order_id,
        payment_id: request.payment_id,
    };
    let mut store = state.store.lock().await;
    let response: ConfirmBookingResponse = confirm_booking(
        &mut *store,
        state.mailer.as_ref().as_ref(),
        &actor,
        &api_request,
        OffsetDateTime::now_utc(),
    )
    .await?;
    Ok(Json(response))
}

async fn post_revenue(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<ActorOnlyApiRequest>,
) -> Result<Json<RevenueResponse>, HttpError> {
    let actor = authenticate_stub(
        &request.actor.actor_email,
        &request.actor.actor_name,
        &request.actor.actor_role,
    )?;
    let mut store = state.store.lock().await;
    let response: RevenueResponse =
        revenue_summary(&mut *store, &actor, OffsetDateTime::now_utc())?;
    Ok(Json(response))
}

async fn post_my_bookings(
    AxumState(state): AxumState<AppState>,
    Json(request): Json<ActorOnlyApiRequest>,
) -> Result<Json<MyBookingsResponse>, HttpError> {
    let actor = authenticate_stub(
        &request.actor.actor_email,
        &request.actor.actor_name,
        &request.actor.actor_role,
    )?;
    let mut store = state.store.lock().await;
    let response: MyBookingsResponse = list_my_bookings(&mut *store, &actor)?;
    Ok(Json(response))
}

/// Builds the application router.
fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/slot-board", get(get_board))
        .route("/slots/block", post(post_block_slots))
        .route("/slots/unblock", post(post_unblock_slot))
        .route("/orders", post(post_create_order))
        .route("/bookings/confirm", post(post_confirm_booking))
        .route("/bookings/mine", post(post_my_bookings))
        .route("/revenue", post(post_revenue))
        .with_state(state)
}

/// Reads an environment variable, warning when it is absent.
fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        warn!("{name} is not set");
        String::new()
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Slot Board Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let store: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    // Payment gateway credentials come from the environment; with empty
    // keys every order creation fails upstream with 401, surfaced to the
    // actor as a recoverable payment error.
    let gateway: RazorpayClient = RazorpayClient::new(
        &env_or_empty("RAZORPAY_KEY_ID"),
        &env_or_empty("RAZORPAY_KEY_SECRET"),
    )?;

    // Confirmation email is optional; without a key it is skipped.
    let mailer: Option<ResendMailer> = match std::env::var("RESEND_API_KEY") {
        Ok(api_key) if !api_key.is_empty() => {
            let from: String = std::env::var("MAIL_FROM").unwrap_or_else(|_| {
                String::from("SuperKick Turf <bookings@superkick.example>")
            });
            Some(ResendMailer::new(&api_key, &from)?)
        }
        _ => {
            warn!("RESEND_API_KEY is not set; confirmation emails are disabled");
            None
        }
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        gateway: Arc::new(gateway),
        mailer: Arc::new(mailer),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode, header::CONTENT_TYPE},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let store: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        let gateway: RazorpayClient =
            RazorpayClient::new("rzp_test_key", "rzp_test_secret").expect("client");
        AppState {
            store: Arc::new(Mutex::new(store)),
            gateway: Arc::new(gateway),
            mailer: Arc::new(None),
        }
    }

    fn block_body(role: &str, slots: &[&str]) -> String {
        serde_json::json!({
            "actor_email": "admin@example.com",
            "actor_name": "Test Admin",
            "actor_role": role,
            "activity": "Football",
            "date": "2026-08-10",
            "slots": slots,
        })
        .to_string()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_slot_board_returns_the_full_day() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/slot-board?activity=Football&date=2026-08-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["slots"].as_array().unwrap().len(), 18);
        assert_eq!(body["unit_price"], 1500);
    }

    #[tokio::test]
    async fn test_blocking_requires_the_admin_role() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/slots/block")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(block_body("Customer", &["14:00"])))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
        let body: serde_json::Value = body_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_blocked_slot_shows_on_the_next_board_read() {
        let state: AppState = create_test_app_state();

        let block_response = build_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/slots/block")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(block_body("Admin", &["14:00"])))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(block_response.status(), HttpStatusCode::OK);

        let board_response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/slot-board?activity=Football&date=2026-08-10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body: serde_json::Value = body_json(board_response).await;
        let statuses: Vec<(&str, &str)> = body["slots"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| {
                (
                    s["start_time"].as_str().unwrap(),
                    s["status"].as_str().unwrap(),
                )
            })
            .collect();
        assert!(statuses.contains(&("14:00", "Blocked")));
    }

    #[tokio::test]
    async fn test_unblocking_an_open_slot_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let body: String = serde_json::json!({
            "actor_email": "admin@example.com",
            "actor_name": "Test Admin",
            "actor_role": "Admin",
            "activity": "Football",
            "date": "2026-08-10",
            "slot": "14:00",
        })
        .to_string();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/slots/unblock")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }
}
