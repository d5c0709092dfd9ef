// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment collaborator contract and the Razorpay implementation.

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use tracing::debug;

const RAZORPAY_API_BASE: &str = "https://api.razorpay.com/v1";

/// The payment collaborator's identifier for one created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an `OrderId`.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a hosted checkout ended.
///
/// The checkout runs in the customer's browser; exactly one of these comes
/// back per opened checkout — or none at all, which leaves the purchase
/// flow suspended until the customer refreshes. Failure and dismissal
/// create no records and return the slots to the selectable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    /// The payment went through.
    Success {
        /// The payment reference to stamp on booked records.
        payment_id: String,
        /// The order the payment settled.
        order_id: String,
    },
    /// The payment was attempted and rejected.
    Failure {
        /// The collaborator's description of the rejection.
        reason: String,
    },
    /// The customer closed the checkout without paying.
    Dismissed,
}

/// The payment collaborator contract the slot board consumes.
pub trait PaymentGateway {
    /// Creates a payment order.
    ///
    /// # Arguments
    ///
    /// * `amount_paise` - The order total in the currency's minor unit
    /// * `currency` - ISO currency code, e.g. `"INR"`
    /// * `receipt` - A caller-chosen receipt reference
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator cannot be reached, refuses the
    /// order, or answers unparseably.
    fn create_order(
        &self,
        amount_paise: u64,
        currency: &str,
        receipt: &str,
    ) -> impl Future<Output = Result<OrderId, GatewayError>> + Send;
}

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    id: String,
}

/// Razorpay orders-API client.
pub struct RazorpayClient {
    client: reqwest::Client,
    key_id: String,
    key_secret: String,
}

impl RazorpayClient {
    /// Creates a new client with the given API key pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(key_id: &str, key_secret: &str) -> Result<Self, GatewayError> {
        let client: reqwest::Client =
            reqwest::Client::builder()
                .build()
                .map_err(|e| GatewayError::RequestFailed {
                    service: "Razorpay",
                    message: e.to_string(),
                })?;

        Ok(Self {
            client,
            key_id: key_id.to_string(),
            key_secret: key_secret.to_string(),
        })
    }
}

impl PaymentGateway for RazorpayClient {
    async fn create_order(
        &self,
        amount_paise: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<OrderId, GatewayError> {
        let url: String = format!("{RAZORPAY_API_BASE}/orders");

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&CreateOrderBody {
                amount: amount_paise,
                currency,
                receipt,
            })
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed {
                service: "Razorpay",
                message: e.to_string(),
            })?;

        let status = resp.status();
        let text: String = resp.text().await.map_err(|e| GatewayError::RequestFailed {
            service: "Razorpay",
            message: e.to_string(),
        })?;
        debug!("Create order response (status {status}): {text}");

        if !status.is_success() {
            return Err(GatewayError::OrderCreationFailed(format!(
                "status {status}: {text}"
            )));
        }

        let body: CreateOrderResponse = serde_json::from_str(&text).map_err(|e| {
            GatewayError::UnexpectedResponse {
                service: "Razorpay",
                message: format!("{e}: {text}"),
            }
        })?;

        Ok(OrderId::new(body.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_body_serializes_with_minor_unit_amount() {
        let body: CreateOrderBody<'_> = CreateOrderBody {
            amount: 300_000,
            currency: "INR",
            receipt: "receipt_order_42",
        };

        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["amount"], 300_000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["receipt"], "receipt_order_42");
    }

    #[test]
    fn test_order_response_parses_the_order_id() {
        let text: &str = r#"{"id":"order_abc123","entity":"order","amount":300000}"#;
        let body: CreateOrderResponse = serde_json::from_str(text).unwrap();
        assert_eq!(body.id, "order_abc123");
    }

    #[test]
    fn test_checkout_outcomes_compare_by_content() {
        let success: CheckoutOutcome = CheckoutOutcome::Success {
            payment_id: String::from("pay_1"),
            order_id: String::from("order_1"),
        };
        assert_ne!(success, CheckoutOutcome::Dismissed);
        assert_ne!(
            success,
            CheckoutOutcome::Failure {
                reason: String::from("declined"),
            }
        );
    }
}
