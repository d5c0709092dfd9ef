// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking confirmation email, sent best-effort after records persist.

use crate::error::GatewayError;
use serde::Serialize;
use tracing::{debug, warn};

const RESEND_API_BASE: &str = "https://api.resend.com";

/// Everything a booking confirmation email says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    /// Recipient address.
    pub to: String,
    /// Recipient display name.
    pub name: String,
    /// The booked activity.
    pub activity: String,
    /// The booked date, `YYYY-MM-DD`.
    pub date: String,
    /// The booked slot labels, ascending.
    pub slots: Vec<String>,
    /// The order total in whole rupees.
    pub total_amount: u32,
    /// The payment reference.
    pub payment_id: String,
}

impl ConfirmationEmail {
    /// Renders the HTML body.
    #[must_use]
    pub fn html_body(&self) -> String {
        format!(
            "<p>Hi {},</p>\
             <p>Thank you for booking <strong>{}</strong> on <strong>{}</strong> \
             at <strong>{}</strong>.</p>\
             <p>Amount paid: \u{20b9}{} (payment reference {}).</p>\
             <p>See you soon!</p>",
            self.name,
            self.activity,
            self.date,
            self.slots.join(", "),
            self.total_amount,
            self.payment_id,
        )
    }
}

/// The notification collaborator contract.
///
/// Confirmation email is strictly best-effort: a failure here must never
/// roll back or block the booking it describes.
pub trait Mailer {
    /// Sends one booking confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the mail collaborator cannot be reached or
    /// rejects the message.
    fn send_confirmation(
        &self,
        email: &ConfirmationEmail,
    ) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: String,
}

/// Resend HTTP-API mailer.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    from: String,
}

impl ResendMailer {
    /// Creates a new mailer.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The Resend API key
    /// * `from` - The sender line, e.g. `"SuperKick Turf <bookings@example.com>"`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: &str, from: &str) -> Result<Self, GatewayError> {
        let client: reqwest::Client =
            reqwest::Client::builder()
                .build()
                .map_err(|e| GatewayError::RequestFailed {
                    service: "Resend",
                    message: e.to_string(),
                })?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            from: from.to_string(),
        })
    }
}

impl Mailer for ResendMailer {
    async fn send_confirmation(&self, email: &ConfirmationEmail) -> Result<(), GatewayError> {
        let url: String = format!("{RESEND_API_BASE}/emails");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&SendEmailBody {
                from: &self.from,
                to: &email.to,
                subject: "Your Turf Booking is Confirmed!",
                html: email.html_body(),
            })
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed {
                service: "Resend",
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text: String = resp.text().await.unwrap_or_default();
            return Err(GatewayError::EmailSendFailed(format!(
                "status {status}: {text}"
            )));
        }

        debug!("Confirmation email sent to {}", email.to);
        Ok(())
    }
}

/// Sends a confirmation if a mailer is configured, swallowing any failure.
///
/// The booking the email describes is already persisted; the worst case
/// here is a missing email, which is logged and nothing more.
pub async fn send_confirmation_best_effort<M: Mailer>(
    mailer: Option<&M>,
    email: &ConfirmationEmail,
) {
    match mailer {
        None => debug!("No mailer configured; skipping confirmation email"),
        Some(m) => {
            if let Err(err) = m.send_confirmation(email).await {
                warn!("Failed to send confirmation email: {err}");
            }
        }
    }
}
