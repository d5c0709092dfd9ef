// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors from the external payment and notification collaborators.
///
/// Everything here is recoverable from the booking flow's point of view:
/// an order that failed to create returns the actor to their selection,
/// and a failed confirmation email is logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The collaborator could not be reached at all.
    #[error("Failed to reach {service}: {message}")]
    RequestFailed {
        /// The collaborator being called.
        service: &'static str,
        /// The transport error message.
        message: String,
    },
    /// The payment collaborator refused to create an order.
    #[error("Order creation failed: {0}")]
    OrderCreationFailed(String),
    /// The collaborator answered with something unparseable.
    #[error("Unexpected response from {service}: {message}")]
    UnexpectedResponse {
        /// The collaborator being called.
        service: &'static str,
        /// What was wrong with the response.
        message: String,
    },
    /// The mail collaborator rejected the confirmation email.
    #[error("Confirmation email failed: {0}")]
    EmailSendFailed(String),
}
