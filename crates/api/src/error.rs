// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use slot_board::CoreError;
use slot_board_domain::DomainError;
use slot_board_gateway::GatewayError;
use slot_board_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. Nothing here is fatal: write and payment errors are surfaced
/// to the actor as a dismissable message, and availability errors block
/// only the offending action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The payment collaborator failed to create an order.
    PaymentOrderFailed {
        /// A human-readable description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::PaymentOrderFailed { message } => {
                write!(f, "Payment order failed: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidActivity(name) => ApiError::InvalidInput {
            field: String::from("activity"),
            message: format!("Unknown activity: {name}"),
        },
        DomainError::InvalidRole(name) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role: {name}"),
        },
        DomainError::InvalidDate { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::InvalidSlotHour(hour) => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("Invalid slot hour: {hour}. Must be between 0 and 23"),
        },
        DomainError::InvalidSlotLabel(label) => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("Invalid slot label '{label}'. Expected 'HH:00'"),
        },
        DomainError::InvalidRange {
            start_hour,
            count,
            reason,
        } => ApiError::InvalidInput {
            field: String::from("grid"),
            message: format!(
                "Invalid slot range (start hour {start_hour}, count {count}): {reason}"
            ),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::EmptySelection => ApiError::DomainRuleViolation {
            rule: String::from("non_empty_selection"),
            message: String::from("No slot selected"),
        },
        CoreError::SlotNotSelectable { slot, status } => ApiError::DomainRuleViolation {
            rule: String::from("selectable_slots_only"),
            message: format!("Slot {slot} cannot be selected: it is {status}"),
        },
        CoreError::SlotNotOnGrid { slot } => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("Slot {slot} is not on the grid being viewed"),
        },
        CoreError::NotBlocked { slot } => ApiError::ResourceNotFound {
            resource_type: String::from("Blocked slot"),
            message: format!("Slot {slot} has no blocked record to remove"),
        },
        CoreError::PaymentAlreadyPending => ApiError::DomainRuleViolation {
            rule: String::from("single_pending_payment"),
            message: String::from("A payment is already pending for this selection"),
        },
        CoreError::NoPendingPayment => ApiError::DomainRuleViolation {
            rule: String::from("single_pending_payment"),
            message: String::from("No payment is pending"),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(what) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message: what,
        },
        other => ApiError::Internal {
            message: format!("Persistence error: {other}"),
        },
    }
}

/// Translates a gateway error into an API error.
///
/// Everything the payment collaborator can do wrong is recoverable: the
/// actor keeps their selection and may retry.
#[must_use]
pub fn translate_gateway_error(err: GatewayError) -> ApiError {
    match err {
        GatewayError::EmailSendFailed(message) => ApiError::Internal {
            // Confirmation email is best-effort and never propagates this
            // far in the booking flow; anything else reaching here is a
            // wiring mistake worth seeing loudly.
            message: format!("Unexpected email failure: {message}"),
        },
        other => ApiError::PaymentOrderFailed {
            message: other.to_string(),
        },
    }
}
