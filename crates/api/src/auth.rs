// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authenticated actors and role-based authorization.

use crate::error::{ApiError, AuthError, translate_domain_error};
use slot_board_domain::{Payer, Role};

/// An authenticated actor with an associated role.
///
/// The identity provider lives outside this system; by the time a request
/// reaches the API boundary the actor's identity has been verified and
/// their role resolved, once, for the whole session. Handlers never
/// re-derive the role from the email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The actor's verified email address.
    pub email: String,
    /// The actor's display name.
    pub name: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(email: String, name: String, role: Role) -> Self {
        Self { email, name, role }
    }

    /// Returns this actor as a payer identity for checkout and records.
    #[must_use]
    pub fn payer(&self) -> Payer {
        Payer::new(self.email.clone(), self.name.clone())
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor may block slots. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an Admin.
    pub fn authorize_block(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Admin, "block slots")
    }

    /// Checks that an actor may unblock a slot. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an Admin.
    pub fn authorize_unblock(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Admin, "unblock a slot")
    }

    /// Checks that an actor may view revenue. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an Admin.
    pub fn authorize_revenue_view(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Admin, "view revenue")
    }

    /// Checks that an actor may purchase slots. Customer only — an admin's
    /// selection dispatches to blocking, never to checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not a Customer.
    pub fn authorize_purchase(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, Role::Customer, "purchase slots")
    }

    fn require(
        actor: &AuthenticatedActor,
        required_role: Role,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.role == required_role {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: required_role.as_str().to_string(),
            })
        }
    }
}

/// Resolves an actor from pre-verified identity fields.
///
/// This stands in for the external identity provider: the email arrives
/// already verified and the role was resolved at session start. An empty
/// display name falls back to `"Customer"`, matching what checkout prefill
/// shows for accounts without one.
///
/// # Errors
///
/// Returns an error if the email is empty or the role is not recognized.
pub fn authenticate_stub(email: &str, name: &str, role: &str) -> Result<AuthenticatedActor, ApiError> {
    if email.is_empty() {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from("actor email must not be empty"),
        });
    }

    let role: Role = Role::parse(role).map_err(translate_domain_error)?;

    let name: String = if name.is_empty() {
        String::from("Customer")
    } else {
        name.to_string()
    };

    Ok(AuthenticatedActor::new(email.to_string(), name, role))
}
