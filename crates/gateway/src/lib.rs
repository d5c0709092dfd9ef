// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clients for the external collaborators the slot board hands off to:
//! the payment gateway (Razorpay) and the transactional mail service
//! (Resend). Both are consumed through traits so the API layer can be
//! exercised without the network.

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod notify;
mod payment;

pub use error::GatewayError;
pub use notify::{ConfirmationEmail, Mailer, ResendMailer, send_confirmation_best_effort};
pub use payment::{CheckoutOutcome, OrderId, PaymentGateway, RazorpayClient};
