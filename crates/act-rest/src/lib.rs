//! act-rest - REST transport and authenticated session for the ACT client.
//!
//! The [`Session`] owns the authenticated request path: it reads tokens from
//! a durable [`act_core::store::TokenStore`], attaches bearer headers,
//! detects 401s, refreshes the access token (coalescing concurrent
//! refreshes into one network call) and retries the original request exactly
//! once.

mod alerts;
mod api;
mod client;
mod endpoints;
mod session;

pub use alerts::{AlertMonitor, TriggeredAlert};
pub use api::NewsKind;
pub use client::{RequestSpec, RestClient};
pub use endpoints::{OrderCreated, SupportRequestCreated};
pub use session::Session;
