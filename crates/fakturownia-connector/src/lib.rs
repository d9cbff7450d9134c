//! Outbound REST plumbing for the Fakturownia API.
//!
//! One thin [`ApiClient`] over reqwest, a method handler per resource family,
//! and [`handlers::dispatch_any`] routing an unscoped method name across all
//! of them. Handlers are pure mappings from `(method, params)` to a single
//! REST call; the response body is forwarded verbatim.

pub mod client;
pub mod error;
pub mod handlers;
mod params;

pub use client::{ApiClient, Query};
pub use error::{ConnectorError, ConnectorResult};
pub use handlers::dispatch_any;
