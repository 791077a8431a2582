//! Client layer for the CLI/TUI interfaces
//!
//! Typed access to the shortener backend's JSON API.
//!
//! # Architecture
//!
//! ```text
//! CLI/TUI → services → ApiClient → Transport (ureq) → backend
//!                          │
//!                          └→ schema (per-endpoint validation)
//! ```
//!
//! A backend `status: false` is a `Reply::Rejected`; only transport failures
//! and schema mismatches are errors.

mod api_client;
mod context;
mod cookies;
mod endpoints;
mod schema;
mod transport;
mod ureq_transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api_client::{ApiClient, Reply};
pub use context::ServiceContext;
pub use cookies::{COOKIE_SETTINGS_KEY, CookieJar};
pub use endpoints::{API_PREFIX, Endpoint};
pub use schema::{Envelope, Record, RecordsData, SearchData, ShortenedData, StatusResponse};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use ureq_transport::UreqTransport;
