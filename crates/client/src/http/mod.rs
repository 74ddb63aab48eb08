//! HTTP transport layer
//!
//! Cookie-forwarding reqwest wrapper and the replayable request description
//! the API core builds on.

pub mod client;
pub mod request;

// Re-export commonly used items
pub use client::{HttpTransport, HttpTransportBuilder};
pub use request::{FormField, FormValue, OutboundRequest, RequestBody};
