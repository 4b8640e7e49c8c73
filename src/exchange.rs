//! Exchange submitter
//!
//! Owns the lifecycle of a single outgoing request: validate the query,
//! POST it to the configured endpoint, settle into success or failure,
//! and reset back to idle.

pub mod client;
pub mod state;
pub mod types;
pub mod worker;

// Re-export public types
pub use client::{DEFAULT_ENDPOINT, ExchangeClient};
pub use state::{ExchangeResult, ExchangeState};
pub use types::{ExchangeError, ExchangeReply, ExchangeRequest};
