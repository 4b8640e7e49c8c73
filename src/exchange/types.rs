//! Channel and error types for the exchange worker

use serde_json::Value;
use thiserror::Error;

/// A single submission handed to the worker
#[derive(Debug, Clone)]
pub struct ExchangeRequest {
    /// Trimmed query text
    pub query: String,
    /// Unique ID for this request (0 reserved for worker-level failures)
    pub request_id: u64,
}

/// Settlement sent back from the worker
#[derive(Debug, Clone)]
pub enum ExchangeReply {
    /// The server answered 2xx with a JSON body
    Success { payload: Value, request_id: u64 },
    /// The exchange failed; carries the user-facing diagnostic
    Failure { message: String, request_id: u64 },
}

/// Errors produced while performing the HTTP exchange
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("server responded with HTTP status {code}")]
    Status { code: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid JSON in response body: {0}")]
    Parse(String),
}

impl ExchangeError {
    /// User-facing diagnostic for a failed exchange
    ///
    /// Status errors name the numeric code; transport and parse failures
    /// share one fixed message pointing the operator at the server address.
    pub fn diagnostic(&self, endpoint: &str) -> String {
        match self {
            ExchangeError::Status { code } => {
                format!("Request failed with HTTP status {code}")
            }
            ExchangeError::Network(_) | ExchangeError::Parse(_) => {
                format!("Failed to connect to the server. Make sure it is running at {endpoint}")
            }
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
