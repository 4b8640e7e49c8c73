//! HTTP client for the query endpoint
//!
//! Performs the one wire exchange the console supports: POST the query as
//! a JSON document and hand back the parsed response body verbatim.
//! Uses reqwest for HTTP and runs on the worker's tokio runtime.

use reqwest::Client;
use serde_json::Value;

use super::types::ExchangeError;

/// Endpoint of the reference deployment
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/demo";

/// Client bound to one endpoint URL
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    client: Client,
    endpoint: String,
}

impl ExchangeClient {
    /// Create a client for the given endpoint
    ///
    /// No timeout is configured: a hung server leaves the request in
    /// flight until the connection drops.
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `{"query": <query>}` and parse the response body as JSON
    ///
    /// Any 2xx status is a success and the body becomes the payload,
    /// untouched. A non-2xx status is reported with its numeric code
    /// regardless of body content.
    pub async fn submit(&self, query: &str) -> Result<Value, ExchangeError> {
        let body = serde_json::to_string(&serde_json::json!({ "query": query }))
            .map_err(|e| ExchangeError::Parse(e.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ExchangeError::Status {
                code: response.status().as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ExchangeError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| ExchangeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
