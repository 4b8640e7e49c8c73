//! Exchange state owned by the UI thread
//!
//! Holds the single mutable result slot and the channels to the worker.
//! The slot is a tagged variant so exactly one of idle/pending/success/
//! failure holds at any time.

use std::sync::mpsc::{Receiver, Sender, channel};

use serde_json::Value;

use super::client::ExchangeClient;
use super::types::{ExchangeReply, ExchangeRequest};
use super::worker::spawn_worker;

/// Outcome slot for the current exchange
///
/// Overwritten wholesale when the exchange settles, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExchangeResult {
    /// No submission attempted since startup or the last reset
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The server answered 2xx; holds the response document verbatim
    Success(Value),
    /// The exchange failed; holds the user-facing diagnostic
    Failure(String),
}

impl ExchangeResult {
    /// The response document, if the exchange settled successfully
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ExchangeResult::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ExchangeResult::Pending)
    }
}

/// Submitter state: result slot plus worker channels
pub struct ExchangeState {
    endpoint: String,
    pub result: ExchangeResult,
    /// Channel to send requests to the worker
    request_tx: Option<Sender<ExchangeRequest>>,
    /// Channel to receive settlements from the worker
    reply_rx: Option<Receiver<ExchangeReply>>,
    /// Starts at 1; 0 is reserved for worker-level failures
    next_request_id: u64,
    /// ID of the currently in-flight request, if any
    in_flight_request_id: Option<u64>,
}

impl ExchangeState {
    /// Create the state and spawn the worker thread behind it
    pub fn new(endpoint: String) -> Self {
        let client = ExchangeClient::new(endpoint.clone());
        let (request_tx, request_rx) = channel();
        let (reply_tx, reply_rx) = channel();

        spawn_worker(client, request_rx, reply_tx);

        Self {
            endpoint,
            result: ExchangeResult::Idle,
            request_tx: Some(request_tx),
            reply_rx: Some(reply_rx),
            next_request_id: 1, // Reserve 0 for worker-level failures
            in_flight_request_id: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a query to the worker
    ///
    /// Trims the text first; a whitespace-only query is a silent no-op
    /// that leaves the current result untouched. Otherwise the slot moves
    /// to Pending and the trimmed text goes out as one request.
    ///
    /// At-most-one-outstanding is the caller's guard: a second submit
    /// while pending supersedes the first, whose settlement is then
    /// discarded as stale.
    pub fn submit(&mut self, query: &str) {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return;
        }

        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker-level failures)
        if self.next_request_id == 0 {
            self.next_request_id = 1;
        }

        log::debug!("Sending request {} for query: {}", request_id, trimmed);

        self.in_flight_request_id = Some(request_id);
        self.result = ExchangeResult::Pending;

        if let Some(ref tx) = self.request_tx {
            let request = ExchangeRequest {
                query: trimmed.to_string(),
                request_id,
            };

            // If send fails, the worker died - clear channels
            if tx.send(request).is_err() {
                log::error!("Exchange worker disconnected - send failed");
                self.request_tx = None;
                self.reply_rx = None;
                self.in_flight_request_id = None;
                self.result = ExchangeResult::Failure("Exchange worker disconnected".to_string());
            }
        } else {
            log::error!("No request channel available");
        }
    }

    /// Drain settled replies (non-blocking)
    ///
    /// Call this in the main event loop. Returns true when the result
    /// slot changed so the caller can refresh its display cache.
    pub fn poll_reply(&mut self) -> bool {
        let mut updated = false;

        // Take the receiver temporarily to avoid borrow checker issues
        let rx = match self.reply_rx.take() {
            Some(rx) => rx,
            None => return false,
        };

        loop {
            match rx.try_recv() {
                Ok(reply) => {
                    if self.process_reply(reply) {
                        updated = true;
                    }
                }
                Err(std::sync::mpsc::TryRecvError::Empty) => {
                    // Put receiver back and break
                    self.reply_rx = Some(rx);
                    break;
                }
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    log::error!("Exchange worker disconnected in poll_reply");
                    self.request_tx = None;
                    if self.in_flight_request_id.is_some() {
                        self.result =
                            ExchangeResult::Failure("Exchange worker disconnected".to_string());
                        self.in_flight_request_id = None;
                        updated = true;
                    }
                    // Don't put receiver back - it's disconnected
                    break;
                }
            }
        }

        updated
    }

    /// Apply a single settlement
    ///
    /// Replies whose request id no longer matches the in-flight id are
    /// discarded (superseded or reset-dropped). Worker-level failures
    /// (request_id 0) always apply.
    fn process_reply(&mut self, reply: ExchangeReply) -> bool {
        let current_request_id = self.in_flight_request_id;

        match reply {
            ExchangeReply::Success {
                payload,
                request_id,
            } => {
                if Some(request_id) != current_request_id {
                    log::debug!(
                        "Ignoring stale success from request {} (current: {:?})",
                        request_id,
                        current_request_id
                    );
                    return false;
                }

                self.in_flight_request_id = None;
                self.result = ExchangeResult::Success(payload);
                true
            }
            ExchangeReply::Failure {
                message,
                request_id,
            } => {
                if request_id == 0 || Some(request_id) == current_request_id {
                    self.in_flight_request_id = None;
                    self.result = ExchangeResult::Failure(message);
                    return true;
                }

                log::debug!(
                    "Ignoring stale failure from request {} (current: {:?})",
                    request_id,
                    current_request_id
                );
                false
            }
        }
    }

    /// Clear the result slot back to Idle
    ///
    /// Total operation with no failure mode. Also forgets the in-flight
    /// id, so the settlement of a dropped request is discarded as stale.
    pub fn reset(&mut self) {
        self.in_flight_request_id = None;
        self.result = ExchangeResult::Idle;
    }

    /// Check if a request is currently in flight
    pub fn is_pending(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
