//! Exchange worker thread
//!
//! Performs the HTTP call in a background thread so the UI never blocks
//! on the network. Receives requests via channel and sends settlements
//! back to the main thread.
//!
//! Uses a current-thread tokio runtime for the async HTTP client and
//! installs a panic hook so a crash reports through the reply channel
//! instead of corrupting the terminal.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::client::ExchangeClient;
use super::types::{ExchangeReply, ExchangeRequest};

/// Spawn the exchange worker thread
///
/// Creates a background thread that:
/// 1. Listens for requests on the request channel
/// 2. POSTs each query to the endpoint
/// 3. Sends the settlement back via the reply channel
///
/// # Arguments
/// * `client` - HTTP client bound to the endpoint
/// * `request_rx` - Channel to receive requests
/// * `reply_tx` - Channel to send settlements
pub fn spawn_worker(
    client: ExchangeClient,
    request_rx: Receiver<ExchangeRequest>,
    reply_tx: Sender<ExchangeReply>,
) {
    std::thread::spawn(move || {
        // Set panic hook to prevent TUI corruption
        let reply_tx_clone = reply_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in exchange worker".to_string()
            };

            log::error!(
                "Exchange worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            // Use request_id = 0 to indicate a worker-level failure
            let _ = reply_tx_clone.send(ExchangeReply::Failure {
                message: format!("Exchange worker crashed: {}", panic_msg),
                request_id: 0,
            });
        }));

        // Wrap worker in catch_unwind
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            // Single-threaded runtime is enough: one request at a time
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(client, request_rx, reply_tx));
        }));

        // Restore panic hook
        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Exchange worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main worker loop - processes requests until the channel closes
///
/// Uses blocking recv() which is fine in a dedicated thread.
async fn worker_loop(
    client: ExchangeClient,
    request_rx: Receiver<ExchangeRequest>,
    reply_tx: Sender<ExchangeReply>,
) {
    log::debug!("Exchange worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received request {}: {}",
            request.request_id,
            request.query
        );
        handle_request(&client, request, &reply_tx).await;
    }

    log::debug!("Exchange worker thread shutting down");
}

/// Handle a single request
async fn handle_request(
    client: &ExchangeClient,
    request: ExchangeRequest,
    reply_tx: &Sender<ExchangeReply>,
) {
    match client.submit(&request.query).await {
        Ok(payload) => {
            log::debug!("Request {} settled successfully", request.request_id);
            let _ = reply_tx.send(ExchangeReply::Success {
                payload,
                request_id: request.request_id,
            });
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request.request_id, e);
            let _ = reply_tx.send(ExchangeReply::Failure {
                message: e.diagnostic(client.endpoint()),
                request_id: request.request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
