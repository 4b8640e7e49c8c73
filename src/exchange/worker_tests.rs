use std::sync::mpsc::channel;
use std::time::Duration;

use super::*;

const RECV_TIMEOUT: Duration = Duration::from_secs(10);

/// Worker wired to an endpoint that refuses connections
fn spawn_refused_worker() -> (
    std::sync::mpsc::Sender<ExchangeRequest>,
    std::sync::mpsc::Receiver<ExchangeReply>,
) {
    let client = ExchangeClient::new("http://127.0.0.1:1/demo".to_string());
    let (request_tx, request_rx) = channel();
    let (reply_tx, reply_rx) = channel();
    spawn_worker(client, request_rx, reply_tx);
    (request_tx, reply_rx)
}

#[test]
fn test_worker_replies_with_failure_on_refused_connection() {
    let (request_tx, reply_rx) = spawn_refused_worker();

    request_tx
        .send(ExchangeRequest {
            query: "hello".to_string(),
            request_id: 1,
        })
        .unwrap();

    let reply = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    match reply {
        ExchangeReply::Failure {
            message,
            request_id,
        } => {
            assert_eq!(request_id, 1);
            assert!(message.contains("Make sure it is running"));
            assert!(message.contains("http://127.0.0.1:1/demo"));
        }
        ExchangeReply::Success { .. } => panic!("expected failure reply"),
    }
}

#[test]
fn test_worker_preserves_request_ids_across_requests() {
    let (request_tx, reply_rx) = spawn_refused_worker();

    for id in [3u64, 7, 12] {
        request_tx
            .send(ExchangeRequest {
                query: "q".to_string(),
                request_id: id,
            })
            .unwrap();
    }

    let mut seen = Vec::new();
    for _ in 0..3 {
        match reply_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
            ExchangeReply::Failure { request_id, .. } => seen.push(request_id),
            ExchangeReply::Success { .. } => panic!("expected failure reply"),
        }
    }

    // Requests are processed in order, one at a time
    assert_eq!(seen, vec![3, 7, 12]);
}

#[test]
fn test_worker_shuts_down_when_request_channel_drops() {
    let (request_tx, reply_rx) = spawn_refused_worker();

    drop(request_tx);

    // Worker loop exits and drops its reply sender
    let err = reply_rx.recv_timeout(RECV_TIMEOUT).unwrap_err();
    assert_eq!(err, std::sync::mpsc::RecvTimeoutError::Disconnected);
}
