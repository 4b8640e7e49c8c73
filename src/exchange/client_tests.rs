use super::*;

#[test]
fn test_default_endpoint() {
    assert_eq!(DEFAULT_ENDPOINT, "http://localhost:8000/demo");
}

#[test]
fn test_client_keeps_endpoint() {
    let client = ExchangeClient::new("http://127.0.0.1:9000/demo".to_string());
    assert_eq!(client.endpoint(), "http://127.0.0.1:9000/demo");
}

#[tokio::test]
async fn test_submit_connection_refused_is_network_error() {
    // Port 1 is never serving HTTP on loopback
    let client = ExchangeClient::new("http://127.0.0.1:1/demo".to_string());

    let result = client.submit("hello").await;
    assert!(matches!(result, Err(ExchangeError::Network(_))));
}

#[tokio::test]
async fn test_submit_connection_refused_diagnostic() {
    let client = ExchangeClient::new("http://127.0.0.1:1/demo".to_string());

    let err = client.submit("hello").await.unwrap_err();
    let diag = err.diagnostic(client.endpoint());
    assert!(diag.contains("Make sure it is running"));
    assert!(diag.contains("http://127.0.0.1:1/demo"));
}
