use ratatui::style::Color;
use serde_json::json;

use super::*;

#[test]
fn test_title_idle() {
    let line = title_line(&ExchangeResult::Idle);
    assert_eq!(line.to_string(), " Response ");
}

#[test]
fn test_title_pending() {
    let line = title_line(&ExchangeResult::Pending);
    assert!(line.to_string().contains("waiting"));
}

#[test]
fn test_title_success_echoes_query_field() {
    let line = title_line(&ExchangeResult::Success(
        json!({"query": "hello", "answer": "hi"}),
    ));
    assert!(line.to_string().contains("query: hello"));
}

#[test]
fn test_title_success_without_query_field() {
    let line = title_line(&ExchangeResult::Success(json!({"answer": "hi"})));
    assert_eq!(line.to_string(), " Response ");
}

#[test]
fn test_title_success_with_non_string_query_field() {
    // A non-string "query" is treated the same as a missing one
    let line = title_line(&ExchangeResult::Success(json!({"query": 42})));
    assert_eq!(line.to_string(), " Response ");
}

#[test]
fn test_title_failure_is_red() {
    let line = title_line(&ExchangeResult::Failure("boom".to_string()));
    assert!(line.to_string().contains("Request Failed"));
    assert_eq!(line.spans[0].style.fg, Some(Color::Red));
}
