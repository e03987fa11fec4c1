mod common;

use common::{mixed_listing, repo};
use portfolio_page::error::PortfolioError;
use portfolio_page::feed::{
    interpret_response, select_entries, FeedState, RepositoryFeed, MAX_ENTRIES,
    UNKNOWN_ERROR_MESSAGE,
};
use portfolio_page::github::ListingResponse;
use portfolio_page::types::RepositoryEntry;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn response(status: u16, body: &str) -> ListingResponse {
    ListingResponse {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_string(),
    }
}

fn state_for(response: &ListingResponse) -> FeedState {
    let mut feed = RepositoryFeed::new();
    feed.settle(interpret_response(response));
    feed.into_state()
}

fn listing(sources: usize, forks: usize) -> Value {
    let mut items = Vec::new();
    for i in 0..sources {
        items.push(repo(i as u64, &format!("repo-{}", i), false));
    }
    for i in 0..forks {
        items.push(repo(500 + i as u64, &format!("fork-{}", i), true));
    }
    Value::Array(items)
}

#[test]
fn test_ready_length_is_min_of_sources_and_cap() {
    for (sources, forks) in [(0, 0), (3, 2), (9, 0), (9, 5), (10, 1), (40, 40)] {
        let body = listing(sources, forks).to_string();
        let entries = interpret_response(&response(200, &body)).unwrap();

        assert_eq!(entries.len(), sources.min(MAX_ENTRIES), "{} sources, {} forks", sources, forks);
        assert!(entries.iter().all(|e| !e.fork));
    }
}

#[test]
fn test_first_nine_sources_keep_source_order() {
    let body = mixed_listing().to_string();
    let state = state_for(&response(200, &body));

    let names: Vec<&str> = state
        .entries()
        .expect("feed should be ready")
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    let expected: Vec<String> = (0..9).map(|i| format!("repo-{}", i)).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_http_error_uses_message_field() {
    let body = json!({ "message": "API rate limit exceeded for 1.2.3.4." }).to_string();
    let state = state_for(&response(403, &body));

    assert_eq!(
        state.error_message(),
        Some("403 Forbidden - API rate limit exceeded for 1.2.3.4.")
    );
}

#[test]
fn test_http_error_with_unparsable_body_uses_status_text() {
    let state = state_for(&response(502, "<html>bad gateway</html>"));
    assert_eq!(state.error_message(), Some("502 Bad Gateway - Bad Gateway"));
}

#[test]
fn test_http_error_without_message_serializes_body() {
    let state = state_for(&response(404, r#"{"documentation_url":"https://docs.github.com"}"#));
    assert_eq!(
        state.error_message(),
        Some(r#"404 Not Found - {"documentation_url":"https://docs.github.com"}"#)
    );
}

#[test]
fn test_http_error_with_unknown_status_and_unparsable_body() {
    let state = state_for(&response(599, "oops"));
    assert_eq!(state.error_message(), Some(r#"599  - {"message":""}"#));
}

#[test]
fn test_object_body_is_unexpected_shape() {
    let result = interpret_response(&response(200, "{}"));
    assert!(matches!(result, Err(PortfolioError::UnexpectedShape)));

    let state = state_for(&response(200, "{}"));
    assert_eq!(
        state,
        FeedState::Error {
            message: "Unexpected response format from GitHub API".to_string()
        }
    );
}

#[test]
fn test_malformed_json_is_an_error() {
    let result = interpret_response(&response(200, "[{\"id\": 1,"));
    assert!(matches!(result, Err(PortfolioError::Json(_))));

    let state = state_for(&response(200, "[{\"id\": 1,"));
    assert!(!state.error_message().unwrap().is_empty());
}

#[test]
fn test_missing_fork_flag_counts_as_source() {
    let body = json!([{ "id": 1, "name": "solo", "html_url": "https://github.com/x/solo" }]).to_string();
    let entries = interpret_response(&response(200, &body)).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].description, None);
    assert!(!entries[0].fork);
}

#[test]
fn test_empty_error_message_falls_back() {
    let mut feed = RepositoryFeed::new();
    feed.settle(Err(PortfolioError::Unknown(String::new())));

    assert_eq!(feed.state().error_message(), Some(UNKNOWN_ERROR_MESSAGE));
}

#[test]
fn test_feed_starts_loading_and_settles_once() {
    let mut feed = RepositoryFeed::new();
    assert_eq!(feed.state(), &FeedState::Loading);
    assert!(!feed.state().is_terminal());

    let first = vec![RepositoryEntry {
        id: 1,
        name: "pipeline".to_string(),
        description: None,
        html_url: "https://github.com/harishg4/pipeline".to_string(),
        fork: false,
    }];
    assert!(feed.settle(Ok(first.clone())));
    assert!(feed.state().is_terminal());

    assert!(!feed.settle(Err(PortfolioError::UnexpectedShape)));
    assert!(!feed.settle(Ok(Vec::new())));
    assert_eq!(feed.state().entries(), Some(first.as_slice()));
}

#[test]
fn test_error_state_is_also_final() {
    let mut feed = RepositoryFeed::new();
    assert!(feed.settle(Err(PortfolioError::UnexpectedShape)));
    assert!(!feed.settle(Ok(Vec::new())));
    assert!(feed.state().entries().is_none());
}

#[test]
fn test_select_entries_drops_forks_before_capping() {
    let items: Vec<Value> = (0..20u64)
        .map(|i| repo(i, &format!("r{}", i), i % 2 == 0))
        .collect();

    let ids: Vec<u64> = select_entries(items)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 5, 7, 9, 11, 13, 15, 17]);
}

#[test]
fn test_dropped_elements_are_not_decoded() {
    let mut items: Vec<Value> = (0..10u64)
        .map(|i| repo(i, &format!("repo-{}", i), false))
        .collect();
    items.push(json!({ "id": 99, "name": "f", "fork": true }));
    let body = Value::Array(items).to_string();

    let state = state_for(&response(200, &body));
    let entries = state.entries().expect("feed should be ready");
    assert_eq!(entries.len(), 9);
    assert_eq!(entries[8].name, "repo-8");
}

#[test]
fn test_malformed_fork_is_skipped() {
    let body = json!([
        { "id": 1, "name": "forked", "fork": true },
        { "id": 2, "name": "kept", "html_url": "https://github.com/x/kept" }
    ])
    .to_string();

    let entries = interpret_response(&response(200, &body)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 2);
}

#[test]
fn test_null_fork_flag_counts_as_source() {
    let body = json!([
        { "id": 1, "name": "a", "html_url": "u", "fork": null },
        { "id": 2, "name": "b", "html_url": "v", "fork": 0 },
        { "id": 3, "name": "c", "html_url": "w", "fork": 1 }
    ])
    .to_string();

    let entries = interpret_response(&response(200, &body)).unwrap();
    let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(entries.iter().all(|e| !e.fork));
}

#[test]
fn test_http_error_with_object_message() {
    let state = state_for(&response(422, r#"{"message":{"a":1}}"#));
    assert_eq!(
        state.error_message(),
        Some("422 Unprocessable Entity - [object Object]")
    );
}

#[test]
fn test_http_error_with_array_message() {
    let state = state_for(&response(400, r#"{"message":["bad",null,3,true]}"#));
    assert_eq!(state.error_message(), Some("400 Bad Request - bad,,3,true"));
}

#[test]
fn test_whitespace_error_message_is_kept() {
    let mut feed = RepositoryFeed::new();
    feed.settle(Err(PortfolioError::Unknown("  ".to_string())));

    assert_eq!(feed.state().error_message(), Some("  "));
}

#[test]
fn test_feed_state_serialization() {
    let json = serde_json::to_value(FeedState::Error { message: "boom".to_string() }).unwrap();
    assert_eq!(json, json!({ "phase": "error", "message": "boom" }));

    let json = serde_json::to_value(FeedState::Loading).unwrap();
    assert_eq!(json, json!({ "phase": "loading" }));
}
