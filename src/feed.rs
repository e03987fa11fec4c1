use crate::error::{PortfolioError, Result};
use crate::github::{GitHubClient, ListingResponse};
use crate::types::{is_truthy, RepositoryEntry};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

/// Cards shown on the page after forks are removed.
pub const MAX_ENTRIES: usize = 9;
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error fetching repositories";

/// Lifecycle of one page view's repository listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FeedState {
    Loading,
    Error { message: String },
    Ready { entries: Vec<RepositoryEntry> },
}

impl FeedState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FeedState::Loading)
    }

    pub fn entries(&self) -> Option<&[RepositoryEntry]> {
        match self {
            FeedState::Ready { entries } => Some(entries),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn from_error(err: &PortfolioError) -> Self {
        let message = err.to_string();
        let message = if message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        FeedState::Error { message }
    }
}

/// Drops forks and keeps the first [`MAX_ENTRIES`] in source order. Only the
/// kept elements are decoded, so a dropped element is never inspected beyond
/// its `fork` flag.
pub fn select_entries(items: Vec<Value>) -> Result<Vec<RepositoryEntry>> {
    let entries = items
        .into_iter()
        .filter(|item| !item.get("fork").map_or(false, is_truthy))
        .take(MAX_ENTRIES)
        .map(serde_json::from_value)
        .collect::<serde_json::Result<Vec<RepositoryEntry>>>()?;
    Ok(entries)
}

/// Turns a settled listing response into the entries to display.
pub fn interpret_response(response: &ListingResponse) -> Result<Vec<RepositoryEntry>> {
    if !response.status.is_success() {
        return Err(http_error(response));
    }

    let value: Value = serde_json::from_str(&response.body)?;
    let Value::Array(items) = value else {
        return Err(PortfolioError::UnexpectedShape);
    };

    select_entries(items)
}

fn http_error(response: &ListingResponse) -> PortfolioError {
    let status_text = response.status_text();
    let body = serde_json::from_str::<Value>(&response.body)
        .unwrap_or_else(|_| json!({ "message": status_text }));

    let detail = match body.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(message) if is_truthy(message) => js_string(message),
        _ => body.to_string(),
    };

    PortfolioError::Http {
        status: response.status.as_u16(),
        status_text: status_text.to_string(),
        detail,
    }
}

/// String conversion as a browser would apply it when the message is
/// interpolated: objects collapse to `[object Object]`, arrays join with `,`.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(js_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Holds the feed for a single page view and accepts exactly one settlement.
#[derive(Debug)]
pub struct RepositoryFeed {
    state: FeedState,
}

impl Default for RepositoryFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Loading,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn into_state(self) -> FeedState {
        self.state
    }

    /// Records the outcome of the request. Returns `false` and leaves the
    /// state untouched if the feed already settled.
    pub fn settle(&mut self, outcome: Result<Vec<RepositoryEntry>>) -> bool {
        if self.state.is_terminal() {
            warn!("Repository feed already settled, ignoring late result");
            return false;
        }

        self.state = match outcome {
            Ok(entries) => {
                info!(count = entries.len(), "Loaded GitHub repositories");
                FeedState::Ready { entries }
            }
            Err(e) => {
                let state = FeedState::from_error(&e);
                error!(error = ?e, message = state.error_message().unwrap_or_default(), "Failed to load GitHub repos");
                state
            }
        };
        true
    }

    /// Issues the listing request for `handle` and settles the feed with it.
    /// A feed that already settled does not issue another request.
    pub async fn load(&mut self, client: &GitHubClient, handle: &str) -> &FeedState {
        if self.state.is_terminal() {
            return &self.state;
        }

        let outcome = match client.fetch_user_repositories(handle).await {
            Ok(response) => interpret_response(&response),
            Err(e) => Err(e),
        };
        self.settle(outcome);
        &self.state
    }
}

/// One-shot fetch for a fresh page view.
pub async fn load_repositories(client: &GitHubClient, handle: &str) -> FeedState {
    let mut feed = RepositoryFeed::new();
    feed.load(client, handle).await;
    feed.into_state()
}
