#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Canned answer served by the stub listing endpoint.
#[derive(Clone)]
pub struct StubResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    response: StubResponse,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Local stand-in for `GET /users/{handle}/repos`.
pub struct StubGitHub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubGitHub {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> anyhow::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            response: StubResponse {
                status,
                body: body.into(),
            },
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/users/:handle/repos", get(list_repos))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(StubGitHub {
            base_url: format!("http://{}", addr),
            requests,
        })
    }

    /// Path and query of every request received so far.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

async fn list_repos(
    State(state): State<StubState>,
    Path(_handle): Path<String>,
    uri: Uri,
) -> impl IntoResponse {
    state.requests.lock().await.push(uri.to_string());
    (
        state.response.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
}

pub fn repo(id: u64, name: &str, fork: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("harishg4/{}", name),
        "description": format!("{} description", name),
        "html_url": format!("https://github.com/harishg4/{}", name),
        "fork": fork,
        "stargazers_count": 3,
    })
}

/// 12 sources and 3 forks, forks at positions 1, 5 and 9.
pub fn mixed_listing() -> Value {
    let mut items = Vec::new();
    let mut next_source = 0;
    for position in 0..15u64 {
        if [1, 5, 9].contains(&position) {
            items.push(repo(1000 + position, &format!("fork-{}", position), true));
        } else {
            items.push(repo(position, &format!("repo-{}", next_source), false));
            next_source += 1;
        }
    }
    Value::Array(items)
}

/// An address nothing listens on.
pub fn closed_port_url() -> anyhow::Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
