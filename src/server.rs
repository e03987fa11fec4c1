use crate::feed::load_repositories;
use crate::github::GitHubClient;
use crate::profile::Profile;
use crate::render::render_page;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub github_handle: String,
}

/// Liveness probe response (minimal, just indicates the process is running)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Shared, read-only state for every page view
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    pub github: GitHubClient,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(profile: Profile, github: GitHubClient) -> Self {
        Self {
            profile: Arc::new(profile),
            github,
            start_time: Instant::now(),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(portfolio_page))
        .route("/index.html", get(portfolio_page))
        .route("/healthz", get(health_check))
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the portfolio HTTP server
pub async fn start_server(
    app_state: AppState,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(app_state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Portfolio server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Each view issues its own single listing request. Feed failures render as
/// an error panel, never as a failed response.
async fn portfolio_page(State(state): State<AppState>) -> impl IntoResponse {
    let feed = load_repositories(&state.github, &state.profile.github_handle).await;
    Html(render_page(&state.profile, &feed, Utc::now().year()))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        github_handle: state.profile.github_handle.clone(),
    })
}

async fn liveness_check() -> impl IntoResponse {
    Json(LivenessResponse {
        status: "alive".to_string(),
    })
}
