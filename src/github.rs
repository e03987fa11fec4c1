use crate::error::Result;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;
const SORT: &str = "updated";

/// Status line and body of a settled listing request.
#[derive(Debug, Clone)]
pub struct ListingResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ListingResponse {
    /// Reason phrase for the status code, empty when the code has none.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// No request timeout is configured; the transport's own limits apply.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("portfolio-page/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        // join() replaces the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(GitHubClient { client, base_url })
    }

    /// `{base}/users/{handle}/repos?per_page=100&sort=updated`
    pub fn repositories_url(&self, handle: &str) -> Result<Url> {
        let mut url = self.base_url.join(&format!("users/{}/repos", handle))?;
        url.query_pairs_mut()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("sort", SORT);
        Ok(url)
    }

    /// Issues the single listing request. Any status is returned as-is; only
    /// transport failures are errors here.
    pub async fn fetch_user_repositories(&self, handle: &str) -> Result<ListingResponse> {
        let url = self.repositories_url(handle)?;
        debug!(%url, "Requesting repository listing");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(ListingResponse { status, body })
    }
}
