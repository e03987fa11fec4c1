//! Personal portfolio page with a live "GitHub Projects" section.
//!
//! Each page view issues one request to the GitHub repository listing
//! endpoint; the outcome settles a [`feed::RepositoryFeed`] exactly once and
//! the page is rendered from the resulting [`feed::FeedState`].

pub mod cli;
pub mod error;
pub mod feed;
pub mod github;
pub mod profile;
pub mod render;
pub mod server;
pub mod telemetry;
pub mod types;
