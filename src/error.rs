use thiserror::Error;

pub const UNEXPECTED_SHAPE_MESSAGE: &str = "Unexpected response format from GitHub API";

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer from the listing endpoint.
    #[error("{status} {status_text} - {detail}")]
    Http {
        status: u16,
        status_text: String,
        detail: String,
    },

    #[error("{}", UNEXPECTED_SHAPE_MESSAGE)]
    UnexpectedShape,

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Unknown(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
