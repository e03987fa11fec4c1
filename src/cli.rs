use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-page")]
#[command(about = "Portfolio page renderer - Builds a personal portfolio page with live GitHub projects")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// JSON profile replacing the built-in page content
    #[arg(long, global = true, env = "PORTFOLIO_PROFILE")]
    pub profile: Option<PathBuf>,

    /// GitHub REST API base URL
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub api_base_url: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, env = "PORTFOLIO_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch repositories once and write the rendered page
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the page, fetching repositories on every view
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Fetch repositories once and print the feed
    Repos {
        /// Print the feed state as JSON
        #[arg(long)]
        json: bool,
    },
}
