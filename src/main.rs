use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::Parser;
use colored::*;
use portfolio_page::cli::{Cli, Commands};
use portfolio_page::feed::{load_repositories, FeedState};
use portfolio_page::github::GitHubClient;
use portfolio_page::profile::Profile;
use portfolio_page::render::{render_page, NO_DESCRIPTION};
use portfolio_page::server::{start_server, AppState};
use portfolio_page::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let profile = Profile::load_or_builtin(cli.profile.as_deref())
        .context("Failed to load profile")?;
    let github = GitHubClient::with_base_url(&cli.api_base_url)
        .context("Failed to create GitHub client")?;

    match cli.command {
        Commands::Render { output } => {
            let feed = load_repositories(&github, &profile.github_handle).await;
            let html = render_page(&profile, &feed, Utc::now().year());

            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Wrote portfolio page");
                    println!("✅ Wrote {}", path.display().to_string().green());
                }
                None => print!("{}", html),
            }
        }
        Commands::Serve { port } => {
            println!("{}", "Portfolio Page Server".bold().yellow());
            println!("{}\n", "=".repeat(50).dimmed());
            println!("👤 Profile: {} (@{})", profile.name, profile.github_handle);

            let state = AppState::new(profile, github);
            start_server(state, port)
                .await
                .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;
        }
        Commands::Repos { json } => {
            let feed = load_repositories(&github, &profile.github_handle).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
            } else {
                print_feed(&profile.github_handle, &feed);
            }

            if matches!(feed, FeedState::Error { .. }) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_feed(handle: &str, feed: &FeedState) {
    match feed {
        FeedState::Loading => println!("{}", "Loading repositories...".dimmed()),
        FeedState::Error { message } => {
            eprintln!("{}", "Failed to load GitHub repositories".red().bold());
            eprintln!("{}", message.red());
        }
        FeedState::Ready { entries } => {
            println!("📦 {} repositories for @{}\n", entries.len(), handle);
            for entry in entries {
                println!("{}", entry.name.bold().yellow());
                println!(
                    "  {}",
                    entry
                        .description
                        .as_deref()
                        .filter(|d| !d.is_empty())
                        .unwrap_or(NO_DESCRIPTION)
                        .dimmed()
                );
                println!("  {}", entry.html_url.cyan());
            }
        }
    }
}
