//! # Newswire
//!
//! A terminal client for a news aggregation service. Fetches top headlines
//! from a chosen source, lists the sources the service knows about, and
//! searches articles across all of them.
//!
//! ## Usage
//!
//! ```sh
//! newswire fetch bbc-news --limit 10
//! newswire sources --category technology
//! newswire search "lithium mining"
//! newswire              # prints help
//! ```
//!
//! ## Architecture
//!
//! Each invocation handles exactly one command: parse arguments, issue one
//! HTTP GET against the service, then either render the response or report
//! the failure. Every failure path clears the status line, prints exactly
//! one message to stderr, and exits with a non-zero status code.
//!
//! The API key is read from `API_KEY` at startup (with a built-in default)
//! and injected into the gateway; see [`config`].

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod config;
mod error;
mod models;
mod progress;
mod render;

use api::NewsApi;
use cli::{Cli, Commands};
use config::AppConfig;
use error::Result;
use progress::Status;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    // No subcommand: print usage and exit cleanly without touching the network.
    let Some(command) = args.command else {
        let _ = Cli::command().print_long_help();
        return ExitCode::SUCCESS;
    };

    let config = AppConfig::from_env();
    debug!(endpoint = %config.endpoint, "configuration loaded");

    match run(command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Dispatch one parsed command: start the status line, await the single
/// request, clear the status line, then render. Errors propagate to `main`,
/// which reports them on stderr.
async fn run(command: Commands, config: &AppConfig) -> Result<()> {
    let api = NewsApi::new(config)?;

    match command {
        Commands::Fetch { source, limit } => {
            let mut status = Status::start(&format!("Fetching top headlines from {source}..."));
            let articles = api.top_headlines(&source, limit).await;
            status.finish();
            print!("{}", render::article_list(&articles?));
        }
        Commands::Sources { category } => {
            let mut status = Status::start("Fetching sources...");
            let sources = api.sources(category).await;
            status.finish();
            print!("{}", render::source_list(&sources?));
        }
        Commands::Search { term } => {
            let mut status = Status::start(&format!("Searching articles for \"{term}\"..."));
            let articles = api.search(&term).await;
            status.finish();
            print!("{}", render::article_list(&articles?));
        }
    }

    Ok(())
}
