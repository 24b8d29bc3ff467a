//! Terminal client for the URL shortening backend.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin shortener -- shorten https://example.com/some/long/path
//!
//! # Look up a key, or a full short URL
//! cargo run --bin shortener -- fetch abc123
//! cargo run --bin shortener -- fetch http://s.example.com/abc123
//!
//! # Delete a short link (asks for confirmation unless --yes)
//! cargo run --bin shortener -- delete abc123
//!
//! # Follow a short link once and print where it leads
//! cargo run --bin shortener -- open abc123
//!
//! # Show the canonical key for some input
//! cargo run --bin shortener -- normalize "  http://s.example.com/abc123 "
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_BACKEND_URL` (required unless `--backend` is given)
//! - `SHORTENER_PUBLIC_URL`, `HTTP_TIMEOUT_SECONDS` - see the `config` module
//! - `RUST_LOG` - Log level (default: `warn`)

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

use url_shortener_client::application::services::{
    RedirectResolver, ShortenerSession, Submission,
};
use url_shortener_client::config::Config;
use url_shortener_client::domain::entities::RequestState;
use url_shortener_client::error::ClientError;
use url_shortener_client::infrastructure::http::HttpBackend;
use url_shortener_client::infrastructure::navigation::TerminalNavigator;
use url_shortener_client::logging;
use url_shortener_client::utils::key_normalizer::KeyNormalizer;

/// Command-line client for the URL shortener.
#[derive(Parser)]
#[command(name = "shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL, overrides SHORTENER_BACKEND_URL
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Client commands.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// The URL to shorten
        url: String,
    },

    /// Resolve a short key or short URL to the original URL
    Fetch {
        /// Short key or full short URL
        key: String,
    },

    /// Delete a short link
    Delete {
        /// Short key or full short URL
        key: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Follow a short link once and print the navigation target
    Open {
        /// Short key as it appears in the link path
        key: String,
    },

    /// Print the canonical key for an input
    Normalize {
        /// Bare key, short URL or pasted text
        input: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    logging::init_with(&log_level, &log_format)?;

    let config = load_config(cli.backend.as_deref())?;

    let backend =
        Arc::new(HttpBackend::from_config(&config).context("Failed to create backend client")?);
    let normalizer = KeyNormalizer::new(&config.public_url);

    let succeeded = match cli.command {
        Commands::Shorten { url } => {
            let session = ShortenerSession::new(backend, normalizer);
            handle_shorten(&session, &url).await
        }
        Commands::Fetch { key } => {
            let session = ShortenerSession::new(backend, normalizer);
            handle_fetch(&session, &key).await
        }
        Commands::Delete { key, yes } => {
            let session = ShortenerSession::new(backend, normalizer);
            handle_delete(&session, &key, yes).await?
        }
        Commands::Open { key } => {
            let resolver = RedirectResolver::new(backend, normalizer, config.home_route.clone());
            handle_open(&resolver, &key).await
        }
        Commands::Normalize { input } => handle_normalize(&normalizer, &input),
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads configuration from the environment, applying `--backend`.
fn load_config(backend_override: Option<&str>) -> Result<Config> {
    let config = Config::from_env_with_backend(backend_override)?;
    config.validate()?;
    Ok(config)
}

async fn handle_shorten(session: &ShortenerSession<HttpBackend>, url: &str) -> bool {
    session.edit_long_url(url);
    let submission = session.submit_shorten_input().await;

    report(&submission, |result| {
        println!("{}", "✓ URL shortened".green().bold());
        println!("  Shortened URL: {}", result.short_url.cyan().bold());
        println!("  Key:           {}", result.key.to_string().bright_black());
    })
}

async fn handle_fetch(session: &ShortenerSession<HttpBackend>, key: &str) -> bool {
    let key = session.edit_key(key);
    if !key.is_empty() {
        println!("{} {}", "Key:".bright_black(), key);
    }

    let submission = session.submit_fetch_input().await;

    report(&submission, |result| {
        println!("  Original URL: {}", result.long_url.cyan().bold());
    })
}

async fn handle_delete(
    session: &ShortenerSession<HttpBackend>,
    key: &str,
    skip_confirm: bool,
) -> Result<bool> {
    let key = session.edit_key(key);

    if !key.is_empty() && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete short link '{}'?", key))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(true);
        }
    }

    let submission = session.submit_delete_input().await;

    Ok(report(&submission, |result| {
        println!(
            "{} {}",
            "✓ Deleted short link".green().bold(),
            result.key.to_string().yellow()
        );
    }))
}

async fn handle_open(resolver: &RedirectResolver<HttpBackend>, key: &str) -> bool {
    let navigator = TerminalNavigator::new();

    resolver
        .activate(key)
        .run(&navigator)
        .await
        .is_some_and(|navigation| navigation.is_external())
}

fn handle_normalize(normalizer: &KeyNormalizer, input: &str) -> bool {
    let key = normalizer.normalize(input);

    if key.is_empty() {
        eprintln!("{}", "✗ Input does not contain a short key".red());
        return false;
    }

    println!("{}", key);
    true
}

/// Prints the terminal state of a submission. Returns `true` on success.
fn report<T>(submission: &Submission<T>, on_success: impl FnOnce(&T)) -> bool {
    match submission.state() {
        Some(RequestState::Succeeded(payload)) => {
            on_success(payload);
            true
        }
        Some(RequestState::Failed(error)) => {
            print_failure(error);
            false
        }
        _ => {
            eprintln!("{}", "✗ Request did not complete".red());
            false
        }
    }
}

fn print_failure(error: &ClientError) {
    eprintln!("{} {}", "✗".red().bold(), error.kind().user_message().red());
    eprintln!("  {}", error.to_string().bright_black());
}
