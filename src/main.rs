use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use shelfstats::infrastructure::google_books::GoogleBooksClient;
use shelfstats::presentation::cli::{Cli, Commands, catalog, shelves, stats};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();
    let config = cli.catalog_config();

    match cli.command {
        Commands::Stats(cmd) => {
            let client = GoogleBooksClient::new(&config)?;
            stats::run(Arc::new(client), cmd).await
        }
        Commands::Lookup(cmd) => {
            let client = GoogleBooksClient::new(&config)?;
            catalog::lookup(&client, cmd).await
        }
        Commands::Search(cmd) => {
            let client = GoogleBooksClient::new(&config)?;
            catalog::search(&client, cmd).await
        }
        Commands::Shelves(cmd) => shelves::run(cmd),
    }
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    // stdout carries command output, so logs go to stderr
    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
