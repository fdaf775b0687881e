pub mod catalog;
pub mod shelves;
pub mod stats;

use std::time::Duration;

use catalog::{LookupCommand, SearchCommand};
use clap::{Parser, Subcommand};
use shelves::ShelvesCommand;
use stats::StatsCommand;

use crate::application::CatalogConfig;
use crate::infrastructure::google_books::GOOGLE_BOOKS_URL;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Reading statistics for a book club read list",
    long_about = None
)]
pub struct Cli {
    /// Google Books compatible volumes endpoint
    #[arg(
        long,
        global = true,
        env = "SHELFSTATS_CATALOG_URL",
        default_value = GOOGLE_BOOKS_URL
    )]
    pub catalog_url: String,

    /// Per-request catalog timeout in seconds (none by default)
    #[arg(long, global = true, env = "SHELFSTATS_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_url.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute reading stats from a read list or user document
    Stats(StatsCommand),

    /// Resolve a single title against the catalog
    Lookup(LookupCommand),

    /// Search the catalog
    Search(SearchCommand),

    /// Count reading lists in a user document
    Shelves(ShelvesCommand),
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
