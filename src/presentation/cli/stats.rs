use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::print_json;
use crate::application::StatsService;
use crate::domain::catalog::CatalogLookup;
use crate::domain::formatting::format_summary;
use crate::infrastructure::reading_list_file::load_read_books;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// JSON array of books, or a user document with `readingLists.read`
    #[arg(long)]
    pub file: PathBuf,
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
    /// Include the enriched books in JSON output
    #[arg(long)]
    pub include_books: bool,
    /// Abort if stats take longer than this many seconds
    #[arg(long)]
    pub deadline_secs: Option<u64>,
}

pub async fn run(catalog: Arc<dyn CatalogLookup>, command: StatsCommand) -> Result<()> {
    let read_books = load_read_books(&command.file)?;
    let service = StatsService::new(catalog);

    let report = match command.deadline_secs {
        Some(secs) => {
            service
                .compute_report_with_deadline(
                    read_books,
                    command.include_books,
                    Duration::from_secs(secs),
                )
                .await?
        }
        None => {
            service
                .compute_report(read_books, command.include_books)
                .await
        }
    };

    match command.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            print!("{}", format_summary(&report.stats));
            Ok(())
        }
    }
}
