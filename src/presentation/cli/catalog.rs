use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::domain::catalog::{CatalogLookup, LookupOutcome};
use crate::infrastructure::google_books::GoogleBooksClient;

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[arg(long)]
    pub title: String,
}

/// Print the first catalog match for a title, or `null` when there is none.
pub async fn lookup(client: &GoogleBooksClient, command: LookupCommand) -> Result<()> {
    match client.lookup(&command.title).await {
        LookupOutcome::Found(volume) => print_json(&volume),
        LookupOutcome::NoMatch => print_json(&serde_json::Value::Null),
        LookupOutcome::Failed(err) => Err(err.into()),
    }
}

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Title, author or ISBN
    #[arg(long)]
    pub query: String,
}

pub async fn search(client: &GoogleBooksClient, command: SearchCommand) -> Result<()> {
    let hits = client.search(&command.query).await?;
    print_json(&hits)
}
