use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::print_json;
use crate::infrastructure::reading_list_file::load_user_document;

#[derive(Debug, Args)]
pub struct ShelvesCommand {
    /// User document with `readingLists`
    #[arg(long)]
    pub file: PathBuf,
}

pub fn run(command: ShelvesCommand) -> Result<()> {
    let document = load_user_document(&command.file)?;
    print_json(&document.shelf_counts())
}
