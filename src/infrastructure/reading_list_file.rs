use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::books::reading_lists::{ReadingInput, UserDocument};
use crate::domain::books::stubs::BookStub;

/// Read the books to summarize from a JSON file holding either an array of
/// book stubs or a user document with reading lists.
pub fn load_read_books(path: &Path) -> Result<Vec<BookStub>> {
    let contents = read(path)?;
    let input: ReadingInput = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a book list or user document", path.display()))?;
    Ok(input.into_read_books())
}

pub fn load_user_document(path: &Path) -> Result<UserDocument> {
    let contents = read(path)?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a user document", path.display()))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
