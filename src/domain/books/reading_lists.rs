use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stubs::BookStub;

/// Name of the reading list that feeds the stats.
pub const READ_LIST: &str = "read";

/// A user's named reading lists ("read", "want-to-read", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingLists(pub BTreeMap<String, Vec<BookStub>>);

impl ReadingLists {
    pub fn read_books(&self) -> &[BookStub] {
        self.0.get(READ_LIST).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn shelf_counts(&self) -> ShelfCounts {
        ShelfCounts {
            books_read: self.read_books().len() as u64,
            bookshelves: self.0.len() as u64,
        }
    }
}

/// Profile counters derived from the reading lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfCounts {
    pub books_read: u64,
    pub bookshelves: u64,
}

/// The slice of a user document that matters here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(default)]
    pub reading_lists: Option<ReadingLists>,
}

impl UserDocument {
    /// Counts are only defined once the user has reading lists at all.
    pub fn shelf_counts(&self) -> Option<ShelfCounts> {
        self.reading_lists.as_ref().map(ReadingLists::shelf_counts)
    }
}

/// Accepted shapes of a stats input: a bare array of stubs, or a user document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ReadingInput {
    Books(Vec<BookStub>),
    Document(UserDocument),
}

impl ReadingInput {
    pub fn into_read_books(self) -> Vec<BookStub> {
        match self {
            Self::Books(books) => books,
            Self::Document(document) => document
                .reading_lists
                .and_then(|mut lists| lists.0.remove(READ_LIST))
                .unwrap_or_default(),
        }
    }
}
