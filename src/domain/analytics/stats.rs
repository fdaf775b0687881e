use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::books::stubs::EnrichedBook;

/// Number of genres reported in `top_genres`.
pub const TOP_GENRE_LIMIT: usize = 3;

/// Reading statistics over a user's read list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_books_read: u64,
    pub total_pages_read: u64,
    /// Rounded mean page count; 0 when nothing has been read.
    pub average_book_length: u64,
    /// Most frequent genres, most common first. Ties keep first-seen order.
    pub top_genres: Vec<String>,
}

/// A summary plus the context it was computed in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: StatsSummary,
    pub computed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<EnrichedBook>>,
}

pub fn summarize(books: &[EnrichedBook]) -> StatsSummary {
    let total_pages_read = total_pages(books);
    StatsSummary {
        total_books_read: books.len() as u64,
        total_pages_read,
        average_book_length: rounded_average(total_pages_read, books.len() as u64),
        top_genres: top_genres(books, TOP_GENRE_LIMIT),
    }
}

/// Sum of page counts, saturating at `u64::MAX`.
pub fn total_pages(books: &[EnrichedBook]) -> u64 {
    books
        .iter()
        .map(EnrichedBook::pages)
        .fold(0, u64::saturating_add)
}

/// Mean rounded half up, with an empty set averaging to 0.
pub fn rounded_average(total: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    let quotient = total / count;
    let remainder = total % count;
    // remainder / count >= 1/2, written so nothing overflows
    if remainder >= count - remainder {
        quotient + 1
    } else {
        quotient
    }
}

/// Rank genres by how many books carry them and keep the first `limit`.
pub fn top_genres(books: &[EnrichedBook], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for book in books {
        let genre = book.genre();
        match positions.get(genre).copied() {
            Some(index) => counts[index].1 += 1,
            None => {
                positions.insert(genre, counts.len());
                counts.push((genre, 1));
            }
        }
    }

    // Stable sort, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(limit)
        .map(|(genre, _)| genre.to_string())
        .collect()
}
