use std::fmt::Write;

use crate::domain::stats::StatsSummary;

/// Format a page count for display.
pub fn format_pages(pages: u64) -> String {
    if pages == 1 {
        "1 page".to_string()
    } else {
        format!("{pages} pages")
    }
}

/// Render a summary as the plain-text reading stats card.
pub fn format_summary(summary: &StatsSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Books Read: {}", summary.total_books_read);
    let _ = writeln!(out, "Total Pages Read: {}", summary.total_pages_read);
    let _ = writeln!(
        out,
        "Average Book Length: {}",
        format_pages(summary.average_book_length)
    );
    out.push_str("Top Genres:\n");

    if summary.top_genres.is_empty() {
        out.push_str("  No genres found\n");
    } else {
        for (index, genre) in summary.top_genres.iter().enumerate() {
            let _ = writeln!(out, "  {}. {genre}", index + 1);
        }
    }

    out
}
