use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::domain::books::stubs::{BookStub, EnrichedBook};
use crate::domain::catalog::{CatalogLookup, LookupOutcome};
use crate::domain::errors::StatsError;
use crate::domain::stats::{StatsReport, StatsSummary, summarize};

/// Computes reading statistics over a read list, enriching each book from the catalog.
#[derive(Clone)]
pub struct StatsService {
    catalog: Arc<dyn CatalogLookup>,
}

impl StatsService {
    pub fn new(catalog: Arc<dyn CatalogLookup>) -> Self {
        Self { catalog }
    }

    /// Look up every book concurrently and merge each result into its stub.
    ///
    /// Waits for all lookups to settle. The output is aligned with the input by
    /// position, whatever order the lookups complete in.
    pub async fn enrich(&self, read_books: Vec<BookStub>) -> Vec<EnrichedBook> {
        let outcomes = join_all(
            read_books
                .iter()
                .map(|book| self.catalog.lookup(&book.title)),
        )
        .await;

        let failed = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, LookupOutcome::Failed(_)))
            .count();
        let matched = outcomes.iter().filter(|outcome| outcome.is_found()).count();
        debug!(
            books = read_books.len(),
            matched, failed, "catalog enrichment finished"
        );

        read_books
            .into_iter()
            .zip(outcomes)
            .map(|(stub, outcome)| EnrichedBook::new(stub, outcome.into_volume().as_ref()))
            .collect()
    }

    pub async fn compute_stats(&self, read_books: Vec<BookStub>) -> StatsSummary {
        let (_, summary) = self.enrich_and_summarize(read_books).await;
        summary
    }

    /// Same as [`compute_stats`](Self::compute_stats), but gives up once
    /// `deadline` elapses. Outstanding lookups are dropped.
    pub async fn compute_stats_with_deadline(
        &self,
        read_books: Vec<BookStub>,
        deadline: Duration,
    ) -> Result<StatsSummary, StatsError> {
        within_deadline(deadline, self.compute_stats(read_books)).await
    }

    /// Compute a summary stamped with its computation time, optionally
    /// including the enriched books it was derived from.
    pub async fn compute_report(
        &self,
        read_books: Vec<BookStub>,
        include_books: bool,
    ) -> StatsReport {
        let (books, stats) = self.enrich_and_summarize(read_books).await;

        StatsReport {
            stats,
            computed_at: chrono::Utc::now().to_rfc3339(),
            books: include_books.then_some(books),
        }
    }

    pub async fn compute_report_with_deadline(
        &self,
        read_books: Vec<BookStub>,
        include_books: bool,
        deadline: Duration,
    ) -> Result<StatsReport, StatsError> {
        within_deadline(deadline, self.compute_report(read_books, include_books)).await
    }

    async fn enrich_and_summarize(
        &self,
        read_books: Vec<BookStub>,
    ) -> (Vec<EnrichedBook>, StatsSummary) {
        let start = Instant::now();

        let books = self.enrich(read_books).await;
        let summary = summarize(&books);

        info!(
            duration_ms = start.elapsed().as_millis(),
            books = summary.total_books_read,
            pages = summary.total_pages_read,
            "stats computed"
        );
        (books, summary)
    }
}

async fn within_deadline<T>(
    deadline: Duration,
    work: impl Future<Output = T>,
) -> Result<T, StatsError> {
    tokio::time::timeout(deadline, work).await.map_err(|_| {
        warn!(
            deadline_ms = deadline.as_millis(),
            "stats computation timed out"
        );
        StatsError::DeadlineExceeded(deadline)
    })
}
