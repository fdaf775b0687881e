use std::time::Duration;

use thiserror::Error;

/// Failure talking to the external book catalog.
///
/// Lookups absorb these into [`LookupOutcome::Failed`](crate::domain::catalog::LookupOutcome);
/// free-text search hands them back to the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog returned status {status}")]
    Status { status: u16 },
    #[error("failed to decode catalog response: {0}")]
    Decode(String),
    #[error("invalid catalog url: {0}")]
    InvalidUrl(String),
}

impl CatalogError {
    pub fn transport(err: impl ToString) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl ToString) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats computation exceeded deadline of {}ms", .0.as_millis())]
    DeadlineExceeded(Duration),
}
