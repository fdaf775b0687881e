use std::time::Duration;

use crate::infrastructure::google_books::GOOGLE_BOOKS_URL;

/// Where and how to reach the book catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Per-request timeout. `None` leaves it to the HTTP client's defaults.
    pub request_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_BOOKS_URL.to_string(),
            request_timeout: None,
        }
    }
}
