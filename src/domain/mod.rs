pub mod analytics;
pub mod books;
pub mod catalog;
pub mod errors;
pub mod formatting;

// Re-exports
pub use analytics::stats;
pub use books::{reading_lists, stubs};
pub use errors::{CatalogError, StatsError};
