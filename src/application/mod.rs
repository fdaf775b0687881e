pub mod config;
pub mod services;

pub use config::CatalogConfig;
pub use services::StatsService;
