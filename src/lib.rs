//! Places-Enricher: business listing enrichment
//!
//! This crate pulls business listings from the Places web service and
//! enriches each one with a contact email address and the technology
//! behind its website, storing the results in SQLite.

pub mod config;
pub mod enrich;
pub mod ingest;
pub mod output;
pub mod places;
pub mod storage;

use thiserror::Error;

/// Main error type for Places-Enricher operations
#[derive(Debug, Error)]
pub enum EnricherError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Places API returned {status}: {message}")]
    Places { status: String, message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid format: {0}. Please use 'csv' or 'sql'.")]
    InvalidFormat(String),
}

/// Result type alias for Places-Enricher operations
pub type Result<T> = std::result::Result<T, EnricherError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use enrich::{classify, extract_email, find_contact_link, Enricher, Enrichment, SiteType};
pub use ingest::{IngestSummary, Ingester};
