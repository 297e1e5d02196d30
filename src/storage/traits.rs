//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::storage::{BusinessRecord, RunRecord};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Run not found: {0}")]
    RunNotFound(i64),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// This trait defines all database operations needed by the ingestion
/// loop and the dump/stats commands.
pub trait Storage {
    // ===== Run Management =====

    /// Creates a new ingestion run
    ///
    /// # Arguments
    ///
    /// * `query` - The search query being ingested
    /// * `config_hash` - Hash of the configuration in use
    ///
    /// # Returns
    ///
    /// The ID of the newly created run
    fn create_run(&mut self, query: &str, config_hash: &str) -> StorageResult<i64>;

    /// Gets a run by ID
    fn get_run(&self, run_id: i64) -> StorageResult<RunRecord>;

    /// Gets the most recent run
    fn get_latest_run(&self) -> StorageResult<Option<RunRecord>>;

    /// Marks a run as completed with its final counters
    fn complete_run(
        &mut self,
        run_id: i64,
        pages_fetched: u32,
        businesses_inserted: u32,
    ) -> StorageResult<()>;

    /// Marks a run as failed with the counters reached so far
    fn fail_run(
        &mut self,
        run_id: i64,
        pages_fetched: u32,
        businesses_inserted: u32,
    ) -> StorageResult<()>;

    // ===== Businesses =====

    /// Inserts a business unless one with the same name exists
    ///
    /// # Returns
    ///
    /// `true` if a row was inserted, `false` if the name was already stored
    fn insert_business(&mut self, record: &BusinessRecord, run_id: i64) -> StorageResult<bool>;

    /// Gets a business by name
    fn get_business(&self, name: &str) -> StorageResult<Option<BusinessRecord>>;

    /// Lists all businesses in insertion order
    fn list_businesses(&self) -> StorageResult<Vec<BusinessRecord>>;

    // ===== Statistics =====

    /// Counts stored businesses
    fn count_businesses(&self) -> StorageResult<u64>;

    /// Counts businesses with a non-empty email
    fn count_with_email(&self) -> StorageResult<u64>;

    /// Counts businesses per site type, most common first
    fn count_by_site_type(&self) -> StorageResult<Vec<(String, u64)>>;
}
