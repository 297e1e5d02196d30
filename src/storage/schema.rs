//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Places-Enricher database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Track ingestion runs
CREATE TABLE IF NOT EXISTS runs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    query TEXT NOT NULL,
    started_at TEXT NOT NULL,
    finished_at TEXT,
    config_hash TEXT NOT NULL,
    status TEXT NOT NULL,
    pages_fetched INTEGER NOT NULL DEFAULT 0,
    businesses_inserted INTEGER NOT NULL DEFAULT 0
);

-- Enriched businesses, one row per name
CREATE TABLE IF NOT EXISTS businesses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    address TEXT NOT NULL DEFAULT '',
    phone_number TEXT NOT NULL DEFAULT '',
    website TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    site_type TEXT NOT NULL DEFAULT '',
    discovered_run INTEGER REFERENCES runs(id),
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_businesses_site_type ON businesses(site_type);
"#;

/// Initializes the database schema
///
/// Safe to call on every connect; existing tables are left untouched.
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
