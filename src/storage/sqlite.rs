//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use crate::storage::{BusinessRecord, RunRecord, RunStatus};
use crate::EnricherError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const RUN_COLUMNS: &str = "id, query, started_at, finished_at, config_hash, status, \
     pages_fetched, businesses_inserted";

const BUSINESS_COLUMNS: &str = "name, address, phone_number, website, email, site_type";

/// SQLite storage backend
///
/// Holds a single connection for its whole lifetime; the connection is
/// closed when the storage is dropped.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(EnricherError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, EnricherError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, EnricherError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn finish_run(
        &mut self,
        run_id: i64,
        status: RunStatus,
        pages_fetched: u32,
        businesses_inserted: u32,
    ) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        let updated = self.conn.execute(
            "UPDATE runs SET status = ?1, finished_at = ?2, pages_fetched = ?3,
             businesses_inserted = ?4 WHERE id = ?5",
            params![
                status.to_db_string(),
                now,
                pages_fetched,
                businesses_inserted,
                run_id
            ],
        )?;

        if updated == 0 {
            return Err(StorageError::RunNotFound(run_id));
        }
        Ok(())
    }
}

fn run_from_row(row: &Row<'_>) -> rusqlite::Result<RunRecord> {
    Ok(RunRecord {
        id: row.get(0)?,
        query: row.get(1)?,
        started_at: row.get(2)?,
        finished_at: row.get(3)?,
        config_hash: row.get(4)?,
        status: RunStatus::from_db_string(&row.get::<_, String>(5)?).unwrap_or(RunStatus::Failed),
        pages_fetched: row.get(6)?,
        businesses_inserted: row.get(7)?,
    })
}

fn business_from_row(row: &Row<'_>) -> rusqlite::Result<BusinessRecord> {
    Ok(BusinessRecord {
        name: row.get(0)?,
        address: row.get(1)?,
        phone_number: row.get(2)?,
        website: row.get(3)?,
        email: row.get(4)?,
        site_type: row.get(5)?,
    })
}

impl Storage for SqliteStorage {
    // ===== Run Management =====

    fn create_run(&mut self, query: &str, config_hash: &str) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO runs (query, started_at, config_hash, status) VALUES (?1, ?2, ?3, ?4)",
            params![query, now, config_hash, RunStatus::Running.to_db_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_run(&self, run_id: i64) -> StorageResult<RunRecord> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM runs WHERE id = ?1", RUN_COLUMNS),
                params![run_id],
                run_from_row,
            )
            .optional()?
            .ok_or(StorageError::RunNotFound(run_id))
    }

    fn get_latest_run(&self) -> StorageResult<Option<RunRecord>> {
        let run = self
            .conn
            .query_row(
                &format!("SELECT {} FROM runs ORDER BY id DESC LIMIT 1", RUN_COLUMNS),
                [],
                run_from_row,
            )
            .optional()?;
        Ok(run)
    }

    fn complete_run(
        &mut self,
        run_id: i64,
        pages_fetched: u32,
        businesses_inserted: u32,
    ) -> StorageResult<()> {
        self.finish_run(run_id, RunStatus::Completed, pages_fetched, businesses_inserted)
    }

    fn fail_run(
        &mut self,
        run_id: i64,
        pages_fetched: u32,
        businesses_inserted: u32,
    ) -> StorageResult<()> {
        self.finish_run(run_id, RunStatus::Failed, pages_fetched, businesses_inserted)
    }

    // ===== Businesses =====

    fn insert_business(&mut self, record: &BusinessRecord, run_id: i64) -> StorageResult<bool> {
        let now = Utc::now().to_rfc3339();
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO businesses
             (name, address, phone_number, website, email, site_type, discovered_run, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                record.name,
                record.address,
                record.phone_number,
                record.website,
                record.email,
                record.site_type,
                run_id,
                now
            ],
        )?;
        Ok(inserted > 0)
    }

    fn get_business(&self, name: &str) -> StorageResult<Option<BusinessRecord>> {
        let business = self
            .conn
            .query_row(
                &format!("SELECT {} FROM businesses WHERE name = ?1", BUSINESS_COLUMNS),
                params![name],
                business_from_row,
            )
            .optional()?;
        Ok(business)
    }

    fn list_businesses(&self) -> StorageResult<Vec<BusinessRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM businesses ORDER BY id",
            BUSINESS_COLUMNS
        ))?;

        let businesses = stmt
            .query_map([], business_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(businesses)
    }

    // ===== Statistics =====

    fn count_businesses(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM businesses", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_with_email(&self) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM businesses WHERE email != ''",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn count_by_site_type(&self) -> StorageResult<Vec<(String, u64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT site_type, COUNT(*) AS n FROM businesses
             GROUP BY site_type ORDER BY n DESC, site_type",
        )?;

        let counts = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(counts)
    }
}
