//! Output module for exporting stored businesses
//!
//! This module handles:
//! - Dumping the business table as CSV or SQL
//! - Loading and printing summary statistics

mod csv;
mod sql;
pub mod stats;

pub use self::csv::{write_csv, CSV_HEADER};
pub use self::sql::{escape_sql_literal, write_sql};
pub use stats::{load_statistics, print_statistics, EnrichmentStatistics};

use crate::storage::Storage;
use crate::{ConfigError, EnricherError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported dump formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Csv,
    Sql,
}

impl DumpFormat {
    /// Name of the file written for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Csv => "dump.csv",
            Self::Sql => "dump.sql",
        }
    }
}

impl FromStr for DumpFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "sql" => Ok(Self::Sql),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Writes every stored business to `dump.csv` or `dump.sql` in `directory`
///
/// Records are loaded before the file is created, so a storage failure
/// leaves no partial file behind.
///
/// # Returns
///
/// * `Ok((PathBuf, usize))` - Path of the written file and number of records
/// * `Err(EnricherError)` - Failed to read storage or write the file
pub fn dump(
    storage: &dyn Storage,
    format: DumpFormat,
    directory: &Path,
) -> Result<(PathBuf, usize), EnricherError> {
    let records = storage.list_businesses()?;

    std::fs::create_dir_all(directory)?;
    let path = directory.join(format.file_name());
    let mut writer = BufWriter::new(File::create(&path)?);

    match format {
        DumpFormat::Csv => write_csv(&mut writer, &records)?,
        DumpFormat::Sql => write_sql(&mut writer, &records)?,
    }
    writer.flush()?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok((path, records.len()))
}
