//! Statistics generation from the business database
//!
//! This module provides functionality for extracting and displaying
//! enrichment statistics from the storage layer.

use crate::storage::{RunRecord, Storage};
use crate::EnricherError;

/// Enrichment statistics summary
#[derive(Debug, Clone)]
pub struct EnrichmentStatistics {
    /// Total number of stored businesses
    pub total_businesses: u64,

    /// Businesses with an extracted email
    pub with_email: u64,

    /// Count of businesses by site type, most common first
    pub by_site_type: Vec<(String, u64)>,

    /// Most recent ingestion run
    pub latest_run: Option<RunRecord>,
}

impl EnrichmentStatistics {
    /// Share of businesses with an email, as a percentage
    pub fn email_coverage(&self) -> f64 {
        if self.total_businesses == 0 {
            0.0
        } else {
            self.with_email as f64 * 100.0 / self.total_businesses as f64
        }
    }
}

/// Loads statistics from storage
///
/// # Arguments
///
/// * `storage` - The storage backend to query
///
/// # Returns
///
/// * `Ok(EnrichmentStatistics)` - Successfully loaded statistics
/// * `Err(EnricherError)` - Failed to query statistics
pub fn load_statistics(storage: &dyn Storage) -> Result<EnrichmentStatistics, EnricherError> {
    Ok(EnrichmentStatistics {
        total_businesses: storage.count_businesses()?,
        with_email: storage.count_with_email()?,
        by_site_type: storage.count_by_site_type()?,
        latest_run: storage.get_latest_run()?,
    })
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &EnrichmentStatistics) {
    println!("=== Enrichment Statistics ===\n");

    println!("Total businesses: {}", stats.total_businesses);
    println!(
        "With email: {} ({:.1}%)",
        stats.with_email,
        stats.email_coverage()
    );

    if !stats.by_site_type.is_empty() {
        println!("\nSite types:");
        for (site_type, count) in &stats.by_site_type {
            let label = if site_type.is_empty() {
                "(not scraped)"
            } else {
                site_type.as_str()
            };
            println!("  {:<14} {}", label, count);
        }
    }

    if let Some(run) = &stats.latest_run {
        println!("\nLatest run:");
        println!("  ID: {}", run.id);
        println!("  Query: {}", run.query);
        println!("  Status: {}", run.status.to_db_string());
        println!("  Started: {}", run.started_at);
        if let Some(finished) = &run.finished_at {
            println!("  Finished: {}", finished);
        }
        println!("  Pages fetched: {}", run.pages_fetched);
        println!("  Businesses inserted: {}", run.businesses_inserted);
    }
}
