//! Places-Enricher main entry point
//!
//! This is the command-line interface for the Places-Enricher business
//! enrichment tool.

use anyhow::Context;
use clap::{Parser, Subcommand};
use places_enricher::config::{load_config_with_hash, Config};
use places_enricher::enrich::{build_http_client, Enricher, HttpFetcher};
use places_enricher::output::{dump, load_statistics, print_statistics, DumpFormat};
use places_enricher::places::PlacesClient;
use places_enricher::storage::open_storage;
use places_enricher::Ingester;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Places-Enricher: business listing enrichment
///
/// Searches the Places directory, scrapes each business website for a
/// contact email and its technology, and stores the results in SQLite.
#[derive(Parser, Debug)]
#[command(name = "places-enricher")]
#[command(version)]
#[command(about = "Enrich business listings with contact emails and site types", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for businesses, enrich them and store the results
    ///
    /// Example:
    ///   places-enricher search --api-key KEY --query "Bookstores in Manchester" --pages 5
    Search {
        /// Places API key
        #[arg(long)]
        api_key: String,

        /// Free-text search query
        #[arg(long)]
        query: String,

        /// Maximum number of result pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// SQLite database path (overrides the configuration file)
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,
    },

    /// Dump stored businesses to dump.csv or dump.sql
    Dump {
        /// Output format: csv or sql
        #[arg(long, default_value = "csv")]
        format: String,

        /// SQLite database path (overrides the configuration file)
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,

        /// Directory to write the dump into (overrides the configuration file)
        #[arg(long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show statistics from the database and exit
    Stats {
        /// SQLite database path (overrides the configuration file)
        #[arg(long, value_name = "PATH")]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) =
        load_config_with_hash(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(path) = &cli.config {
        tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            config_hash
        );
    }

    match cli.command {
        Command::Search {
            api_key,
            query,
            pages,
            database,
        } => {
            let db_path = database_path(&config, database);
            handle_search(&config, &config_hash, &api_key, &query, pages, &db_path).await
        }
        Command::Dump {
            format,
            database,
            output,
        } => {
            let format: DumpFormat = format.parse()?;
            let db_path = database_path(&config, database);
            let directory = output.unwrap_or_else(|| PathBuf::from(&config.output.directory));
            handle_dump(&db_path, format, &directory)
        }
        Command::Stats { database } => handle_stats(&database_path(&config, database)),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("places_enricher=info,warn"),
            1 => EnvFilter::new("places_enricher=debug,info"),
            2 => EnvFilter::new("places_enricher=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn database_path(config: &Config, flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(&config.storage.database_path))
}

/// Handles the search subcommand: runs a full ingestion
async fn handle_search(
    config: &Config,
    config_hash: &str,
    api_key: &str,
    query: &str,
    pages: u32,
    db_path: &Path,
) -> anyhow::Result<()> {
    let storage = open_storage(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let client = build_http_client(&config.http).context("Failed to build HTTP client")?;
    let places = PlacesClient::from_config(client.clone(), &config.places, api_key)?;
    let enricher = Enricher::new(HttpFetcher::new(client));

    let mut ingester = Ingester::new(places, enricher, storage)
        .with_page_delay(Duration::from_millis(config.places.page_delay_ms))
        .with_config_hash(config_hash);

    let summary = ingester
        .run(query, pages)
        .await
        .with_context(|| format!("Search for '{}' failed", query))?;

    tracing::info!(
        "Done: {} businesses seen, {} inserted, {} duplicates, {} details failures, {} scrape failures, {} insert failures",
        summary.businesses_seen,
        summary.inserted,
        summary.duplicates,
        summary.details_failures,
        summary.enrichment_failures,
        summary.insert_failures
    );

    Ok(())
}

/// Handles the dump subcommand: exports the business table
fn handle_dump(db_path: &Path, format: DumpFormat, directory: &Path) -> anyhow::Result<()> {
    let storage = open_storage(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;

    let (path, count) = dump(&storage, format, directory)
        .with_context(|| format!("Failed to write {}", format.file_name()))?;

    println!("Database dumped to {} ({} records)", path.display(), count);
    Ok(())
}

/// Handles the stats subcommand: shows statistics from the database
fn handle_stats(db_path: &Path) -> anyhow::Result<()> {
    println!("Database: {}\n", db_path.display());

    let storage = open_storage(db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    let stats = load_statistics(&storage)?;
    print_statistics(&stats);

    Ok(())
}
