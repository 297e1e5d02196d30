//! Configuration types
//!
//! Deserialized from TOML; every section has defaults.

use serde::Deserialize;

/// Default Places web service endpoint
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Main configuration structure for Places-Enricher
///
/// Every section is optional in the TOML file; missing sections fall back
/// to their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Places web service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesConfig {
    /// Base URL of the Places web service (without trailing slash)
    #[serde(rename = "api-base-url", default = "default_places_base_url")]
    pub api_base_url: String,

    /// Delay between result page requests (milliseconds)
    #[serde(rename = "page-delay-ms", default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_places_base_url(),
            page_delay_ms: default_page_delay_ms(),
        }
    }
}

/// HTTP client configuration used for website fetches
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; unset keeps the client default
    #[serde(rename = "timeout-secs", default)]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path", default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

/// Dump output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory that receives dump.csv / dump.sql
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

fn default_places_base_url() -> String {
    DEFAULT_PLACES_BASE_URL.to_string()
}

fn default_page_delay_ms() -> u64 {
    2000
}

fn default_user_agent() -> String {
    format!("places-enricher/{}", env!("CARGO_PKG_VERSION"))
}

fn default_database_path() -> String {
    "./businesses.db".to_string()
}

fn default_output_directory() -> String {
    ".".to_string()
}
