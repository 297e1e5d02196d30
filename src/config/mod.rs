//! Configuration module for Places-Enricher
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section has defaults, so running without a file
//! is valid.
//!
//! # Example
//!
//! ```no_run
//! use places_enricher::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("enricher.toml")).unwrap();
//! println!("Pages are requested every {}ms", config.places.page_delay_ms);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{
    Config, HttpConfig, OutputConfig, PlacesConfig, StorageConfig, DEFAULT_PLACES_BASE_URL,
};

pub use parser::{compute_config_hash, load_config, load_config_with_hash, DEFAULT_CONFIG_HASH};
pub use validation::validate;
