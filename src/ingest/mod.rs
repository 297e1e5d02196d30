//! Ingestion loop
//!
//! This module drives a complete search run:
//! - Paging through search results with a fixed delay between pages
//! - Looking up details and enriching each business
//! - Storing results with insert-or-ignore semantics
//! - Recording the run and its counters

mod pipeline;

pub use pipeline::{IngestSummary, Ingester};
