//! Website enrichment pipeline
//!
//! This module derives a contact email and a technology label for a
//! business website:
//! - Fetching pages over HTTP
//! - Classifying the homepage by technology signatures
//! - Locating the contact page linked from the homepage
//! - Extracting the first email address, with a homepage fallback

mod classifier;
mod contact;
mod email;
mod fetcher;
mod orchestrator;

pub use classifier::{classify, SiteType, SIGNATURES};
pub use contact::{find_contact_link, ContactCandidate};
pub use email::extract_email;
pub use fetcher::{build_http_client, HttpFetcher, PageFetcher};
pub use orchestrator::{Enricher, Enrichment};
