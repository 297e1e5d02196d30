//! Places directory collaborator
//!
//! This module provides the business search used by the ingestion loop:
//! - Text search with continuation tokens
//! - Place details lookup (website, phone number)

mod client;
mod types;

pub use client::PlacesClient;
pub use types::{PlaceDetails, PlaceSummary, SearchPage};

use crate::EnricherError;
use async_trait::async_trait;

/// Source of business listings
#[async_trait]
pub trait PlacesSearch: Send + Sync {
    /// Requests one page of results for `query`
    ///
    /// The first page is requested without a token; later pages pass the
    /// token returned by the previous page.
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, EnricherError>;

    /// Looks up the website and phone number of a place
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, EnricherError>;
}
