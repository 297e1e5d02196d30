//! Places data types and wire formats

use serde::Deserialize;

/// One business from a text search results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceSummary {
    pub name: String,
    pub formatted_address: String,
    pub place_id: String,
}

/// Extended details for a single place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceDetails {
    pub website: Option<String>,
    pub formatted_phone_number: Option<String>,
}

/// One page of text search results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub results: Vec<PlaceSummary>,

    /// Continuation token; `None` when there are no more pages
    pub next_page_token: Option<String>,
}

// ===== Wire formats =====

#[derive(Debug, Deserialize)]
pub(crate) struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaceResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub place_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<DetailsResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DetailsResult {
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
}

impl From<TextSearchResponse> for SearchPage {
    fn from(response: TextSearchResponse) -> Self {
        Self {
            results: response
                .results
                .into_iter()
                .map(|r| PlaceSummary {
                    name: r.name,
                    formatted_address: r.formatted_address,
                    place_id: r.place_id,
                })
                .collect(),
            next_page_token: response.next_page_token.filter(|t| !t.is_empty()),
        }
    }
}

impl From<DetailsResult> for PlaceDetails {
    fn from(result: DetailsResult) -> Self {
        Self {
            website: result.website,
            formatted_phone_number: result.formatted_phone_number,
        }
    }
}
