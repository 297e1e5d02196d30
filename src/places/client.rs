//! Places web service client
//!
//! Talks to the legacy JSON endpoints:
//! - `{base}/textsearch/json` for result pages
//! - `{base}/details/json` for website and phone lookups

use crate::config::PlacesConfig;
use crate::places::types::{DetailsResponse, PlaceDetails, SearchPage, TextSearchResponse};
use crate::places::PlacesSearch;
use crate::{ConfigError, EnricherError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Fields requested from the details endpoint
const DETAILS_FIELDS: &str = "website,formatted_phone_number";

/// HTTP client for the Places web service
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    /// Creates a new client
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client to use
    /// * `base_url` - Service root, e.g. `https://maps.googleapis.com/maps/api/place`
    /// * `api_key` - Places API key (must not be empty)
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Result<Self, EnricherError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::Validation("Places API key cannot be empty".to_string()).into());
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Creates a client using the configured service root
    pub fn from_config(
        client: Client,
        config: &PlacesConfig,
        api_key: &str,
    ) -> Result<Self, EnricherError> {
        Self::new(client, &config.api_base_url, api_key)
    }

    /// Sends a GET to `endpoint` and decodes the JSON body
    ///
    /// The API key is attached as a query parameter and stripped from any
    /// transport error so it never reaches the logs.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, EnricherError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| EnricherError::Http {
                url: url.clone(),
                source: source.without_url(),
            })?;

        let body = response.text().await.map_err(|source| EnricherError::Http {
            url: url.clone(),
            source: source.without_url(),
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Maps a Places status code to a result
///
/// `OK` and `ZERO_RESULTS` are successful; everything else (`REQUEST_DENIED`,
/// `INVALID_REQUEST`, `OVER_QUERY_LIMIT`, ...) is an error.
fn check_status(status: &str, error_message: Option<String>) -> Result<(), EnricherError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(EnricherError::Places {
            status: other.to_string(),
            message: error_message.unwrap_or_default(),
        }),
    }
}

#[async_trait]
impl PlacesSearch for PlacesClient {
    async fn text_search(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<SearchPage, EnricherError> {
        let mut params = vec![("query", query)];
        if let Some(token) = page_token {
            params.push(("pagetoken", token));
        }

        let response: TextSearchResponse = self.get_json("textsearch/json", &params).await?;
        check_status(&response.status, response.error_message.clone())?;

        let page = SearchPage::from(response);
        tracing::debug!(
            "Text search returned {} results (more pages: {})",
            page.results.len(),
            page.next_page_token.is_some()
        );
        Ok(page)
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, EnricherError> {
        let params = [("place_id", place_id), ("fields", DETAILS_FIELDS)];

        let response: DetailsResponse = self.get_json("details/json", &params).await?;
        check_status(&response.status, response.error_message)?;

        Ok(response.result.map(PlaceDetails::from).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = PlacesClient::new(Client::new(), "https://example.com/place", "  ");
        assert!(matches!(
            result,
            Err(EnricherError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PlacesClient::new(Client::new(), "https://example.com/place/", "k").unwrap();
        assert_eq!(client.base_url, "https://example.com/place");
    }

    #[test]
    fn test_check_status() {
        assert!(check_status("OK", None).is_ok());
        assert!(check_status("ZERO_RESULTS", None).is_ok());

        let err = check_status("REQUEST_DENIED", Some("The provided API key is invalid.".into()))
            .unwrap_err();
        match err {
            EnricherError::Places { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "The provided API key is invalid.");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
