//! HTTP page fetcher
//!
//! Pages are fetched with a plain GET and the body is read whatever the
//! status code; a 404 page is still scanned downstream.

use crate::config::HttpConfig;
use crate::EnricherError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Source of raw page content
///
/// The production implementation is [`HttpFetcher`]; the enrichment
/// orchestrator only depends on this trait.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the full body of `url` as text
    async fn fetch(&self, url: &str) -> Result<String, EnricherError>;
}

/// Builds an HTTP client for website fetches
///
/// A request timeout is only applied when one is configured; otherwise the
/// client default is kept.
///
/// # Example
///
/// ```no_run
/// use places_enricher::config::HttpConfig;
/// use places_enricher::enrich::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// [`PageFetcher`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the underlying client from configuration
    pub fn from_config(config: &HttpConfig) -> Result<Self, EnricherError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, EnricherError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| EnricherError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Fetched {} (HTTP {})", url, status.as_u16());
        } else {
            tracing::debug!(
                "{} returned HTTP {}, reading body anyway",
                url,
                status.as_u16()
            );
        }

        response.text().await.map_err(|source| EnricherError::Http {
            url: url.to_string(),
            source,
        })
    }
}
