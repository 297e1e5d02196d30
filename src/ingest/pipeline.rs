//! Ingestion pipeline - search, enrich, store
//!
//! Businesses are processed strictly one after another: one is fully
//! enriched and stored before the next starts, and a results page is
//! finished before the next page is requested.

use crate::enrich::{Enricher, PageFetcher};
use crate::places::{PlaceSummary, PlacesSearch};
use crate::storage::{BusinessRecord, Storage};
use crate::EnricherError;
use std::time::Duration;

/// Counters for a finished ingestion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub run_id: i64,
    pub pages_fetched: u32,
    pub businesses_seen: u32,
    pub inserted: u32,
    pub duplicates: u32,
    pub details_failures: u32,
    pub enrichment_failures: u32,
    pub insert_failures: u32,
}

impl IngestSummary {
    fn new(run_id: i64) -> Self {
        Self {
            run_id,
            ..Self::default()
        }
    }
}

/// Runs searches and feeds enriched businesses into storage
///
/// The search client, fetcher and storage handle are all owned by the
/// ingester for the length of a run.
pub struct Ingester<P, F, S> {
    places: P,
    enricher: Enricher<F>,
    storage: S,
    page_delay: Duration,
    config_hash: String,
}

impl<P, F, S> Ingester<P, F, S>
where
    P: PlacesSearch,
    F: PageFetcher,
    S: Storage,
{
    /// Creates a new ingester
    ///
    /// Defaults to a 2 second delay between page requests.
    pub fn new(places: P, enricher: Enricher<F>, storage: S) -> Self {
        Self {
            places,
            enricher,
            storage,
            page_delay: Duration::from_secs(2),
            config_hash: crate::config::DEFAULT_CONFIG_HASH.to_string(),
        }
    }

    /// Sets the delay imposed between result page requests
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Sets the config hash recorded on runs
    pub fn with_config_hash(mut self, hash: impl Into<String>) -> Self {
        self.config_hash = hash.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn places(&self) -> &P {
        &self.places
    }

    /// Releases the storage handle
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Ingests up to `max_pages` result pages for `query`
    ///
    /// # Error Handling
    ///
    /// | Condition | Action |
    /// |-----------|--------|
    /// | Results page request fails | Run marked failed, error returned |
    /// | Details lookup fails | Logged, business skipped |
    /// | Homepage fetch fails | Logged, stored with empty email/site type |
    /// | Insert fails | Logged, run continues |
    /// | Name already stored | Ignored |
    ///
    /// # Returns
    ///
    /// * `Ok(IngestSummary)` - The run finished
    /// * `Err(EnricherError)` - A page request or run bookkeeping failed
    pub async fn run(&mut self, query: &str, max_pages: u32) -> Result<IngestSummary, EnricherError> {
        let run_id = self.storage.create_run(query, &self.config_hash)?;
        tracing::info!("Starting ingestion run {} for '{}'", run_id, query);

        let mut summary = IngestSummary::new(run_id);

        match self.ingest_pages(query, max_pages, &mut summary).await {
            Ok(()) => {
                self.storage
                    .complete_run(run_id, summary.pages_fetched, summary.inserted)?;
                tracing::info!(
                    "Run {} complete: {} pages, {} businesses, {} inserted, {} duplicates",
                    run_id,
                    summary.pages_fetched,
                    summary.businesses_seen,
                    summary.inserted,
                    summary.duplicates
                );
                Ok(summary)
            }
            Err(e) => {
                if let Err(storage_err) =
                    self.storage
                        .fail_run(run_id, summary.pages_fetched, summary.inserted)
                {
                    tracing::warn!("Failed to mark run {} as failed: {}", run_id, storage_err);
                }
                Err(e)
            }
        }
    }

    async fn ingest_pages(
        &mut self,
        query: &str,
        max_pages: u32,
        summary: &mut IngestSummary,
    ) -> Result<(), EnricherError> {
        let mut page_token: Option<String> = None;

        for page_number in 1..=max_pages {
            tracing::info!("Fetching page {}...", page_number);

            let page = self
                .places
                .text_search(query, page_token.as_deref())
                .await
                .map_err(|e| {
                    tracing::error!("Fatal error on page {}: {}", page_number, e);
                    e
                })?;
            summary.pages_fetched += 1;

            for place in &page.results {
                self.process_place(place, summary).await;
            }

            match page.next_page_token {
                None => {
                    tracing::info!("No more pages to fetch");
                    break;
                }
                Some(token) => {
                    page_token = Some(token);
                    if page_number < max_pages {
                        tracing::info!("Waiting before fetching next page...");
                        tokio::time::sleep(self.page_delay).await;
                    }
                }
            }
        }

        Ok(())
    }

    /// Looks up, enriches and stores a single business
    ///
    /// Never fails: every problem is logged and counted.
    async fn process_place(&mut self, place: &PlaceSummary, summary: &mut IngestSummary) {
        summary.businesses_seen += 1;

        let details = match self.places.place_details(&place.place_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!("Failed to get place details for {}: {}", place.name, e);
                summary.details_failures += 1;
                return;
            }
        };

        let website = details.website.unwrap_or_default();

        let (email, site_type) = match self.enricher.enrich(&website).await {
            Ok(enrichment) => (enrichment.email, enrichment.site_type.to_string()),
            Err(e) => {
                tracing::warn!("Could not scrape website {}: {}", website, e);
                summary.enrichment_failures += 1;
                (String::new(), String::new())
            }
        };

        let record = BusinessRecord {
            name: place.name.clone(),
            address: place.formatted_address.clone(),
            phone_number: details.formatted_phone_number.unwrap_or_default(),
            website,
            email,
            site_type,
        };

        match self.storage.insert_business(&record, summary.run_id) {
            Ok(true) => {
                summary.inserted += 1;
                tracing::info!(
                    "Processed: {} (Email: {}, Site Type: {})",
                    record.name,
                    record.email,
                    record.site_type
                );
            }
            Ok(false) => {
                summary.duplicates += 1;
                tracing::info!("Processed: {} (already stored)", record.name);
            }
            Err(e) => {
                tracing::warn!("Failed to insert business {}: {}", record.name, e);
                summary.insert_failures += 1;
            }
        }
    }
}
