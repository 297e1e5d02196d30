//! Enrichment orchestration
//!
//! Sequences the fetcher, classifier, contact resolver and email extractor
//! for a single website.

use crate::enrich::classifier::{classify, SiteType};
use crate::enrich::contact::find_contact_link;
use crate::enrich::email::extract_email;
use crate::enrich::fetcher::PageFetcher;
use crate::EnricherError;
use url::Url;

/// Derived attributes for one business website
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    /// First email found (contact page first, then homepage); may be empty
    pub email: String,

    /// Technology classification of the homepage
    pub site_type: SiteType,
}

impl Enrichment {
    /// Result for a business without a usable website
    pub fn not_applicable() -> Self {
        Self {
            email: String::new(),
            site_type: SiteType::NotApplicable,
        }
    }

    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }
}

/// Runs the enrichment pipeline against a [`PageFetcher`]
#[derive(Debug, Clone)]
pub struct Enricher<F> {
    fetcher: F,
}

impl<F: PageFetcher> Enricher<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Enriches one website
    ///
    /// # Flow
    ///
    /// 1. Empty or unparsable URL → `("", N/A)` without any request
    /// 2. Fetch the homepage; a failure here is returned as an error
    /// 3. Classify the homepage
    /// 4. Find a contact link; any failure means "no contact page"
    /// 5. Fetch the contact page and extract an email from it
    /// 6. Fall back to the homepage when step 5 produced nothing
    ///
    /// # Returns
    ///
    /// * `Ok(Enrichment)` - The email (possibly empty) and site type
    /// * `Err(EnricherError)` - The homepage could not be fetched
    pub async fn enrich(&self, website_url: &str) -> Result<Enrichment, EnricherError> {
        if website_url.is_empty() {
            return Ok(Enrichment::not_applicable());
        }
        if let Err(e) = Url::parse(website_url) {
            tracing::debug!("Skipping unparsable website {:?}: {}", website_url, e);
            return Ok(Enrichment::not_applicable());
        }

        let homepage = self.fetcher.fetch(website_url).await?;
        let site_type = classify(&homepage);

        let mut email = self
            .email_from_contact_page(&homepage, website_url)
            .await
            .unwrap_or_default();

        if email.is_empty() {
            email = extract_email(&homepage);
        }

        Ok(Enrichment { email, site_type })
    }

    /// Looks for an email on the contact page linked from `homepage`
    ///
    /// Returns `None` when there is no contact link, the contact page could
    /// not be fetched, or it holds no email.
    async fn email_from_contact_page(&self, homepage: &str, website_url: &str) -> Option<String> {
        let contact_url = find_contact_link(homepage, website_url)?;

        let content = match self.fetcher.fetch(contact_url.as_str()).await {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("Contact page {} unavailable: {}", contact_url, e);
                return None;
            }
        };

        Some(extract_email(&content)).filter(|email| !email.is_empty())
    }
}
