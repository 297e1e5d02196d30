//! Contact page discovery
//!
//! Finds the first anchor on a homepage whose href or text mentions
//! "contact" and resolves it against the homepage URL.

use scraper::{Html, Selector};
use url::Url;

/// An anchor considered as a link to the contact page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCandidate {
    /// Raw href attribute value
    pub href: String,

    /// Visible text of the anchor
    pub text: String,
}

impl ContactCandidate {
    /// True if the href or the link text contains "contact" in any case
    pub fn mentions_contact(&self) -> bool {
        self.href.to_lowercase().contains("contact") || self.text.to_lowercase().contains("contact")
    }

    /// Resolves the href against `base`
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        base.join(&self.href).ok()
    }
}

/// Finds and resolves the contact page link of a homepage
///
/// Anchors are scanned in document order and the first one that mentions
/// "contact" is used, even if a later anchor looks more specific. Returns
/// `None` when the base URL is invalid, no anchor qualifies, or the chosen
/// href cannot be resolved.
///
/// # Example
///
/// ```
/// use places_enricher::enrich::find_contact_link;
///
/// let html = r#"<a href="/contact-us">Get in touch</a>"#;
/// let link = find_contact_link(html, "https://example.com/").unwrap();
/// assert_eq!(link.as_str(), "https://example.com/contact-us");
/// ```
pub fn find_contact_link(html: &str, base_url: &str) -> Option<Url> {
    let base = Url::parse(base_url).ok()?;
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").ok()?;

    let candidate = document
        .select(&selector)
        .filter_map(|element| {
            let href = element.value().attr("href")?;
            Some(ContactCandidate {
                href: href.to_string(),
                text: element.text().collect::<String>(),
            })
        })
        .find(ContactCandidate::mentions_contact)?;

    let resolved = candidate.resolve(&base);
    match &resolved {
        Some(url) => tracing::debug!("Contact link for {}: {}", base_url, url),
        None => tracing::debug!(
            "Contact href '{}' on {} could not be resolved",
            candidate.href,
            base_url
        ),
    }
    resolved
}
