//! Website technology classification
//!
//! A homepage is classified by scanning it for fixed text markers. The
//! signature table is evaluated top to bottom and the first hit wins, so
//! its order is the priority order.

use std::fmt;

/// Technology behind a business website
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteType {
    WordPress,
    Drupal,
    React,
    VueJs,
    NextJs,
    NuxtJs,
    Shopify,
    Wix,
    Joomla,
    Squarespace,
    Ghost,
    /// Homepage fetched but no signature matched
    Unknown,
    /// No website to inspect
    NotApplicable,
}

impl SiteType {
    /// Label used for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordPress => "WordPress",
            Self::Drupal => "Drupal",
            Self::React => "React",
            Self::VueJs => "Vue.js",
            Self::NextJs => "Next.js",
            Self::NuxtJs => "Nuxt.js",
            Self::Shopify => "Shopify",
            Self::Wix => "Wix",
            Self::Joomla => "Joomla",
            Self::Squarespace => "Squarespace",
            Self::Ghost => "Ghost",
            Self::Unknown => "Unknown",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered signature table: any marker in an entry selects its label
///
/// Markers are matched case-sensitively as plain substrings.
pub const SIGNATURES: &[(&[&str], SiteType)] = &[
    (&["wp-content", "WordPress"], SiteType::WordPress),
    (&["sites/default/files", "Drupal"], SiteType::Drupal),
    (&[r#"id="root""#], SiteType::React),
    (&[r#"id="app""#], SiteType::VueJs),
    (&["/_next/"], SiteType::NextJs),
    (&["/_nuxt/"], SiteType::NuxtJs),
    (&["cdn.shopify.com"], SiteType::Shopify),
    (&["wix.com"], SiteType::Wix),
    (&["joomla"], SiteType::Joomla),
    (&["squarespace.com"], SiteType::Squarespace),
    (&["ghost/content/"], SiteType::Ghost),
];

/// Classifies page content by the first matching signature
///
/// # Example
///
/// ```
/// use places_enricher::enrich::{classify, SiteType};
///
/// let html = r#"<link rel="stylesheet" href="/wp-content/themes/a/style.css">"#;
/// assert_eq!(classify(html), SiteType::WordPress);
/// assert_eq!(classify("<html></html>"), SiteType::Unknown);
/// ```
pub fn classify(content: &str) -> SiteType {
    SIGNATURES
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| content.contains(marker)))
        .map(|(_, site_type)| *site_type)
        .unwrap_or(SiteType::Unknown)
}
