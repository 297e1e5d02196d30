//! Integration tests for the enrichment pipeline
//!
//! These tests use wiremock to serve business websites and run the
//! orchestrator against a real HTTP fetcher.

use places_enricher::config::HttpConfig;
use places_enricher::enrich::{Enricher, HttpFetcher, SiteType};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn enricher() -> Enricher<HttpFetcher> {
    Enricher::new(HttpFetcher::from_config(&HttpConfig::default()).expect("Failed to build client"))
}

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_contact_page_email_and_site_type() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        200,
        r#"<html><head><link rel="stylesheet" href="/wp-content/themes/shop/style.css"></head>
        <body>
            <a href="/about">About</a>
            <a href="/contact-us">Get in touch</a>
            <footer>webmaster@agency.example</footer>
        </body></html>"#,
    )
    .await;

    mount_page(
        &mock_server,
        "/contact-us",
        200,
        r#"<html><body><p>Email: <a href="mailto:orders@corner-books.example">orders@corner-books.example</a></p></body></html>"#,
    )
    .await;

    let result = enricher()
        .enrich(&format!("{}/", mock_server.uri()))
        .await
        .expect("Enrichment failed");

    assert_eq!(result.email, "orders@corner-books.example");
    assert_eq!(result.site_type, SiteType::WordPress);
}

#[tokio::test]
async fn test_missing_contact_page_body_is_still_scanned() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        200,
        r#"<div id="app"></div><a href="contact">Contact</a> shop@home.example"#,
    )
    .await;

    // 404 pages are read like any other page
    mount_page(
        &mock_server,
        "/contact",
        404,
        "<h1>Not found</h1> Report broken links to support@host.example",
    )
    .await;

    let result = enricher()
        .enrich(&format!("{}/", mock_server.uri()))
        .await
        .expect("Enrichment failed");

    assert_eq!(result.email, "support@host.example");
    assert_eq!(result.site_type, SiteType::VueJs);
}

#[tokio::test]
async fn test_unreachable_contact_page_falls_back_to_homepage() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        200,
        r#"<a href="http://127.0.0.1:1/contact">Contact</a><p>hello@home.example</p>
        <script src="/_next/static/main.js"></script>"#,
    )
    .await;

    let result = enricher()
        .enrich(&format!("{}/", mock_server.uri()))
        .await
        .expect("Enrichment failed");

    assert_eq!(result.email, "hello@home.example");
    assert_eq!(result.site_type, SiteType::NextJs);
}

#[tokio::test]
async fn test_only_first_contact_link_is_followed() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        200,
        r#"<a href="/contact">Contact</a><a href="/contact/sales">Contact sales</a>"#,
    )
    .await;
    mount_page(&mock_server, "/contact", 200, "<p>Use the form below</p>").await;
    mount_page(&mock_server, "/contact/sales", 200, "sales@corp.example").await;

    let result = enricher()
        .enrich(&format!("{}/", mock_server.uri()))
        .await
        .expect("Enrichment failed");

    assert_eq!(result.email, "");
    assert_eq!(result.site_type, SiteType::Unknown);

    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/", "/contact"]);
}

#[tokio::test]
async fn test_unreachable_homepage_is_error() {
    let result = enricher().enrich("http://127.0.0.1:1/").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_empty_website_is_not_applicable() {
    let result = enricher().enrich("").await.expect("Enrichment failed");
    assert_eq!(result.email, "");
    assert_eq!(result.site_type.to_string(), "N/A");
}
