//! Integration tests for the ingestion loop
//!
//! A single wiremock server plays both the Places web service (under
//! `/place`) and the business websites (under `/sites`).

use places_enricher::config::HttpConfig;
use places_enricher::enrich::{build_http_client, Enricher, HttpFetcher};
use places_enricher::output::{dump, DumpFormat};
use places_enricher::places::PlacesClient;
use places_enricher::storage::{RunStatus, SqliteStorage, Storage};
use places_enricher::{EnricherError, Ingester};
use serde_json::json;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestIngester = Ingester<PlacesClient, HttpFetcher, SqliteStorage>;

fn build_ingester(server: &MockServer, db_dir: &TempDir) -> TestIngester {
    let client = build_http_client(&HttpConfig::default()).expect("Failed to build client");
    let places = PlacesClient::new(client.clone(), &format!("{}/place", server.uri()), "test-key")
        .expect("Failed to build places client");
    let storage =
        SqliteStorage::new(&db_dir.path().join("businesses.db")).expect("Failed to open DB");

    Ingester::new(places, Enricher::new(HttpFetcher::new(client)), storage)
        .with_page_delay(Duration::from_millis(10))
}

async fn mount_details(server: &MockServer, place_id: &str, details: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", place_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(details))
        .mount(server)
        .await;
}

async fn mount_site(server: &MockServer, site_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(site_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_two_page_search_end_to_end() {
    let mock_server = MockServer::start().await;
    let base = mock_server.uri();

    // Second page first so the token-specific mock takes precedence
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("pagetoken", "page-2-token"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                {"name": "Paper Lane", "formatted_address": "2 Mill Rd", "place_id": "p2"},
                {"name": "Corner Books", "formatted_address": "1 High St", "place_id": "p1"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("query", "bookstores in manchester"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                {"name": "Corner Books", "formatted_address": "1 High St", "place_id": "p1"},
                {"name": "Gone Fishing", "formatted_address": "9 Lake Rd", "place_id": "missing"},
                {"name": "No Site Books", "formatted_address": "3 Back St", "place_id": "p3"}
            ],
            "next_page_token": "page-2-token"
        })))
        .mount(&mock_server)
        .await;

    mount_details(
        &mock_server,
        "p1",
        json!({"status": "OK", "result": {
            "website": format!("{}/sites/corner/", base),
            "formatted_phone_number": "0161 496 0001"
        }}),
    )
    .await;
    mount_details(
        &mock_server,
        "p2",
        json!({"status": "OK", "result": {
            "website": format!("{}/sites/paper/", base),
            "formatted_phone_number": "0161 496 0002"
        }}),
    )
    .await;
    mount_details(
        &mock_server,
        "p3",
        json!({"status": "OK", "result": {"formatted_phone_number": "0161 496 0003"}}),
    )
    .await;
    mount_details(
        &mock_server,
        "missing",
        json!({"status": "NOT_FOUND", "error_message": "unknown place"}),
    )
    .await;

    mount_site(
        &mock_server,
        "/sites/corner/",
        r#"<script src="https://cdn.shopify.com/s/app.js"></script><a href="contact">Contact us</a>"#,
    )
    .await;
    mount_site(
        &mock_server,
        "/sites/corner/contact",
        "Write to hello@corner-books.example",
    )
    .await;
    mount_site(
        &mock_server,
        "/sites/paper/",
        r#"<div id="root"></div><p>paperlane@shop.example</p>"#,
    )
    .await;

    let db_dir = TempDir::new().unwrap();
    let mut ingester = build_ingester(&mock_server, &db_dir);

    let summary = ingester
        .run("bookstores in manchester", 5)
        .await
        .expect("Ingestion failed");

    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.businesses_seen, 5);
    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.details_failures, 1);

    let storage = ingester.into_storage();

    let corner = storage.get_business("Corner Books").unwrap().unwrap();
    assert_eq!(corner.email, "hello@corner-books.example");
    assert_eq!(corner.site_type, "Shopify");
    assert_eq!(corner.phone_number, "0161 496 0001");
    assert_eq!(corner.address, "1 High St");

    let paper = storage.get_business("Paper Lane").unwrap().unwrap();
    assert_eq!(paper.email, "paperlane@shop.example");
    assert_eq!(paper.site_type, "React");

    let no_site = storage.get_business("No Site Books").unwrap().unwrap();
    assert_eq!(no_site.website, "");
    assert_eq!(no_site.site_type, "N/A");

    assert!(storage.get_business("Gone Fishing").unwrap().is_none());

    let run = storage.get_latest_run().unwrap().unwrap();
    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(run.query, "bookstores in manchester");
    assert_eq!(run.pages_fetched, 2);
    assert_eq!(run.businesses_inserted, 3);

    let out_dir = TempDir::new().unwrap();
    let (csv_path, count) = dump(&storage, DumpFormat::Csv, out_dir.path()).unwrap();
    assert_eq!(count, 3);
    let csv = std::fs::read_to_string(csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Name,Address,Phone Number,Website,Email,Site Type");
    assert!(lines[1].starts_with("Corner Books,1 High St,0161 496 0001,"));
    assert_eq!(lines.len(), 4);
}

#[tokio::test]
async fn test_unreachable_website_is_stored_degraded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{"name": "Dead Site", "formatted_address": "4 Old Rd", "place_id": "d1"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_details(
        &mock_server,
        "d1",
        json!({"status": "OK", "result": {"website": "http://127.0.0.1:1/"}}),
    )
    .await;

    let db_dir = TempDir::new().unwrap();
    let mut ingester = build_ingester(&mock_server, &db_dir);
    let summary = ingester.run("anything", 3).await.expect("Ingestion failed");

    assert_eq!(summary.pages_fetched, 1);
    assert_eq!(summary.enrichment_failures, 1);
    assert_eq!(summary.inserted, 1);

    let stored = ingester.storage().get_business("Dead Site").unwrap().unwrap();
    assert_eq!(stored.email, "");
    assert_eq!(stored.site_type, "");
    assert_eq!(stored.website, "http://127.0.0.1:1/");
}

#[tokio::test]
async fn test_denied_search_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let db_dir = TempDir::new().unwrap();
    let mut ingester = build_ingester(&mock_server, &db_dir);
    let result = ingester.run("anything", 2).await;

    match result {
        Err(EnricherError::Places { status, message }) => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected a Places error, got {:?}", other),
    }

    let run = ingester.storage().get_latest_run().unwrap().unwrap();
    assert_eq!(run.status, RunStatus::Failed);
    assert_eq!(run.pages_fetched, 0);
}
