//! End-to-end reconciliation tests
//!
//! The external schedule is served by wiremock; catalogs live in temp files so
//! every run observes real store reads and writes.

mod common;

use common::{open_store, sample_catalog, sample_schedule, schedule_service};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_schedule(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/hts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn reconciliation_merges_matched_rates_and_reports_misses() {
    let server = MockServer::start().await;
    mock_schedule(&server, sample_schedule()).await;

    let dir = tempfile::tempdir().unwrap();
    let (path, store) = open_store(&dir, &sample_catalog());
    let service = schedule_service(&format!("{}/hts.json", server.uri()));

    let report = service.update_catalog_tariffs(&store).await;

    assert!(report.success);
    assert!(report.error.is_none());
    assert_eq!(report.total_processed, 3);
    assert_eq!(report.updated.len(), 2);
    assert_eq!(report.failed.len(), 1);

    let wiring = &report.updated[0];
    assert_eq!(wiring.hs_code, "854430");
    assert_eq!(wiring.old_rate, 2.5);
    assert_eq!(wiring.new_rate, 5.0);

    let phones = &report.updated[1];
    assert_eq!(phones.hs_code, "851712");
    assert_eq!(phones.new_rate, 0.0);

    let miss = &report.failed[0];
    assert_eq!(miss.hs_code.as_deref(), Some("999999"));
    assert_eq!(miss.reason, "Tariff rate not found in HTS data");

    // The store file was rewritten with only the matched rates changed
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let products = written["products"].as_array().unwrap();
    assert_eq!(products[0]["current_tariff_rate"], 5.0);
    assert_eq!(products[1]["current_tariff_rate"], 0.0);
    assert_eq!(products[2]["current_tariff_rate"], 1.0);
    assert_eq!(products[2]["name"], "Unlisted Widget");
    // Untouched fields survive the rewrite
    assert_eq!(products[0]["proposed_tariff_rate"], 25.0);
    assert_eq!(written["price_history"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn reconciliation_is_idempotent_against_unchanged_schedule() {
    let server = MockServer::start().await;
    mock_schedule(&server, sample_schedule()).await;

    let dir = tempfile::tempdir().unwrap();
    let (_path, store) = open_store(&dir, &sample_catalog());
    let service = schedule_service(&format!("{}/hts.json", server.uri()));

    let first = service.update_catalog_tariffs(&store).await;
    assert!(first.success);
    assert!(first.updated.iter().any(|u| u.old_rate != u.new_rate));

    let second = service.update_catalog_tariffs(&store).await;
    assert!(second.success);
    assert_eq!(second.updated.len(), first.updated.len());
    for product in &second.updated {
        assert_eq!(
            product.old_rate, product.new_rate,
            "{} changed on the second run",
            product.hs_code
        );
    }
}

#[tokio::test]
async fn fetch_failure_leaves_catalog_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hts.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (path, store) = open_store(&dir, &sample_catalog());
    let before = std::fs::read_to_string(&path).unwrap();

    let service = schedule_service(&format!("{}/hts.json", server.uri()));
    let report = service.update_catalog_tariffs(&store).await;

    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("Failed to fetch tariff data"));
    assert_eq!(report.total_processed, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn malformed_schedule_body_counts_as_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (path, store) = open_store(&dir, &sample_catalog());
    let before = std::fs::read_to_string(&path).unwrap();

    let service = schedule_service(&format!("{}/hts.json", server.uri()));
    let report = service.update_catalog_tariffs(&store).await;

    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("Failed to fetch tariff data"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn store_read_failure_aborts_before_any_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_schedule()))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let (path, store) = open_store(&dir, &sample_catalog());
    std::fs::remove_file(&path).unwrap();

    let service = schedule_service(&format!("{}/hts.json", server.uri()));
    let report = service.update_catalog_tariffs(&store).await;

    assert!(!report.success);
    assert!(report.error.is_some());
    assert_eq!(report.total_processed, 0);
    // wiremock verifies expect(0) on drop: the schedule was never requested
}

#[tokio::test]
async fn product_without_hs_code_is_reported_not_fatal() {
    let server = MockServer::start().await;
    mock_schedule(&server, sample_schedule()).await;

    let mut catalog = sample_catalog();
    catalog["products"][2]["hs_code"] = serde_json::json!("");

    let dir = tempfile::tempdir().unwrap();
    let (_path, store) = open_store(&dir, &catalog);
    let service = schedule_service(&format!("{}/hts.json", server.uri()));

    let report = service.update_catalog_tariffs(&store).await;

    assert!(report.success);
    assert_eq!(report.total_processed, 3);
    assert_eq!(report.updated.len(), 2);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].reason, "Missing HS code");
    assert!(report.failed[0].hs_code.is_none());
}

#[tokio::test]
async fn tariff_info_reports_rate_or_absence() {
    let server = MockServer::start().await;
    mock_schedule(&server, sample_schedule()).await;

    let service = schedule_service(&format!("{}/hts.json", server.uri()));

    let hit = service.tariff_info("610910").await.unwrap();
    assert_eq!(hit.hs_code, "610910");
    assert_eq!(hit.current_tariff_rate, Some(16.5));
    assert_eq!(hit.data_source, "USITC HTS 2024");
    assert_eq!(hit.last_updated, "2024");

    let miss = service.tariff_info("123456").await.unwrap();
    assert_eq!(miss.current_tariff_rate, None);
}

#[tokio::test]
async fn tariff_info_fetch_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hts.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = schedule_service(&format!("{}/hts.json", server.uri()));
    let err = service.tariff_info("610910").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch tariff data");
}
