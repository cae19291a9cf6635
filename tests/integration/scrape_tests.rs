//! Integration tests for the family loop
//!
//! These tests use wiremock to serve family structure pages and check the
//! structure tables the scraper writes.

use cazy_harvest::config::Config;
use cazy_harvest::scraper::{scrape_families, FamilyScraper, ScrapeSummary};
use cazy_harvest::FamilyType;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_PAGE: &str = include_str!("../fixtures/GH5_structure.html");

const HEADER: &str = "Family\tEC_Number\tPDB_ID\tUniProt_ID\tLigands\tResolution";

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.scraper.base_url = base_url.to_string();
    config.scraper.request_delay_ms = 0;
    config
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_missing_family_is_skipped() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/GH1_structure.html", SAMPLE_PAGE).await;
    mount_page(&mock_server, "/GH3_structure.html", SAMPLE_PAGE).await;
    // GH2 is not mounted: the mock server answers 404

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("gh_data.tsv");
    let config = create_test_config(&mock_server.uri());

    let summary = scrape_families(&config, FamilyType::GH, 1, 3, &output)
        .await
        .expect("Scrape failed");

    assert_eq!(
        summary,
        ScrapeSummary {
            attempted: 3,
            scraped: 2,
            skipped: 1,
            rows: 8,
        }
    );

    let content = std::fs::read_to_string(&output).expect("Failed to read table");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "GH1\t3.2.1.4\t1CEC\tP07984\tnone\t2.00");
    assert_eq!(lines[2], "GH1\t3.2.1.4\t1CEN\tP07984\tBGCGLC\t1.65");
    assert_eq!(lines[3], "GH1\tunk\t4W84\tnoID\tXYP\t2.30");
    assert_eq!(lines[4], "GH1\t3.2.1.78\t1QNO\tQ9XBH6\tMAN\t1.80");
    assert!(lines[5..].iter().all(|l| l.starts_with("GH3\t")));
    assert!(!content.contains("GH2\t"));
}

#[tokio::test]
async fn test_server_error_is_skipped_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/GT1_structure.html"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/GT2_structure.html", SAMPLE_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("gt_data.tsv");
    let config = create_test_config(&mock_server.uri());

    let summary = scrape_families(&config, FamilyType::GT, 1, 2, &output)
        .await
        .expect("Scrape failed");

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.scraped, 1);

    let content = std::fs::read_to_string(&output).expect("Failed to read table");
    assert!(content.lines().skip(1).all(|l| l.starts_with("GT2\t")));
}

#[tokio::test]
async fn test_page_without_structures_adds_no_rows() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/GH4_structure.html",
        "<html><body>No structure available</body></html>",
    )
    .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("gh_data.tsv");
    let config = create_test_config(&mock_server.uri());

    let summary = scrape_families(&config, FamilyType::GH, 4, 4, &output)
        .await
        .expect("Scrape failed");

    assert_eq!(summary.scraped, 1);
    assert_eq!(summary.rows, 0);
    assert_eq!(
        std::fs::read_to_string(&output).expect("Failed to read table"),
        format!("{}\n", HEADER)
    );
}

#[tokio::test]
async fn test_repeated_runs_append_with_single_header() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/GH1_structure.html", SAMPLE_PAGE).await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("gh_data.tsv");
    let scraper = FamilyScraper::with_client(
        reqwest::Client::new(),
        &mock_server.uri(),
        Duration::ZERO,
    );

    scraper
        .scrape_range(FamilyType::GH, 1, 1, &output)
        .await
        .expect("First scrape failed");
    let first = std::fs::read_to_string(&output).expect("Failed to read table");

    scraper
        .scrape_range(FamilyType::GH, 1, 1, &output)
        .await
        .expect("Second scrape failed");
    let second = std::fs::read_to_string(&output).expect("Failed to read table");

    // Identical page text yields identical rows, appended after the first run's
    let first_rows = &first[HEADER.len() + 1..];
    assert_eq!(second, format!("{}{}", first, first_rows));
    assert_eq!(second.matches(HEADER).count(), 1);
}
