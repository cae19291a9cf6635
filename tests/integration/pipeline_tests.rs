//! Integration tests for the full pipeline
//!
//! A wiremock server stands in for both the CAZy site and the UniProt
//! accession endpoint; clustering falls back to a passthrough copy.

use cazy_harvest::config::Config;
use cazy_harvest::pipeline::{run_pipeline, RunMode};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_PAGE: &str = include_str!("../fixtures/GH5_structure.html");

const FASTA: &str = ">sp|P07984|GUNA_CELFI Endoglucanase A\nMSTRRTAAALLAAAAVAVGGLTALTTTAAQAAPGCRVDYAVTNQWPGGFGANVTITNLGDPVSSWKLDWTYTAGQRIQQLWNGTASTNGGQVSVTSLPWNGSIPTGGTASFGFNGSWAGSNPTPASFSLNGTTCTGTVPTTSPTPTPTPTTPTPTPTPTPTPTPTVTPQPTSGFYVDPTTQGYRAWQAASGTDKALLEKIALTPQAYWVGNWADASHAQAEVADYTGRAVAAGKTPMLVVYAIPGRDCGSHSGGGVSESEYARWVDTVAQGIKGNPIVILEPDALAQLGDCSGQGDRVGFLKYAAKSLTLKGARVYIDAGHAKWLSVDTPVNRLNQVGFEYAVGFALNTSNYQTTADSKAYGQQISQRLGGKKFVIDTSRNGNGSNGEWCNPRGRALGERPVAVNDGSGLDALLWVKLPGESDGACNGGPAAGQWWQEIALEMARNARW\n>sp|Q9XBH6|MAN26_CELJA Mannan endo-1,4-beta-mannosidase\nMRLSSLLSAALLLGAAHSHAA\n";

/// Creates a test configuration with all endpoints on the mock server
fn create_test_config(base_url: &str, data_dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.scraper.base_url = base_url.to_string();
    config.scraper.request_delay_ms = 0;
    config.ranges.gh_demo_end = 1;
    config.ranges.gt_demo_end = 1;
    config.output.data_dir = data_dir.path().join("data");
    config.sequences.endpoint = format!("{}/uniprotkb/accessions", base_url);
    config.sequences.batch_delay_ms = 0;
    config.clustering.binary = "definitely-not-an-installed-clusterer".to_string();
    config.clustering.fallback_path = data_dir.path().join("no_reference.fasta");
    config
}

#[tokio::test]
async fn test_demo_pipeline_end_to_end() {
    let mock_server = MockServer::start().await;

    for page in ["/GH1_structure.html", "/GT1_structure.html"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
            .mount(&mock_server)
            .await;
    }

    // Ligand-bound rows with real accessions, deduplicated across GH and GT
    Mock::given(method("GET"))
        .and(path("/uniprotkb/accessions"))
        .and(query_param("accessions", "P07984,Q9XBH6"))
        .and(query_param("format", "fasta"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FASTA))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&mock_server.uri(), &dir);

    let report = run_pipeline(&config, RunMode::Demo)
        .await
        .expect("Pipeline failed");

    assert_eq!(report.gh.rows, 4);
    assert_eq!(report.gt.rows, 4);
    assert_eq!(report.unique_ids, Some(2));

    let download = report.download.expect("Download did not run");
    assert_eq!(download.ids, 2);
    assert_eq!(download.batches, 1);
    assert_eq!(download.failed_batches, 0);

    assert_eq!(report.clustered_sequences, Some(2));

    let output = &config.output;
    assert_eq!(
        std::fs::read_to_string(output.clean_ids_path()).expect("Missing id list"),
        "P07984\nQ9XBH6\n"
    );
    assert_eq!(
        std::fs::read_to_string(output.fasta_path()).expect("Missing FASTA"),
        FASTA
    );
    assert_eq!(
        std::fs::read_to_string(output.final_dataset_path()).expect("Missing final dataset"),
        FASTA
    );
}

#[tokio::test]
async fn test_failed_batches_are_skipped() {
    let mock_server = MockServer::start().await;

    for page in ["/GH1_structure.html", "/GT1_structure.html"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200).set_body_string(SAMPLE_PAGE))
            .mount(&mock_server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/uniprotkb/accessions"))
        .and(query_param("accessions", "P07984"))
        .respond_with(ResponseTemplate::new(414))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/uniprotkb/accessions"))
        .and(query_param("accessions", "Q9XBH6"))
        .respond_with(ResponseTemplate::new(200).set_body_string(">sp|Q9XBH6|X\nMR\n"))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&mock_server.uri(), &dir);
    config.sequences.chunk_size = 1;

    let report = run_pipeline(&config, RunMode::Demo)
        .await
        .expect("Pipeline failed");

    let download = report.download.expect("Download did not run");
    assert_eq!(download.batches, 2);
    assert_eq!(download.failed_batches, 1);
    assert_eq!(report.clustered_sequences, Some(1));
}

#[tokio::test]
async fn test_unreachable_site_still_finishes() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config("http://127.0.0.1:1", &dir);

    let report = run_pipeline(&config, RunMode::Demo)
        .await
        .expect("Pipeline failed");

    assert_eq!(report.gh.skipped, 1);
    assert_eq!(report.gt.skipped, 1);
    assert_eq!(report.unique_ids, Some(0));
    // An empty id list still produces an (empty) FASTA, clustered as-is
    assert_eq!(report.download.map(|d| d.batches), Some(0));
    assert_eq!(report.clustered_sequences, Some(0));
}
