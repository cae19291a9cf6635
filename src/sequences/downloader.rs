//! UniProt sequence download
//!
//! Accessions are requested in fixed-size batches from the UniProt accession
//! endpoint in FASTA format. Oversized batches are rejected by the server
//! (HTTP 414), hence the chunking.

use crate::config::SequenceConfig;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Outcome counters of a download
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Accessions read from the id list
    pub ids: usize,

    /// Batches requested
    pub batches: usize,

    /// Batches answered with a non-success status and left out
    pub failed_batches: usize,
}

/// Reads the non-blank, trimmed lines of an id list
pub fn read_ids(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Downloads the FASTA sequences of every accession in `id_file`
///
/// The output is truncated first. Each batch body is appended as received; a
/// batch answered with a non-success status is reported and skipped.
///
/// # Errors
///
/// Transport failures abort the download; batches written so far stay in the
/// output file.
pub async fn fetch_sequences(
    client: &Client,
    config: &SequenceConfig,
    id_file: &Path,
    output_fasta: &Path,
) -> Result<DownloadSummary> {
    tracing::info!("Downloading sequences from UniProt");

    let ids = read_ids(id_file)?;
    let total = ids.len();
    let mut summary = DownloadSummary {
        ids: total,
        ..DownloadSummary::default()
    };

    let mut writer = BufWriter::new(File::create(output_fasta)?);
    let delay = Duration::from_millis(config.batch_delay_ms);

    for (index, chunk) in ids.chunks(config.chunk_size.max(1)).enumerate() {
        let first = index * config.chunk_size.max(1);
        tracing::info!(
            "Downloading batch {} - {}...",
            first,
            (first + chunk.len()).min(total)
        );
        summary.batches += 1;

        let accessions = chunk.join(",");
        let response = client
            .get(&config.endpoint)
            .query(&[("accessions", accessions.as_str()), ("format", "fasta")])
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: config.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await.map_err(|source| HarvestError::Http {
                url: config.endpoint.clone(),
                source,
            })?;
            writer.write_all(body.as_bytes())?;
        } else {
            tracing::warn!("Batch failed with status code {}", status.as_u16());
            summary.failed_batches += 1;
        }

        tokio::time::sleep(delay).await;
    }

    writer.flush()?;
    tracing::info!("Sequences saved to: {}", output_fasta.display());

    Ok(summary)
}
