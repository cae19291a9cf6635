//! Redundancy reduction of the downloaded sequences
//!
//! Clustering is delegated to an external executable (CD-HIT). Where it is not
//! installed, precomputed reference clusters are used instead, and failing
//! those the input is passed through unchanged. Whichever strategy ran, the
//! number of sequences in the result is reported.

mod strategy;

pub use strategy::{
    find_executable, select_strategy, CdHit, ClusteringStrategy, Passthrough, ReferenceCopy,
};

use crate::config::ClusteringConfig;
use crate::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Counts the FASTA records of a file (lines starting with `>`)
pub fn count_sequences(fasta: &Path) -> Result<usize> {
    let reader = BufReader::new(File::open(fasta)?);
    let mut count = 0;
    for line in reader.lines() {
        if line?.starts_with('>') {
            count += 1;
        }
    }
    Ok(count)
}

/// Clusters `input` into `output` with the best available strategy
///
/// # Returns
///
/// The number of sequences in `output`.
pub fn run_clustering(config: &ClusteringConfig, input: &Path, output: &Path) -> Result<usize> {
    tracing::info!(
        "--- Clustering (Current threshold: {:.2}) ---",
        config.threshold
    );

    let strategy = select_strategy(config);
    tracing::debug!("Clustering strategy: {}", strategy.name());
    strategy.cluster(input, output)?;

    count_sequences(output)
}
