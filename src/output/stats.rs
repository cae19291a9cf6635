//! Statistics over existing pipeline outputs
//!
//! This module provides functionality for summarizing the files a previous run
//! left in the data directory.

use crate::clustering::count_sequences;
use crate::config::OutputConfig;
use crate::extractor::{StructureEntry, NO_LIGAND};
use crate::output::tsv::read_entries;
use crate::Result;
use std::collections::HashSet;
use std::path::Path;

/// Summary of one structure table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableStatistics {
    /// Number of data rows
    pub rows: usize,

    /// Number of distinct families with at least one row
    pub families: usize,

    /// Rows with a ligand other than `none`
    pub ligand_bound_rows: usize,
}

impl TableStatistics {
    pub fn from_entries(entries: &[StructureEntry]) -> Self {
        let families: HashSet<&str> = entries.iter().map(|e| e.family.as_str()).collect();
        Self {
            rows: entries.len(),
            families: families.len(),
            ligand_bound_rows: entries.iter().filter(|e| e.ligand != NO_LIGAND).count(),
        }
    }
}

/// Dataset statistics summary
///
/// `None` marks a file that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct DatasetStatistics {
    pub gh: Option<TableStatistics>,
    pub gt: Option<TableStatistics>,

    /// Accessions in the clean id list
    pub unique_ids: Option<usize>,

    /// Sequences in the downloaded FASTA
    pub downloaded_sequences: Option<usize>,

    /// Sequences in the clustered FASTA
    pub clustered_sequences: Option<usize>,
}

/// Loads statistics from the files described by `output`
pub fn load_statistics(output: &OutputConfig) -> Result<DatasetStatistics> {
    Ok(DatasetStatistics {
        gh: load_table_statistics(&output.gh_path())?,
        gt: load_table_statistics(&output.gt_path())?,
        unique_ids: count_ids(&output.clean_ids_path())?,
        downloaded_sequences: count_if_exists(&output.fasta_path())?,
        clustered_sequences: count_if_exists(&output.final_dataset_path())?,
    })
}

fn load_table_statistics(path: &Path) -> Result<Option<TableStatistics>> {
    if !path.exists() {
        return Ok(None);
    }
    let entries = read_entries(path)?;
    Ok(Some(TableStatistics::from_entries(&entries)))
}

fn count_ids(path: &Path) -> Result<Option<usize>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(
        content.lines().filter(|l| !l.trim().is_empty()).count(),
    ))
}

fn count_if_exists(path: &Path) -> Result<Option<usize>> {
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(count_sequences(path)?))
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &DatasetStatistics) {
    println!("=== Dataset Statistics ===\n");

    for (label, table) in [("GH", &stats.gh), ("GT", &stats.gt)] {
        match table {
            Some(t) => {
                let percentage = if t.rows > 0 {
                    (t.ligand_bound_rows as f64 / t.rows as f64) * 100.0
                } else {
                    0.0
                };
                println!("{} structures:", label);
                println!("  Families with structures: {}", t.families);
                println!("  Structure rows: {}", t.rows);
                println!(
                    "  Ligand-bound rows: {} ({:.1}%)",
                    t.ligand_bound_rows, percentage
                );
            }
            None => println!("{} structures: not scraped yet", label),
        }
        println!();
    }

    println!("Sequences:");
    println!("  Unique ligand-bound ids: {}", display_count(stats.unique_ids));
    println!(
        "  Downloaded sequences: {}",
        display_count(stats.downloaded_sequences)
    );
    println!(
        "  Clustered sequences: {}",
        display_count(stats.clustered_sequences)
    );
}

fn display_count(count: Option<usize>) -> String {
    count.map_or_else(|| "-".to_string(), |c| c.to_string())
}
