//! Filtering and merging of the scraped structure tables
//!
//! The GH and GT tables are reduced to ligand-bound rows, merged, stripped of
//! placeholder accessions and collapsed into a list of unique UniProt ids in
//! first-seen order.

use crate::extractor::{StructureEntry, NO_LIGAND};
use crate::output::tsv::read_entries;
use crate::Result;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Keeps rows with a ligand and a real accession, in input order
pub fn ligand_bound<'a>(
    entries: impl IntoIterator<Item = &'a StructureEntry>,
    junk_ids: &[String],
) -> Vec<&'a StructureEntry> {
    entries
        .into_iter()
        .filter(|e| e.ligand != NO_LIGAND)
        .filter(|e| !e.uniprot_id.trim().is_empty())
        .filter(|e| !junk_ids.iter().any(|junk| junk == &e.uniprot_id))
        .collect()
}

/// Unique accessions of `entries` in order of first appearance
pub fn unique_ids<'a>(entries: impl IntoIterator<Item = &'a StructureEntry>) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.uniprot_id.as_str()))
        .map(|e| e.uniprot_id.clone())
        .collect()
}

/// Merges the GH and GT tables into a clean id list
///
/// # Arguments
///
/// * `gh_file` - GH structure table
/// * `gt_file` - GT structure table
/// * `output_file` - Where the id list is written, one id per line
/// * `junk_ids` - UniProt column values that are placeholders, not accessions
///
/// # Returns
///
/// * `Ok(Some(path))` - The id list was written
/// * `Ok(None)` - An input table is missing; nothing was written
/// * `Err(HarvestError)` - An input could not be read or the output written
pub fn process_data(
    gh_file: &Path,
    gt_file: &Path,
    output_file: &Path,
    junk_ids: &[String],
) -> Result<Option<PathBuf>> {
    tracing::info!("--- Merging and cleaning data ---");

    if !gh_file.exists() || !gt_file.exists() {
        tracing::error!("Input files not found. Skipping cleaning step.");
        return Ok(None);
    }

    let gh = read_entries(gh_file)?;
    let gt = read_entries(gt_file)?;

    let kept = ligand_bound(gh.iter().chain(gt.iter()), junk_ids);
    let ids = unique_ids(kept);

    tracing::info!("Found {} unique sequences with ligands.", ids.len());

    let mut writer = BufWriter::new(File::create(output_file)?);
    for id in &ids {
        writeln!(writer, "{}", id)?;
    }
    writer.flush()?;

    Ok(Some(output_file.to_path_buf()))
}
