//! Structure table storage
//!
//! Structure tables are tab-separated files with a fixed header row. They are
//! only ever appended to; every family's rows are written by opening the file
//! in append mode and closing it again before the next family.

use crate::extractor::{StructureEntry, STRUCTURE_TABLE_HEADER};
use crate::Result;
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Creates `path` with the header row unless the file already exists
///
/// # Returns
///
/// * `Ok(true)` - The file was created
/// * `Ok(false)` - The file already existed and was left untouched
pub fn ensure_header(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    let mut writer = table_writer(File::create(path)?);
    writer.write_record(STRUCTURE_TABLE_HEADER)?;
    writer.flush()?;
    Ok(true)
}

/// Appends entries to the table at `path`
///
/// Returns the number of rows written.
pub fn append_entries(path: &Path, entries: &[StructureEntry]) -> Result<usize> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = table_writer(file);

    for entry in entries {
        writer.write_record(entry.as_row())?;
    }
    writer.flush()?;

    Ok(entries.len())
}

/// Reads every row of the table at `path`
pub fn read_entries(path: &Path) -> Result<Vec<StructureEntry>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .flexible(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record?);
    }
    Ok(entries)
}

/// Cells are written verbatim; scraped values never contain tabs or newlines.
fn table_writer(file: File) -> csv::Writer<File> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_writer(file)
}
