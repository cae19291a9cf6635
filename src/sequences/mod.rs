//! Sequence retrieval for the cleaned accession list

mod downloader;

pub use downloader::{fetch_sequences, read_ids, DownloadSummary};
