//! Output module for the structure tables and dataset summaries
//!
//! This module handles:
//! - Creating and appending to the tab-separated structure tables
//! - Reading structure tables back for filtering and statistics
//! - Summarizing existing pipeline outputs

pub mod stats;
pub mod tsv;

pub use stats::{load_statistics, print_statistics, DatasetStatistics, TableStatistics};
pub use tsv::{append_entries, ensure_header, read_entries};
