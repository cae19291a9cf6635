//! Dataset preparation from the scraped structure tables

mod cleaner;

pub use cleaner::{ligand_bound, process_data, unique_ids};
