//! Scraper module for CAZy family structure pages
//!
//! This module contains the family loop of the pipeline:
//! - HTTP fetching without retries
//! - Extraction of each page into structure entries
//! - Appending entries to the structure tables
//! - Throttling between families

mod coordinator;
mod fetcher;

pub use coordinator::{scrape_families, FamilyScraper, ScrapeSummary};
pub use fetcher::{build_http_client, fetch_page, user_agent_string, FetchResult};
