//! Family loop - scrape coordination
//!
//! Families are processed strictly one after another: a page is fetched,
//! extracted and appended to its structure table before the next family is
//! requested. A fixed pause after every family bounds the request rate.

use crate::config::Config;
use crate::extractor::{extract_entries, StructureEntry};
use crate::family::{FamilyTarget, FamilyType};
use crate::output::tsv::{append_entries, ensure_header};
use crate::scraper::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::HarvestError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Outcome counters of one family range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Families requested
    pub attempted: u32,

    /// Families whose page was fetched and extracted
    pub scraped: u32,

    /// Families skipped after a fetch failure
    pub skipped: u32,

    /// Structure rows appended
    pub rows: usize,
}

/// Scrapes family ranges into structure tables
pub struct FamilyScraper {
    client: Client,
    base_url: String,
    request_delay: Duration,
}

impl FamilyScraper {
    /// Creates a scraper from the configuration
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.scraper, &config.user_agent)?;
        Ok(Self::with_client(
            client,
            &config.scraper.base_url,
            Duration::from_millis(config.scraper.request_delay_ms),
        ))
    }

    /// Creates a scraper around an existing client
    pub fn with_client(client: Client, base_url: &str, request_delay: Duration) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            request_delay,
        }
    }

    /// Scrapes families `start..=end` of `family_type` and appends their rows to `output`
    ///
    /// The table is created with its header row if it does not exist. Families
    /// whose page cannot be fetched are skipped without writing anything.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the output table abort the range.
    pub async fn scrape_range(
        &self,
        family_type: FamilyType,
        start: u32,
        end: u32,
        output: &Path,
    ) -> Result<ScrapeSummary, HarvestError> {
        ensure_header(output)?;

        tracing::info!(
            "--- Starting scrape for {} families {} to {} ---",
            family_type,
            start,
            end
        );

        let mut summary = ScrapeSummary::default();

        for number in start..=end {
            let target = FamilyTarget::new(family_type, number);
            tracing::info!("Processing: {}...", target);
            summary.attempted += 1;

            match self.scrape_family(&target).await {
                Some(entries) => {
                    summary.rows += append_entries(output, &entries)?;
                    summary.scraped += 1;
                }
                None => summary.skipped += 1,
            }

            tokio::time::sleep(self.request_delay).await;
        }

        tracing::info!(
            "Finished {} families {} to {}: {} scraped, {} skipped, {} rows",
            family_type,
            start,
            end,
            summary.scraped,
            summary.skipped,
            summary.rows
        );

        Ok(summary)
    }

    /// Fetches and extracts one family page
    ///
    /// Returns `None` when the page could not be fetched.
    pub async fn scrape_family(&self, target: &FamilyTarget) -> Option<Vec<StructureEntry>> {
        let url = target.page_url(&self.base_url);

        match fetch_page(&self.client, &url).await {
            FetchResult::Success { body, .. } => {
                let entries = extract_entries(&target.name(), &body);
                tracing::debug!("{}: extracted {} structure rows", target, entries.len());
                Some(entries)
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Skipping {}: HTTP {} for {}", target, status_code, url);
                None
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Skipping {}: {} ({})", target, error, url);
                None
            }
        }
    }
}

/// Scrapes one family range with a scraper built from `config`
///
/// # Example
///
/// ```no_run
/// use cazy_harvest::config::Config;
/// use cazy_harvest::scraper::scrape_families;
/// use cazy_harvest::FamilyType;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let summary = scrape_families(&config, FamilyType::GH, 1, 5, Path::new("data/gh_data.tsv")).await?;
/// println!("{} rows", summary.rows);
/// # Ok(())
/// # }
/// ```
pub async fn scrape_families(
    config: &Config,
    family_type: FamilyType,
    start: u32,
    end: u32,
    output: &Path,
) -> Result<ScrapeSummary, HarvestError> {
    FamilyScraper::new(config)?
        .scrape_range(family_type, start, end, output)
        .await
}
