//! End-to-end dataset pipeline
//!
//! 1. Scrape GH and GT family structure pages into structure tables
//! 2. Filter ligand-bound entries and merge them into a clean id list
//! 3. Download the sequences of those ids
//! 4. Cluster the sequences into the final non-redundant dataset
//!
//! Scraping failures on the output tables abort the run. The later stages
//! report their errors and let the run continue; each stage only starts when
//! the file it consumes exists.

use crate::clustering::run_clustering;
use crate::config::Config;
use crate::dataset::process_data;
use crate::family::FamilyType;
use crate::scraper::{build_http_client, FamilyScraper, ScrapeSummary};
use crate::sequences::{fetch_sequences, DownloadSummary};
use crate::HarvestError;

/// Size of the scraped family ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// The first few families of each class
    Demo,

    /// Every family; resource intensive
    Full,
}

/// Inclusive family ranges scraped by a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapePlan {
    pub gh: (u32, u32),
    pub gt: (u32, u32),
}

impl ScrapePlan {
    pub fn for_mode(config: &Config, mode: RunMode) -> Self {
        let start = config.ranges.start;
        match mode {
            RunMode::Demo => Self {
                gh: (start, config.ranges.gh_demo_end),
                gt: (start, config.ranges.gt_demo_end),
            },
            RunMode::Full => Self {
                gh: (start, config.ranges.gh_full_end),
                gt: (start, config.ranges.gt_full_end),
            },
        }
    }
}

/// What a pipeline run produced
///
/// A `None` stage did not run or failed.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub gh: ScrapeSummary,
    pub gt: ScrapeSummary,
    pub unique_ids: Option<usize>,
    pub download: Option<DownloadSummary>,
    pub clustered_sequences: Option<usize>,
}

/// Runs all pipeline stages
pub async fn run_pipeline(config: &Config, mode: RunMode) -> Result<PipelineReport, HarvestError> {
    let output = &config.output;
    let plan = ScrapePlan::for_mode(config, mode);
    let mut report = PipelineReport::default();

    match mode {
        RunMode::Full => tracing::info!("Full run initialized (This may take a while)"),
        RunMode::Demo => tracing::info!(
            "Demo run initialized (Scraping only first {} GH and {} GT families)",
            plan.gh.1,
            plan.gt.1
        ),
    }

    std::fs::create_dir_all(&output.data_dir)?;

    tracing::info!("ML DATASET PREPARATION PIPELINE");

    // Step 1: scraping
    let scraper = FamilyScraper::new(config)?;
    report.gh = scraper
        .scrape_range(FamilyType::GH, plan.gh.0, plan.gh.1, &output.gh_path())
        .await?;
    report.gt = scraper
        .scrape_range(FamilyType::GT, plan.gt.0, plan.gt.1, &output.gt_path())
        .await?;

    // Step 2: cleaning and filtering
    let clean_ids = output.clean_ids_path();
    match process_data(
        &output.gh_path(),
        &output.gt_path(),
        &clean_ids,
        &config.cleaning.junk_ids,
    ) {
        Ok(Some(path)) => {
            report.unique_ids = crate::sequences::read_ids(&path).ok().map(|ids| ids.len());
        }
        Ok(None) => {}
        Err(e) => tracing::error!("Error during data processing: {}", e),
    }

    // Step 3: sequence download
    let fasta = output.fasta_path();
    if clean_ids.exists() {
        let client = build_http_client(&config.scraper, &config.user_agent)?;
        match fetch_sequences(&client, &config.sequences, &clean_ids, &fasta).await {
            Ok(summary) => report.download = Some(summary),
            Err(e) => tracing::error!("Error during download: {}", e),
        }
    }

    // Step 4: clustering
    if fasta.exists() {
        match run_clustering(&config.clustering, &fasta, &output.final_dataset_path()) {
            Ok(count) => {
                tracing::info!("{} sequences in the final dataset", count);
                report.clustered_sequences = Some(count);
            }
            Err(e) => tracing::error!("Error during clustering: {}", e),
        }
    }

    tracing::info!("PIPELINE FINISHED");

    Ok(report)
}
