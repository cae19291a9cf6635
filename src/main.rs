//! Cazy-Harvest main entry point
//!
//! This is the command-line interface for the ligand-bound enzyme dataset pipeline.

use anyhow::Context;
use cazy_harvest::config::{load_config_with_hash, Config};
use cazy_harvest::output::{load_statistics, print_statistics};
use cazy_harvest::pipeline::{run_pipeline, RunMode, ScrapePlan};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cazy-Harvest: a ligand-bound enzyme dataset builder
///
/// Scrapes CAZy GH and GT family structure pages, keeps ligand-bound
/// structures, downloads their UniProt sequences and clusters them into a
/// non-redundant dataset.
#[derive(Parser, Debug)]
#[command(name = "cazy-harvest")]
#[command(version)]
#[command(about = "Builds a ligand-bound CAZy enzyme dataset", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Scrape all families. WARNING: resource intensive, meant for cluster/HPC environments
    #[arg(long)]
    full: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without scraping
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics of existing output files and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    let mode = if cli.full { RunMode::Full } else { RunMode::Demo };

    if cli.dry_run {
        handle_dry_run(&config, mode);
    } else if cli.stats {
        let stats = load_statistics(&config.output).context("Failed to read output files")?;
        print_statistics(&stats);
    } else {
        if mode == RunMode::Demo {
            tracing::info!("    (Use '--full' to scrape everything)");
        }
        let report = run_pipeline(&config, mode).await.context("Pipeline failed")?;
        tracing::debug!("Pipeline report: {:?}", report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("cazy_harvest=info,warn"),
            1 => EnvFilter::new("cazy_harvest=debug,info"),
            2 => EnvFilter::new("cazy_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what a run would do
fn handle_dry_run(config: &Config, mode: RunMode) {
    let plan = ScrapePlan::for_mode(config, mode);

    println!("=== Cazy-Harvest Dry Run ===\n");

    println!("Scraping ({:?} run):", mode);
    println!("  Base URL: {}", config.scraper.base_url);
    println!("  GH families: {} to {}", plan.gh.0, plan.gh.1);
    println!("  GT families: {} to {}", plan.gt.0, plan.gt.1);
    println!("  Delay between families: {}ms", config.scraper.request_delay_ms);

    println!("\nSequences:");
    println!("  Endpoint: {}", config.sequences.endpoint);
    println!("  Batch size: {}", config.sequences.chunk_size);

    println!("\nClustering:");
    println!("  Binary: {}", config.clustering.binary);
    println!("  Identity threshold: {:.2}", config.clustering.threshold);
    println!("  Fallback: {}", config.clustering.fallback_path.display());

    println!("\nOutput ({}):", config.output.data_dir.display());
    for path in [
        config.output.gh_path(),
        config.output.gt_path(),
        config.output.clean_ids_path(),
        config.output.fasta_path(),
        config.output.final_dataset_path(),
    ] {
        println!("  - {}", path.display());
    }

    let families = (plan.gh.1 - plan.gh.0 + 1) + (plan.gt.1 - plan.gt.0 + 1);
    println!("\n✓ Configuration is valid");
    println!("✓ Would request {} family pages", families);
}
