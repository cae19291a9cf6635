use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure for Cazy-Harvest
///
/// Every section is optional; missing keys fall back to the defaults of a
/// standard run against www.cazy.org and rest.uniprot.org.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub ranges: RangeConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub cleaning: CleaningConfig,
    pub sequences: SequenceConfig,
    pub clustering: ClusteringConfig,
}

/// Family page scraping behavior
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Base URL the family structure pages live under
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Pause after each family page (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,

    /// Request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.cazy.org".to_string(),
            request_delay_ms: 200,
            timeout_secs: 30,
        }
    }
}

/// Family number ranges for demo and full runs (inclusive)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    /// First family number of every range
    pub start: u32,

    #[serde(rename = "gh-demo-end")]
    pub gh_demo_end: u32,

    #[serde(rename = "gt-demo-end")]
    pub gt_demo_end: u32,

    #[serde(rename = "gh-full-end")]
    pub gh_full_end: u32,

    #[serde(rename = "gt-full-end")]
    pub gt_full_end: u32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: 1,
            gh_demo_end: 5,
            gt_demo_end: 5,
            gh_full_end: 195,
            gt_full_end: 120,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the client
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the client (optional)
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for contact (optional)
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "cazy-harvest".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: String::new(),
            contact_email: String::new(),
        }
    }
}

/// Output file layout
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory all pipeline files are written to
    #[serde(rename = "data-dir")]
    pub data_dir: PathBuf,

    /// Structure table of GH families
    #[serde(rename = "gh-file")]
    pub gh_file: String,

    /// Structure table of GT families
    #[serde(rename = "gt-file")]
    pub gt_file: String,

    /// Deduplicated list of ligand-bound UniProt accessions
    #[serde(rename = "clean-ids-file")]
    pub clean_ids_file: String,

    /// Downloaded sequences
    #[serde(rename = "fasta-file")]
    pub fasta_file: String,

    /// Clustered, non-redundant sequences
    #[serde(rename = "final-dataset")]
    pub final_dataset: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            gh_file: "gh_data.tsv".to_string(),
            gt_file: "gt_data.tsv".to_string(),
            clean_ids_file: "clean_uniprot_ids.txt".to_string(),
            fasta_file: "all_sequences.fasta".to_string(),
            final_dataset: "dataset_final_90.fasta".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn gh_path(&self) -> PathBuf {
        self.data_dir.join(&self.gh_file)
    }

    pub fn gt_path(&self) -> PathBuf {
        self.data_dir.join(&self.gt_file)
    }

    pub fn clean_ids_path(&self) -> PathBuf {
        self.data_dir.join(&self.clean_ids_file)
    }

    pub fn fasta_path(&self) -> PathBuf {
        self.data_dir.join(&self.fasta_file)
    }

    pub fn final_dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.final_dataset)
    }
}

/// Filtering of the merged structure tables
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// UniProt column values that are not real accessions
    #[serde(rename = "junk-ids")]
    pub junk_ids: Vec<String>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            junk_ids: vec!["noID".to_string(), "unk".to_string()],
        }
    }
}

/// UniProt sequence download
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Accession batch endpoint
    pub endpoint: String,

    /// Accessions per request; large batches overflow the request URL
    #[serde(rename = "chunk-size")]
    pub chunk_size: usize,

    /// Pause after each batch (milliseconds)
    #[serde(rename = "batch-delay-ms")]
    pub batch_delay_ms: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://rest.uniprot.org/uniprotkb/accessions".to_string(),
            chunk_size: 200,
            batch_delay_ms: 500,
        }
    }
}

/// Redundancy reduction
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Clustering executable looked up on PATH
    pub binary: String,

    /// Sequence identity threshold
    pub threshold: f64,

    /// Word length
    #[serde(rename = "word-size")]
    pub word_size: u32,

    /// Memory limit (megabytes)
    #[serde(rename = "memory-mb")]
    pub memory_mb: u32,

    /// Precomputed clusters used when the executable is not installed
    #[serde(rename = "fallback-path")]
    pub fallback_path: PathBuf,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            binary: "cd-hit".to_string(),
            threshold: 0.90,
            word_size: 5,
            memory_mb: 16000,
            fallback_path: PathBuf::from("sample_data").join("reference_clusters.fasta"),
        }
    }
}
