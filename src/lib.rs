//! Cazy-Harvest: a ligand-bound enzyme dataset builder
//!
//! This crate scrapes the structure pages of CAZy glycoside hydrolase (GH) and
//! glycosyltransferase (GT) families, extracts normalized structure records from
//! their markup, filters them down to ligand-bound UniProt entries, downloads the
//! matching sequences and reduces redundancy by clustering.

pub mod clustering;
pub mod config;
pub mod dataset;
pub mod extractor;
pub mod family;
pub mod output;
pub mod pipeline;
pub mod scraper;
pub mod sequences;

use thiserror::Error;

/// Main error type for Cazy-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Table error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Clustering error: {0}")]
    Clustering(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Cazy-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extractor::{extract_entries, StructureEntry};
pub use family::{FamilyTarget, FamilyType};
