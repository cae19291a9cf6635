use crate::config::types::{
    ClusteringConfig, Config, OutputConfig, RangeConfig, ScraperConfig, SequenceConfig,
    UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_range_config(&config.ranges)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    validate_sequence_config(&config.sequences)?;
    validate_clustering_config(&config.clustering)?;
    Ok(())
}

/// Validates scraper configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    validate_http_url("base-url", &config.base_url)?;

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates family ranges
fn validate_range_config(config: &RangeConfig) -> Result<(), ConfigError> {
    if config.start < 1 {
        return Err(ConfigError::Validation(
            "ranges.start must be >= 1".to_string(),
        ));
    }

    for (name, end) in [
        ("gh-demo-end", config.gh_demo_end),
        ("gt-demo-end", config.gt_demo_end),
        ("gh-full-end", config.gh_full_end),
        ("gt-full-end", config.gt_full_end),
    ] {
        if end < config.start {
            return Err(ConfigError::Validation(format!(
                "{} ({}) must not be below ranges.start ({})",
                name, end, config.start
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.crawler_name
        )));
    }

    if !config.contact_url.is_empty() {
        Url::parse(&config.contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    if !config.contact_email.is_empty() {
        validate_email(&config.contact_email)?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    for (name, value) in [
        ("gh-file", &config.gh_file),
        ("gt-file", &config.gt_file),
        ("clean-ids-file", &config.clean_ids_file),
        ("fasta-file", &config.fasta_file),
        ("final-dataset", &config.final_dataset),
    ] {
        if value.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    if config.gh_file == config.gt_file {
        return Err(ConfigError::Validation(
            "gh-file and gt-file must differ".to_string(),
        ));
    }

    Ok(())
}

/// Validates sequence download configuration
fn validate_sequence_config(config: &SequenceConfig) -> Result<(), ConfigError> {
    validate_http_url("sequences.endpoint", &config.endpoint)?;

    if config.chunk_size < 1 || config.chunk_size > 1000 {
        return Err(ConfigError::Validation(format!(
            "chunk-size must be between 1 and 1000, got {}",
            config.chunk_size
        )));
    }

    Ok(())
}

/// Validates clustering configuration
fn validate_clustering_config(config: &ClusteringConfig) -> Result<(), ConfigError> {
    if config.binary.is_empty() {
        return Err(ConfigError::Validation(
            "clustering.binary cannot be empty".to_string(),
        ));
    }

    if !(0.4..=1.0).contains(&config.threshold) {
        return Err(ConfigError::Validation(format!(
            "threshold must be between 0.4 and 1.0, got {}",
            config.threshold
        )));
    }

    if !(2..=5).contains(&config.word_size) {
        return Err(ConfigError::Validation(format!(
            "word-size must be between 2 and 5, got {}",
            config.word_size
        )));
    }

    Ok(())
}

/// Validates an absolute http(s) URL
fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, value
        )));
    }

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
