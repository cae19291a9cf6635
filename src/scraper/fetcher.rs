//! HTTP fetcher for family structure pages
//!
//! This module handles all page requests of the scraper, including:
//! - Building the HTTP client with a descriptive user agent string
//! - GET requests for page content
//! - Classifying failures so the family loop can skip them

use crate::config::{ScraperConfig, UserAgentConfig};
use reqwest::Client;
use std::time::Duration;

/// Result of a page fetch
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-success status (missing family pages
    /// come back as 404)
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, body read failure)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Formats the user agent string
///
/// Format: `Name/Version`, followed by ` (+ContactURL; ContactEmail)` when any
/// contact detail is configured.
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    let contacts: Vec<&str> = [config.contact_url.as_str(), config.contact_email.as_str()]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect();

    if contacts.is_empty() {
        format!("{}/{}", config.crawler_name, config.crawler_version)
    } else {
        format!(
            "{}/{} (+{})",
            config.crawler_name,
            config.crawler_version,
            contacts.join("; ")
        )
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `scraper` - Scraper settings (timeout)
/// * `user_agent` - The user agent configuration
///
/// # Example
///
/// ```no_run
/// use cazy_harvest::config::{ScraperConfig, UserAgentConfig};
/// use cazy_harvest::scraper::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    scraper: &ScraperConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(user_agent))
        .timeout(Duration::from_secs(scraper.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page
///
/// No retries are made: any failure is reported once and the caller moves on.
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 2xx | Success |
/// | Other HTTP status | HttpError |
/// | Timeout / connection / body error | NetworkError |
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            FetchResult::NetworkError { error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestHarvester".to_string(),
            crawler_version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&ScraperConfig::default(), &create_test_config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format() {
        assert_eq!(
            user_agent_string(&create_test_config()),
            "TestHarvester/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[test]
    fn test_user_agent_without_contacts() {
        let config = UserAgentConfig {
            contact_url: String::new(),
            contact_email: String::new(),
            ..create_test_config()
        };
        assert_eq!(user_agent_string(&config), "TestHarvester/1.0");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = build_http_client(&ScraperConfig::default(), &create_test_config()).unwrap();
        let result = fetch_page(&client, "http://127.0.0.1:1/GH1_structure.html").await;
        assert!(matches!(result, FetchResult::NetworkError { .. }));
    }
}
