//! HTTP fetcher implementation
//!
//! This module handles page retrieval for the crawler, including:
//! - The `Fetcher` trait the crawl engine depends on
//! - Building HTTP clients with the configured user agent and timeouts
//! - A single GET per fetch, with no retries
//! - Error classification into `FetchError`

use crate::config::Config;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A successfully retrieved page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: Url,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

impl FetchedPage {
    /// Creates a page with a 200 status
    pub fn new(url: Url, body: impl Into<String>) -> Self {
        Self {
            url,
            status_code: 200,
            body: body.into(),
        }
    }

    /// The body as a sequence of lines, in document order
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.body.lines()
    }
}

/// Retrieves the content of a single URL
///
/// Implementations perform exactly one retrieval attempt. Any failure,
/// including a timeout imposed by the implementation, is reported as a
/// `FetchError`; retry policy belongs to the caller.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches a URL and returns its body
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// Builds the user agent string from configuration
///
/// Format: `Name/Version`, followed by ` (+ContactURL; ContactEmail)` when any
/// contact detail is configured.
pub fn user_agent_string(config: &Config) -> String {
    let ua = &config.user_agent;
    let base = format!("{}/{}", ua.crawler_name, ua.crawler_version);

    match (&ua.contact_url, &ua.contact_email) {
        (Some(contact_url), Some(contact_email)) => {
            format!("{} (+{}; {})", base, contact_url, contact_email)
        }
        (Some(contact_url), None) => format!("{} (+{})", base, contact_url),
        (None, Some(contact_email)) => format!("{} ({})", base, contact_email),
        (None, None) => base,
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use mailtrawl::config::Config;
/// use mailtrawl::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .timeout(Duration::from_secs(config.fetcher.timeout_secs))
        .connect_timeout(Duration::from_secs(config.fetcher.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from configuration
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// Fetches a URL with a single GET request
    ///
    /// # Error Classification
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | Non-2xx status | `FetchError::Status` |
    /// | Timeout (request or body) | `FetchError::Timeout` |
    /// | Connection/TLS/redirect failure | `FetchError::Http` |
    /// | Body cannot be read | `FetchError::Body` |
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        let final_url = response.url().clone();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        Ok(FetchedPage {
            url: final_url,
            status_code: status.as_u16(),
            body,
        })
    }
}

/// Maps a transport error onto a fetch error
fn classify_error(url: &Url, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserAgentConfig;

    fn config_with_contacts(url: Option<&str>, email: Option<&str>) -> Config {
        Config {
            user_agent: UserAgentConfig {
                crawler_name: "TestCrawler".to_string(),
                crawler_version: "1.0".to_string(),
                contact_url: url.map(str::to_string),
                contact_email: email.map(str::to_string),
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_format_with_contacts() {
        let config = config_with_contacts(Some("https://example.com/about"), Some("admin@example.com"));
        assert_eq!(
            user_agent_string(&config),
            "TestCrawler/1.0 (+https://example.com/about; admin@example.com)"
        );
    }

    #[test]
    fn test_user_agent_format_without_contacts() {
        let config = config_with_contacts(None, None);
        assert_eq!(user_agent_string(&config), "TestCrawler/1.0");
    }

    #[test]
    fn test_user_agent_format_partial_contacts() {
        let config = config_with_contacts(None, Some("admin@example.com"));
        assert_eq!(user_agent_string(&config), "TestCrawler/1.0 (admin@example.com)");
    }

    #[test]
    fn test_fetched_page_lines() {
        let url = Url::parse("http://example.com/").unwrap();
        let page = FetchedPage::new(url, "first\r\nsecond\nthird");
        let lines: Vec<_> = page.lines().collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
        assert_eq!(page.status_code, 200);
    }

    // Network behaviour is covered with wiremock in the integration tests
}
