//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetcher` trait
//! - Line-by-line email and URL extraction
//! - The step-wise crawl engine

mod engine;
mod extract;
mod fetcher;

pub use engine::{CrawlEngine, CrawlReport};
pub use extract::{extract_line, find_email, find_url, Extracted};
pub use fetcher::{build_http_client, user_agent_string, FetchedPage, Fetcher, HttpFetcher};

use crate::config::Config;
use crate::CrawlerError;
use crate::output::CrawlSummary;

/// Runs a complete unattended crawl
///
/// This is the main entry point for a run-to-completion crawl. It will:
/// 1. Build the HTTP client from configuration
/// 2. Fetch the seed page
/// 3. Step through the frontier until it is empty or the page limit is reached
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed` - The URL to start from
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed
/// * `Err(CrawlerError)` - The client could not be built or the seed could not be fetched
pub async fn crawl(config: &Config, seed: &url::Url) -> Result<CrawlSummary, CrawlerError> {
    let mut engine = CrawlEngine::from_config(config)?;
    let summary = engine.run(seed, config.crawler.max_pages).await?;
    Ok(summary)
}
