//! Crawl summary produced by an unattended run

use crate::crawler::CrawlReport;
use chrono::{DateTime, Utc};
use url::Url;

/// Final state of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// The URL the crawl started from
    pub seed: Url,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Pages fetched and scanned successfully
    pub pages_crawled: usize,

    /// URLs skipped because their fetch failed
    pub fetch_failures: usize,

    /// Discoveries summed over every crawled page
    pub totals: CrawlReport,

    /// Emails in first-seen order
    pub emails: Vec<String>,

    /// URLs in visitation order
    pub visited: Vec<Url>,

    /// URLs still waiting when the crawl stopped
    pub pending: Vec<Url>,
}

impl CrawlSummary {
    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Share of visited URLs that were fetched successfully, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_crawled + self.fetch_failures;
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_crawled as f64 / attempted as f64) * 100.0
    }

    /// Returns true if the crawl stopped with URLs still pending
    pub fn is_partial(&self) -> bool {
        !self.pending.is_empty()
    }
}
