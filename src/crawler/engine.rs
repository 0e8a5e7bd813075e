//! Crawl engine - step-wise crawl orchestration
//!
//! The engine owns the frontier, the visited set and the email store, and is the
//! only thing that mutates them. Drivers advance a crawl one page at a time with
//! [`CrawlEngine::step`], or hand control over entirely with [`CrawlEngine::run`],
//! and read results back through snapshots.
//!
//! # Failure policy
//!
//! - `seed`/`crawl_one` surface fetch failures to the caller and change nothing.
//! - `step`/`crawl_next` swallow fetch failures and move on to the next pending
//!   URL. A failed URL stays visited and is never fetched again.

use crate::config::Config;
use crate::crawler::extract::{extract_line, Extracted};
use crate::crawler::fetcher::{FetchedPage, Fetcher, HttpFetcher};
use crate::output::CrawlSummary;
use crate::state::{EmailStore, Frontier};
use crate::url::parse_url;
use crate::{CrawlerError, FetchError};
use chrono::Utc;
use std::fmt;
use url::Url;

/// Counts of items newly discovered by one crawl operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Emails recorded for the first time
    pub new_emails: usize,

    /// URLs newly added to the frontier
    pub new_urls: usize,
}

impl CrawlReport {
    pub const fn new(new_emails: usize, new_urls: usize) -> Self {
        Self {
            new_emails,
            new_urls,
        }
    }

    /// Returns true if nothing new was found
    pub fn is_empty(&self) -> bool {
        self.new_emails == 0 && self.new_urls == 0
    }
}

impl std::ops::AddAssign for CrawlReport {
    fn add_assign(&mut self, other: Self) {
        self.new_emails += other.new_emails;
        self.new_urls += other.new_urls;
    }
}

impl fmt::Display for CrawlReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} new emails, {} new URLs", self.new_emails, self.new_urls)
    }
}

/// Breadth-first crawl engine
///
/// Not designed for concurrent use: every mutating operation takes `&mut self`.
pub struct CrawlEngine<F = HttpFetcher> {
    fetcher: F,
    frontier: Frontier,
    emails: EmailStore,

    /// Pages fetched and scanned successfully
    pages_crawled: usize,

    /// URLs skipped by `crawl_next` because their fetch failed
    fetch_failures: usize,
}

impl CrawlEngine<HttpFetcher> {
    /// Creates an engine backed by an HTTP fetcher built from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Engine with empty state
    /// * `Err(CrawlerError)` - The HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, CrawlerError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::new(fetcher))
    }
}

impl<F: Fetcher> CrawlEngine<F> {
    /// Creates an engine with empty state around the given fetcher
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            frontier: Frontier::new(),
            emails: EmailStore::new(),
            pages_crawled: 0,
            fetch_failures: 0,
        }
    }

    /// Fetches a single URL and merges what it contains
    ///
    /// Every line of the body goes through the extractor; each line's single
    /// match is recorded as an email or queued as a URL. The URL itself is not
    /// marked visited here.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Counts of newly recorded emails and newly queued URLs
    /// * `Err(FetchError)` - The fetch failed; no state was changed
    pub async fn crawl_one(&mut self, url: &Url) -> Result<CrawlReport, FetchError> {
        let page = self.fetcher.fetch(url).await?;
        Ok(self.absorb(&page))
    }

    /// Crawls a user-supplied starting URL
    ///
    /// Behaves like [`CrawlEngine::crawl_one`] and, on success, also records the
    /// URL as visited so a page linking to itself does not queue itself again.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mailtrawl::config::Config;
    /// use mailtrawl::crawler::CrawlEngine;
    /// use mailtrawl::url::parse_url;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut engine = CrawlEngine::from_config(&Config::default())?;
    /// let report = engine.seed(&parse_url("https://example.com")?).await?;
    /// println!("{}", report);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn seed(&mut self, url: &Url) -> Result<CrawlReport, FetchError> {
        let page = self.fetcher.fetch(url).await?;
        self.frontier.mark_visited(url.clone());
        Ok(self.absorb(&page))
    }

    /// Crawls the next reachable URL in the frontier
    ///
    /// Pops URLs from the head of the frontier, marking each visited, until one
    /// fetches successfully. URLs that fail are dropped. Each iteration consumes
    /// one pending URL and a failure queues nothing, so the loop ends after at
    /// most as many attempts as there were pending URLs.
    ///
    /// # Returns
    ///
    /// The report of the first successful page, or an empty report if the
    /// frontier is (or becomes) empty first
    pub async fn crawl_next(&mut self) -> CrawlReport {
        while let Ok(url) = self.frontier.dequeue() {
            self.frontier.mark_visited(url.clone());

            match self.crawl_one(&url).await {
                Ok(report) => {
                    tracing::info!("Crawled {}: {}", url, report);
                    return report;
                }
                Err(e) => {
                    self.fetch_failures += 1;
                    tracing::warn!("Skipping {}: {}", url, e);
                }
            }
        }

        tracing::debug!("Frontier is empty, nothing to crawl");
        CrawlReport::default()
    }

    /// Advances the crawl by one successfully fetched page
    pub async fn step(&mut self) -> CrawlReport {
        self.crawl_next().await
    }

    /// Runs a crawl to completion without interaction
    ///
    /// Seeds the engine, then steps until the frontier is exhausted or
    /// `max_pages` pages (the seed included) have been crawled.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSummary)` - Final state of the crawl
    /// * `Err(FetchError)` - The seed URL could not be fetched
    pub async fn run(
        &mut self,
        seed: &Url,
        max_pages: Option<usize>,
    ) -> Result<CrawlSummary, FetchError> {
        let started_at = Utc::now();
        let start_time = std::time::Instant::now();

        tracing::info!("Starting crawl at {}", seed);
        let mut totals = self.seed(seed).await?;

        while !self.frontier.is_empty() {
            if max_pages.is_some_and(|limit| self.pages_crawled >= limit) {
                tracing::info!("Reached page limit of {}", self.pages_crawled);
                break;
            }

            totals += self.step().await;

            if self.pages_crawled % 10 == 0 {
                let rate = self.pages_crawled as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages crawled, {} in frontier, {:.2} pages/sec",
                    self.pages_crawled,
                    self.frontier.pending_count(),
                    rate
                );
            }
        }

        tracing::info!(
            "Crawl finished: {} pages crawled, {} skipped, in {:?}",
            self.pages_crawled,
            self.fetch_failures,
            start_time.elapsed()
        );

        Ok(CrawlSummary {
            seed: seed.clone(),
            started_at,
            finished_at: Utc::now(),
            pages_crawled: self.pages_crawled,
            fetch_failures: self.fetch_failures,
            totals,
            emails: self.emails_snapshot(),
            visited: self.visited_snapshot(),
            pending: self.frontier_snapshot(),
        })
    }

    /// Scans a fetched page and merges its discoveries
    fn absorb(&mut self, page: &FetchedPage) -> CrawlReport {
        let mut report = CrawlReport::default();

        for line in page.lines() {
            match extract_line(line) {
                Some(Extracted::Email(email)) => {
                    if self.emails.record(email) {
                        report.new_emails += 1;
                    }
                }
                Some(Extracted::Url(raw)) => match parse_url(raw) {
                    Ok(url) => {
                        if self.frontier.enqueue(url) {
                            report.new_urls += 1;
                        }
                    }
                    Err(e) => tracing::debug!("Ignoring extracted URL {}: {}", raw, e),
                },
                None => {}
            }
        }

        self.pages_crawled += 1;
        report
    }

    /// Emails found so far, in first-seen order
    pub fn emails_snapshot(&self) -> Vec<String> {
        self.emails.all().to_vec()
    }

    /// URLs waiting to be crawled, in visitation order
    pub fn frontier_snapshot(&self) -> Vec<Url> {
        self.frontier.pending().cloned().collect()
    }

    /// URLs already visited, in visitation order
    pub fn visited_snapshot(&self) -> Vec<Url> {
        self.frontier.visited().to_vec()
    }

    /// The most recently visited URL
    pub fn last_visited(&self) -> Option<&Url> {
        self.frontier.last_visited()
    }

    /// Read-only view of the email store
    pub fn emails(&self) -> &EmailStore {
        &self.emails
    }

    /// Read-only view of the frontier
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Number of URLs waiting to be crawled
    pub fn pending_count(&self) -> usize {
        self.frontier.pending_count()
    }

    /// Returns true once no URL is left to crawl
    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    pub fn pages_crawled(&self) -> usize {
        self.pages_crawled
    }

    pub fn fetch_failures(&self) -> usize {
        self.fetch_failures
    }
}
