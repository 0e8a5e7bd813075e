//! Frontier of pending URLs and the set of URLs already visited
//!
//! Pending URLs are kept in discovery order and handed out first-in, first-out.
//! A URL is accepted at most once over the lifetime of a frontier: while it is
//! pending it cannot be queued again, and once it has been marked visited it is
//! rejected for good, whether or not its fetch succeeded.

use crate::CrawlerError;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO queue of URLs waiting to be crawled plus the visited set
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    pending: VecDeque<Url>,

    /// Membership index for `pending`
    pending_set: HashSet<Url>,

    /// URLs already popped, in visitation order
    visited: Vec<Url>,

    /// Membership index for `visited`
    visited_set: HashSet<Url>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL to the back of the queue
    ///
    /// # Returns
    ///
    /// `true` if the URL was newly queued, `false` if it is already pending or
    /// has already been visited
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.visited_set.contains(&url) || self.pending_set.contains(&url) {
            return false;
        }

        tracing::trace!("Queued {}", url);
        self.pending_set.insert(url.clone());
        self.pending.push_back(url);
        true
    }

    /// Removes and returns the URL at the head of the queue
    ///
    /// The caller is responsible for recording the URL with [`Frontier::mark_visited`].
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - The oldest pending URL
    /// * `Err(CrawlerError::EmptyFrontier)` - Nothing is pending
    pub fn dequeue(&mut self) -> Result<Url, CrawlerError> {
        let url = self.pending.pop_front().ok_or(CrawlerError::EmptyFrontier)?;
        self.pending_set.remove(&url);
        Ok(url)
    }

    /// Records a URL as visited so it is never queued again
    ///
    /// Marking is idempotent: visitation order keeps the first mark only.
    /// A URL that is still pending is dropped from the queue.
    pub fn mark_visited(&mut self, url: Url) {
        if self.pending_set.remove(&url) {
            self.pending.retain(|pending| pending != &url);
        }

        if self.visited_set.insert(url.clone()) {
            self.visited.push(url);
        }
    }

    /// Returns whether no URL is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the number of pending URLs
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the number of visited URLs
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Returns whether the URL is waiting in the queue
    pub fn is_pending(&self, url: &Url) -> bool {
        self.pending_set.contains(url)
    }

    /// Returns whether the URL has already been visited
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited_set.contains(url)
    }

    /// Pending URLs in the order they will be visited
    pub fn pending(&self) -> impl Iterator<Item = &Url> + Clone + '_ {
        self.pending.iter()
    }

    /// Visited URLs in visitation order
    pub fn visited(&self) -> &[Url] {
        &self.visited
    }

    /// The most recently visited URL
    pub fn last_visited(&self) -> Option<&Url> {
        self.visited.last()
    }
}
