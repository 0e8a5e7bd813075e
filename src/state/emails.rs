//! Deduplicated store of discovered email addresses

use std::collections::HashSet;

/// Insertion-ordered, duplicate-free set of email addresses
///
/// Emails are compared by exact string match; no case folding is performed.
#[derive(Debug, Default, Clone)]
pub struct EmailStore {
    emails: Vec<String>,
    seen: HashSet<String>,
}

impl EmailStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an email unless it is already present
    ///
    /// Returns `true` if the email was newly added.
    pub fn record(&mut self, email: &str) -> bool {
        if self.seen.contains(email) {
            return false;
        }

        tracing::trace!("Recorded email {}", email);
        self.seen.insert(email.to_string());
        self.emails.push(email.to_string());
        true
    }

    /// Returns whether the email has been recorded
    pub fn contains(&self, email: &str) -> bool {
        self.seen.contains(email)
    }

    /// All recorded emails in first-seen order
    pub fn all(&self) -> &[String] {
        &self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
