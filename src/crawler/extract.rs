//! Pattern-based extraction of email addresses and URLs
//!
//! Extraction works on raw text, one line at a time. No markup is parsed: a URL
//! inside an attribute, a comment or plain prose is found the same way.
//!
//! # Per-line rule
//!
//! Each line yields at most one item, the first match only. The email pattern is
//! tried first; when it matches, the line is done and the URL pattern is not
//! consulted at all, even if the line also contains a URL.

use regex::Regex;
use std::sync::LazyLock;

/// Local part of word characters and dots, `@`, a word-character domain
/// segment, then one or more dot-separated suffix segments
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_.]+@[A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)+")
        .expect("hardcoded email pattern is valid")
});

/// `http://` or `https://`, host and path characters containing at least one
/// dot, then a trailing path segment. `:` is a host character so explicit
/// ports survive.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://[A-Za-z0-9_.:/-]+\.[A-Za-z0-9_.:/-]+(?:[A-Za-z0-9_=-]|%[0-9A-Fa-f]{2})+",
    )
    .expect("hardcoded URL pattern is valid")
});

/// The single item extracted from a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    /// An email address candidate
    Email(&'a str),

    /// A raw absolute URL candidate, not yet parsed
    Url(&'a str),
}

/// Extracts at most one item from a line of text
///
/// # Arguments
///
/// * `line` - A single line of page content
///
/// # Returns
///
/// * `Some(Extracted::Email)` - The first email match, if any
/// * `Some(Extracted::Url)` - The first URL match, only when the line has no email
/// * `None` - Nothing matched
///
/// # Example
///
/// ```
/// use mailtrawl::crawler::{extract_line, Extracted};
///
/// assert_eq!(extract_line("mail a@b.com"), Some(Extracted::Email("a@b.com")));
/// assert_eq!(
///     extract_line("see http://a.com/x"),
///     Some(Extracted::Url("http://a.com/x"))
/// );
/// assert_eq!(extract_line("a@b.com and http://a.com/x"), Some(Extracted::Email("a@b.com")));
/// ```
pub fn extract_line(line: &str) -> Option<Extracted<'_>> {
    if let Some(email) = find_email(line) {
        return Some(Extracted::Email(email));
    }

    find_url(line).map(Extracted::Url)
}

/// Returns the first email match in the text
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str())
}

/// Returns the first URL match in the text
pub fn find_url(text: &str) -> Option<&str> {
    URL_PATTERN.find(text).map(|m| m.as_str())
}
