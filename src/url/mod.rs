//! URL handling for Mailtrawl
//!
//! Crawlable addresses are absolute `http`/`https` URLs. No canonicalization is
//! applied beyond what the parser itself performs, so two addresses are the same
//! page exactly when their parsed forms serialize identically.

use crate::UrlError;
use url::Url;

/// Parses a string into a crawlable URL
///
/// Surrounding whitespace is ignored. The scheme must be `http` or `https` and
/// the URL must carry a host.
///
/// # Arguments
///
/// * `input` - The raw URL string (user input or an extracted match)
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The string is not a crawlable URL
///
/// # Examples
///
/// ```
/// use mailtrawl::url::parse_url;
///
/// let url = parse_url("http://example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/");
/// assert!(parse_url("ftp://example.com").is_err());
/// ```
pub fn parse_url(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| UrlError::Parse(format!("{}: {}", trimmed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::UnsupportedScheme(url.scheme().to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost(trimmed.to_string())),
    }
}
