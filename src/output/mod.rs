//! Output module for rendering crawl progress and results
//!
//! This module handles:
//! - Per-step reports for the console driver
//! - The final listing of emails, visited URLs and pending URLs
//! - Markdown summaries of unattended runs

mod markdown;
mod summary;

pub use markdown::{format_markdown_summary, generate_markdown_summary};
pub use summary::CrawlSummary;

use crate::crawler::CrawlReport;
use std::io::{self, Write};
use url::Url;

/// Picks the singular or plural form for a count
fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Writes the report printed after each console step
///
/// # Arguments
///
/// * `out` - Destination writer
/// * `report` - Counts returned by the step
/// * `last_visited` - The most recently visited URL, if any
/// * `pending` - Number of URLs left in the frontier
pub fn write_step_report<W: Write>(
    out: &mut W,
    report: &CrawlReport,
    last_visited: Option<&Url>,
    pending: usize,
) -> io::Result<()> {
    match last_visited {
        Some(url) => writeln!(out, "Visited {}", url)?,
        None => writeln!(out, "Nothing visited yet")?,
    }

    writeln!(
        out,
        "\tFound {} new {}",
        report.new_emails,
        plural(report.new_emails, "email", "emails")
    )?;
    writeln!(
        out,
        "\tFound {} new {}",
        report.new_urls,
        plural(report.new_urls, "URL", "URLs")
    )?;
    writeln!(
        out,
        "\nThere {} currently {} {} left to visit",
        plural(pending, "is", "are"),
        pending,
        plural(pending, "URL", "URLs")
    )?;

    Ok(())
}

/// Writes the full results listing shown when a crawl ends
pub fn write_results<'a, W, I>(
    out: &mut W,
    emails: &[String],
    visited: &[Url],
    pending: I,
) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Url>,
{
    writeln!(out, "Results")?;
    writeln!(out, "{}", "-".repeat(60))?;

    writeln!(out, "\nEmails Found:")?;
    for email in emails {
        writeln!(out, "\t{}", email)?;
    }

    writeln!(out, "\nURLs Visited:")?;
    for url in visited {
        writeln!(out, "\t{}", url)?;
    }

    writeln!(out, "\nURLs Left to Visit:")?;
    for url in pending {
        writeln!(out, "\t{}", url)?;
    }

    Ok(())
}

/// Writes the results listing for a finished unattended run
pub fn write_summary<W: Write>(out: &mut W, summary: &CrawlSummary) -> io::Result<()> {
    write_results(out, &summary.emails, &summary.visited, &summary.pending)?;

    writeln!(
        out,
        "\nCrawled {} {} ({} skipped) in {}s",
        summary.pages_crawled,
        plural(summary.pages_crawled, "page", "pages"),
        summary.fetch_failures,
        summary.duration_seconds()
    )?;

    Ok(())
}
