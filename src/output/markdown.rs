//! Markdown summary generation
//!
//! This module generates human-readable markdown summaries of crawl results,
//! including run statistics and the emails and URLs collected.

use crate::output::summary::CrawlSummary;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Generates a markdown summary file from a finished crawl
///
/// # Arguments
///
/// * `summary` - The crawl summary data
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(io::Error)` - Failed to write summary
pub fn generate_markdown_summary(summary: &CrawlSummary, output_path: &Path) -> io::Result<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl summary as markdown
pub fn format_markdown_summary(summary: &CrawlSummary) -> String {
    let mut md = String::new();

    md.push_str("# Mailtrawl Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", summary.seed));
    md.push_str(&format!("- **Started**: {}\n", summary.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", summary.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} seconds\n",
        summary.duration_seconds()
    ));
    md.push_str(&format!(
        "- **Status**: {}\n\n",
        if summary.is_partial() {
            "stopped with URLs pending"
        } else {
            "frontier exhausted"
        }
    ));

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Pages Crawled**: {}\n", summary.pages_crawled));
    md.push_str(&format!("- **Pages Skipped**: {}\n", summary.fetch_failures));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n",
        summary.success_rate()
    ));
    md.push_str(&format!("- **Emails Found**: {}\n", summary.emails.len()));
    md.push_str(&format!(
        "- **URLs Discovered**: {}\n\n",
        summary.totals.new_urls
    ));

    push_list(&mut md, "Emails Found", summary.emails.iter());
    push_list(&mut md, "URLs Visited", summary.visited.iter());
    push_list(&mut md, "URLs Left to Visit", summary.pending.iter());

    md
}

/// Appends a section with one bullet per item, or a placeholder when empty
fn push_list<T: std::fmt::Display>(
    md: &mut String,
    heading: &str,
    items: impl ExactSizeIterator<Item = T>,
) {
    md.push_str(&format!("## {} ({})\n\n", heading, items.len()));

    let mut any = false;
    for item in items {
        md.push_str(&format!("- {}\n", item));
        any = true;
    }
    if !any {
        md.push_str("_None_\n");
    }

    md.push('\n');
}
