//! Interactive console driver
//!
//! Prompts for a starting URL, seeds the engine, then crawls one page per
//! confirmation until the user stops or the frontier runs dry. Input and output
//! are generic so the driver runs the same against a terminal or a buffer.

use crate::crawler::{CrawlEngine, Fetcher};
use crate::output::{write_results, write_step_report};
use crate::url::parse_url;
use crate::CrawlerError;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};

/// Console driver behaviour
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    /// Clear the terminal before each step and before the results
    pub clear_screen: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

/// Clears the terminal and homes the cursor
///
/// Failures are ignored: output that is not a terminal just gets the escape
/// sequences or nothing at all.
pub fn clear_console<W: Write>(out: &mut W) {
    let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0));
}

/// Reads the next whitespace-separated token, skipping blank lines
///
/// Returns `None` at end of input.
fn read_token<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Runs the interactive crawl loop
///
/// # Flow
///
/// 1. Prompt for a URL; malformed input or an unreachable seed prints the
///    error and prompts again
/// 2. Print what the seed page held and what remains, then ask whether to
///    continue; each `y` crawls one more page and reports it the same way
/// 3. On `n` (or anything but `y`), end of input, or an empty frontier, print
///    the full results
///
/// # Arguments
///
/// * `engine` - A freshly constructed engine
/// * `input` - Source of user answers
/// * `out` - Destination for prompts and reports
/// * `initial_url` - Used as the first answer to the URL prompt, if given
/// * `options` - Display options
///
/// # Returns
///
/// * `Ok(())` - The session ended normally (including end of input at the URL prompt)
/// * `Err(CrawlerError)` - Reading input or writing output failed
pub async fn run_interactive<F, R, W>(
    engine: &mut CrawlEngine<F>,
    input: &mut R,
    out: &mut W,
    initial_url: Option<String>,
    options: ConsoleOptions,
) -> Result<(), CrawlerError>
where
    F: Fetcher,
    R: BufRead,
    W: Write,
{
    let mut candidate = initial_url;

    let mut report = loop {
        let raw = match candidate.take() {
            Some(raw) => raw,
            None => {
                write!(out, "Enter a URL to start crawling: ")?;
                out.flush()?;
                match read_token(input)? {
                    Some(raw) => raw,
                    None => {
                        writeln!(out)?;
                        return Ok(());
                    }
                }
            }
        };

        let url = match parse_url(&raw) {
            Ok(url) => url,
            Err(e) => {
                writeln!(out, "Error: {}\n", e)?;
                continue;
            }
        };

        if options.clear_screen {
            clear_console(out);
        }
        writeln!(out, "\nCrawling...")?;

        match engine.seed(&url).await {
            Ok(report) => {
                tracing::info!("Seeded from {}: {}", url, report);
                break report;
            }
            Err(e) => {
                writeln!(out, "Error: {}\n", e)?;
            }
        }
    };

    loop {
        write_step_report(out, &report, engine.last_visited(), engine.pending_count())?;

        if engine.is_exhausted() {
            writeln!(out, "\nNo URLs left to visit.")?;
            break;
        }

        write!(out, "Would you like to crawl the next URL (y/n)? ")?;
        out.flush()?;

        match read_token(input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {}
            _ => break,
        }

        if options.clear_screen {
            clear_console(out);
        }
        writeln!(out, "\nCrawling...")?;
        report = engine.step().await;
    }

    if options.clear_screen {
        clear_console(out);
    }
    write_results(
        out,
        engine.emails().all(),
        engine.frontier().visited(),
        engine.frontier().pending(),
    )?;
    out.flush()?;

    Ok(())
}
