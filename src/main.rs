//! Mailtrawl main entry point
//!
//! This is the command-line interface for the Mailtrawl email and link crawler.

use anyhow::{bail, Context};
use clap::Parser;
use mailtrawl::config::{load_config_or_default, Config};
use mailtrawl::console::{run_interactive, ConsoleOptions};
use mailtrawl::crawler::crawl;
use mailtrawl::output::{generate_markdown_summary, write_summary};
use mailtrawl::{parse_url, CrawlEngine};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mailtrawl: a breadth-first email and link crawler
///
/// Mailtrawl fetches a starting page, records every email address it finds,
/// and follows the absolute URLs it finds one page at a time. By default it
/// asks before each page; `--unattended` crawls until nothing is left.
#[derive(Parser, Debug)]
#[command(name = "mailtrawl")]
#[command(version)]
#[command(about = "A breadth-first email and link crawler", long_about = None)]
struct Cli {
    /// URL to start crawling from (prompted for when omitted in interactive mode)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Crawl until the frontier is exhausted without prompting
    #[arg(long, requires = "url")]
    unattended: bool,

    /// Stop an unattended crawl after this many pages, seed included
    #[arg(long, value_name = "N", requires = "unattended")]
    max_pages: Option<usize>,

    /// Write a markdown summary of an unattended crawl to this file
    #[arg(long, value_name = "FILE", requires = "unattended")]
    summary: Option<PathBuf>,

    /// Do not clear the terminal between interactive steps
    #[arg(long, conflicts_with = "unattended")]
    no_clear: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity and mode
    setup_logging(cli.verbose, cli.quiet, cli.unattended);

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e).context("could not load configuration");
        }
    };

    if let Some(path) = &cli.config {
        tracing::info!("Configuration loaded from: {}", path.display());
    }

    if cli.unattended {
        handle_unattended(config, &cli).await
    } else {
        handle_interactive(&config, &cli).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Interactive sessions default to warnings only so log lines do not break up
/// the prompts. Logs always go to stderr.
fn setup_logging(verbose: u8, quiet: bool, unattended: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match (verbose, unattended) {
            (0, false) => EnvFilter::new("mailtrawl=warn,warn"),
            (0, true) => EnvFilter::new("mailtrawl=info,warn"),
            (1, _) => EnvFilter::new("mailtrawl=debug,info"),
            (2, _) => EnvFilter::new("mailtrawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles `--unattended`: crawls to completion and prints the results
async fn handle_unattended(mut config: Config, cli: &Cli) -> anyhow::Result<()> {
    let Some(raw) = cli.url.as_deref() else {
        bail!("a starting URL is required in unattended mode");
    };
    let seed = parse_url(raw).with_context(|| format!("invalid starting URL '{}'", raw))?;

    if let Some(limit) = cli.max_pages {
        if limit == 0 {
            bail!("--max-pages must be at least 1");
        }
        config.crawler.max_pages = Some(limit);
    }

    let summary = match crawl(&config, &seed).await {
        Ok(summary) => {
            tracing::info!("Crawl completed successfully");
            summary
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &summary)?;
    out.flush()?;

    if let Some(path) = &cli.summary {
        generate_markdown_summary(&summary, path)
            .with_context(|| format!("could not write summary to {}", path.display()))?;
        println!("\nSummary written to: {}", path.display());
    }

    Ok(())
}

/// Handles the default interactive console session
async fn handle_interactive(config: &Config, cli: &Cli) -> anyhow::Result<()> {
    let mut engine = CrawlEngine::from_config(config).context("could not build HTTP client")?;

    let options = ConsoleOptions {
        clear_screen: !cli.no_clear,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    run_interactive(&mut engine, &mut input, &mut out, cli.url.clone(), options).await?;

    Ok(())
}
