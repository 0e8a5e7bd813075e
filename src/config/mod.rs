//! Configuration module for Mailtrawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: every setting has a default.
//!
//! # Example
//!
//! ```no_run
//! use mailtrawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mailtrawl.toml")).unwrap();
//! println!("Requests time out after {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, FetcherConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
