//! State module for tracking crawl progress
//!
//! This module owns the collections a crawl accumulates.
//!
//! # Components
//!
//! - `Frontier`: FIFO queue of pending URLs plus the visited set
//! - `EmailStore`: Ordered, duplicate-free set of discovered email addresses

mod emails;
mod frontier;

// Re-export main types
pub use emails::EmailStore;
pub use frontier::Frontier;
