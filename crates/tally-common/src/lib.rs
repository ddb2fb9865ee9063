//! Common utilities for Tally.
//!
//! This crate provides shared infrastructure used by the counter and CLI crates:
//! - **Warning System** - colored, deduplicated terminal output for fallbacks

pub mod warning;
