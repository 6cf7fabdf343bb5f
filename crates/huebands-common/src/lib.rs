//! Common utilities for the huebands generator.
//!
//! This crate provides shared infrastructure used by the image library and
//! the command-line front end:
//! - **Warning System** - colored, deduplicated diagnostics on stderr

pub mod warning;
