//! designlint CLI library.
//!
//! This crate provides the command implementations behind the `designlint`
//! binary: document and config loading, linting, outlines, and rule listing.

pub mod commands;
pub mod config;
