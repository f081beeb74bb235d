//! CLI command implementations

pub mod lint;
pub mod outline;
pub mod rules;
