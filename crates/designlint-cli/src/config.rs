//! Loading documents and lint configuration from disk.

use anyhow::{Context, Result};
use designlint::LintConfig;
use designlint_model::Document;
use std::path::Path;

/// Parse a lint configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<LintConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = LintConfig::from_json(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_config_or_default(path: Option<&str>) -> Result<LintConfig> {
    match path {
        Some(path) => load_config(Path::new(path)),
        None => Ok(LintConfig::default()),
    }
}

/// Read a document snapshot.
pub fn load_document(path: &Path) -> Result<Document> {
    Document::from_file(path)
        .with_context(|| format!("Failed to load document: {}", path.display()))
}
