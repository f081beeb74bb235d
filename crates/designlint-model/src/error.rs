//! Error types for loading and parsing model data.

use thiserror::Error;

/// Errors that can occur while loading a document or parsing model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read a document from disk.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the node schema.
    #[error("failed to parse document: {0}")]
    Json(#[from] serde_json::Error),

    /// A hex color string is not of the form `#rrggbb`.
    #[error("invalid hex color: {0:?}")]
    InvalidHexColor(String),
}
