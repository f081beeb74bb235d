//! Lint rule trait and per-property rule modules.

use designlint_model::{Node, NodeType};

use crate::candidates::Catalogs;
use crate::report::{ErrorKind, ErrorRecord};

pub mod effect;
pub mod fill;
pub mod radius;
pub mod stroke;
pub mod text;
pub mod text_fill;

pub use effect::{EffectDescriptor, EffectRule};
pub use fill::FillRule;
pub use radius::RadiusRule;
pub use stroke::StrokeRule;
pub use text::TextRule;
pub use text_fill::TextFillRule;

/// Rectangles only.
pub(crate) const SHAPES: &[NodeType] = &[NodeType::Rectangle];
/// Text only.
pub(crate) const TEXT: &[NodeType] = &[NodeType::Text];
/// Rectangles and text.
pub(crate) const SHAPES_AND_TEXT: &[NodeType] = &[NodeType::Rectangle, NodeType::Text];

/// A rule that checks one style-bearing property of a node.
pub trait StyleRule: Send + Sync {
    /// Unique identifier (e.g., "fill/missing-style").
    fn id(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Category of the errors this rule emits.
    fn kind(&self) -> ErrorKind;

    /// Node types this rule applies to.
    fn applies_to(&self) -> &[NodeType];

    /// Checks one node. Returns at most one error.
    ///
    /// Fails only on malformed node data; the whole lint pass fails with it.
    fn check(&self, node: &Node, catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError>;
}

/// Errors that abort a lint pass.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The host supplied a node that violates the model's shape.
    #[error("malformed node {node_id}: {reason}")]
    MalformedNode { node_id: String, reason: String },
}

impl LintError {
    pub(crate) fn malformed(node: &Node, reason: impl Into<String>) -> Self {
        LintError::MalformedNode {
            node_id: node.id.clone(),
            reason: reason.into(),
        }
    }
}
