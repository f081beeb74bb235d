//! Stroke style rule.

use designlint_model::{describe_fills, Mixable, Node, NodeType, StyleRef};

use crate::candidates::Catalogs;
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::{LintError, StyleRule, SHAPES_AND_TEXT};

const MISSING_STROKE_STYLE: &str = "Missing stroke style";

/// Rule: stroke/missing-style
/// Detects strokes that are not bound to a stroke style.
pub struct StrokeRule;

impl StyleRule for StrokeRule {
    fn id(&self) -> &'static str {
        "stroke/missing-style"
    }

    fn description(&self) -> &'static str {
        "Stroke is not bound to a stroke style"
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Stroke
    }

    fn applies_to(&self) -> &[NodeType] {
        SHAPES_AND_TEXT
    }

    fn check(&self, node: &Node, _catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError> {
        Ok(check_strokes(node))
    }
}

/// Checks a node's strokes. Strokes are never matched against catalogs.
pub fn check_strokes(node: &Node) -> Option<ErrorRecord> {
    if node.strokes.is_empty() || !node.visible || node.stroke_style_id != StyleRef::Unbound {
        return None;
    }

    let error = ErrorRecord::new(node.handle(), ErrorKind::Stroke, MISSING_STROKE_STYLE);
    let weight = match node.stroke_weight {
        Mixable::Mixed => return Some(error.with_value("Mixed sizes or alignment")),
        Mixable::Value(weight) => weight,
    };

    let fill = describe_fills(&node.strokes).unwrap_or_default();
    Some(error.with_value(format!("{} / {} / {}", fill, weight, node.stroke_align)))
}
