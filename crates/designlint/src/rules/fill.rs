//! Fill style rule.

use designlint_model::{Mixable, Node, NodeType, StyleRef};

use crate::candidates::{resolve_candidates, Catalogs};
use crate::matchers::FillMatcher;
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::{LintError, StyleRule, SHAPES, SHAPES_AND_TEXT};

pub(crate) const MISSING_FILL_STYLE: &str = "Missing fill style";

/// Rule: fill/missing-style
/// Detects visible fills that are set directly instead of through a style.
pub struct FillRule {
    targets: &'static [NodeType],
}

impl FillRule {
    /// Applies to rectangles and text.
    pub fn new() -> Self {
        Self {
            targets: SHAPES_AND_TEXT,
        }
    }

    /// Applies to rectangles only.
    pub fn shapes_only() -> Self {
        Self { targets: SHAPES }
    }
}

impl Default for FillRule {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRule for FillRule {
    fn id(&self) -> &'static str {
        "fill/missing-style"
    }

    fn description(&self) -> &'static str {
        "Fill is not bound to a fill style"
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Fill
    }

    fn applies_to(&self) -> &[NodeType] {
        self.targets
    }

    fn check(&self, node: &Node, catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError> {
        Ok(check_fills(node, catalogs))
    }
}

/// Checks a node's fills and ranks fill styles that could replace them.
pub fn check_fills(node: &Node, catalogs: &Catalogs<'_>) -> Option<ErrorRecord> {
    let fills = match &node.fills {
        Mixable::Mixed => {
            return Some(
                ErrorRecord::new(node.handle(), ErrorKind::Fill, MISSING_FILL_STYLE)
                    .with_value("Mixed values"),
            )
        }
        Mixable::Value(fills) => fills,
    };

    if fills.is_empty() || !node.visible {
        return None;
    }

    match node.fill_style_id {
        // A partially styled range cannot be linted safely.
        StyleRef::Mixed => return None,
        StyleRef::Bound(_) => return None,
        StyleRef::Unbound => {}
    }

    let first = &fills[0];
    if first.is_media() || !first.visible {
        return None;
    }

    let resolution = resolve_candidates(&FillMatcher::new(first), catalogs);
    let error = ErrorRecord::new(node.handle(), ErrorKind::Fill, MISSING_FILL_STYLE)
        .with_value(first.describe());

    Some(resolution.attach_to(error))
}
