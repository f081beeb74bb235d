//! Text style rule.

use designlint_model::{Mixable, Node, NodeType, StyleRef};

use crate::candidates::{resolve_candidates, Catalogs};
use crate::matchers::{TextMatcher, TextSnapshot};
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::{LintError, StyleRule, TEXT};

const MISSING_TEXT_STYLE: &str = "Missing text style";

/// Rule: text/missing-style
/// Detects text layers whose typography is not bound to a text style.
pub struct TextRule;

impl StyleRule for TextRule {
    fn id(&self) -> &'static str {
        "text/missing-style"
    }

    fn description(&self) -> &'static str {
        "Typography is not bound to a text style"
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Text
    }

    fn applies_to(&self) -> &[NodeType] {
        TEXT
    }

    fn check(&self, node: &Node, catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError> {
        Ok(check_text(node, catalogs))
    }
}

/// Checks a text node's typography and ranks text styles that could replace it.
pub fn check_text(node: &Node, catalogs: &Catalogs<'_>) -> Option<ErrorRecord> {
    if node.text_style_id != StyleRef::Unbound || !node.visible {
        return None;
    }

    let error = ErrorRecord::new(node.handle(), ErrorKind::Text, MISSING_TEXT_STYLE);
    let (font, size) = match (&node.font_name, &node.font_size) {
        (Mixable::Value(font), Mixable::Value(size)) => (font, *size),
        _ => return Some(error.with_value("Mixed sizes or families")),
    };

    let snapshot = TextSnapshot::capture(node, font, size);
    let resolution = resolve_candidates(&TextMatcher::new(&snapshot), catalogs);

    Some(resolution.attach_to(error.with_value(snapshot.describe())))
}
