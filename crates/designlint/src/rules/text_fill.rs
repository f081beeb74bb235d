//! Text color discipline rule.

use designlint_model::{Node, NodeType, StyleRef};

use crate::candidates::Catalogs;
use crate::matchers::normalize_style_key;
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::fill::check_fills;
use crate::rules::{LintError, StyleRule, TEXT};

/// Rule: fill/text-color
/// Detects text layers bound to fill styles reserved for other surfaces,
/// such as background colors. Unbound text fills fall back to the fill check
/// unless the fallback is turned off.
pub struct TextFillRule {
    forbidden: Vec<String>,
    fallback: bool,
}

impl TextFillRule {
    /// Keys may be given raw (`S:<key>,<rest>`) or bare.
    pub fn new<I, S>(forbidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            forbidden: forbidden
                .into_iter()
                .map(|key| normalize_style_key(key.as_ref()))
                .collect(),
            fallback: true,
        }
    }

    /// Sets whether unbound text fills go through the fill check.
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn forbidden(&self) -> &[String] {
        &self.forbidden
    }
}

impl StyleRule for TextFillRule {
    fn id(&self) -> &'static str {
        "fill/text-color"
    }

    fn description(&self) -> &'static str {
        "Text uses a fill style reserved for other layers"
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Fill
    }

    fn applies_to(&self) -> &[NodeType] {
        TEXT
    }

    fn check(&self, node: &Node, catalogs: &Catalogs<'_>) -> Result<Option<ErrorRecord>, LintError> {
        let error = match &node.fill_style_id {
            StyleRef::Mixed => Some(
                ErrorRecord::new(node.handle(), ErrorKind::Fill, "Mixing two styles together")
                    .with_value("Multiple Styles"),
            ),
            StyleRef::Bound(id) if self.forbidden.iter().any(|key| key == id.key()) => Some(
                ErrorRecord::new(node.handle(), ErrorKind::Fill, "Incorrect text color use")
                    .with_value("Using a background color on a text layer"),
            ),
            StyleRef::Bound(_) => None,
            StyleRef::Unbound if self.fallback => check_fills(node, catalogs),
            StyleRef::Unbound => None,
        };
        Ok(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designlint_model::{Mixable, Paint, Rgb};
    use pretty_assertions::assert_eq;

    fn heading() -> Node {
        let mut node = Node::new("7:1", "Heading", NodeType::Text);
        node.fills = Mixable::Value(vec![Paint::solid(Rgb::new(1.0, 1.0, 1.0), 1.0)]);
        node
    }

    fn rule() -> TextFillRule {
        TextFillRule::new(["S:4b93d40f,2:2", "surface"])
    }

    fn check(node: &Node) -> Option<ErrorRecord> {
        rule().check(node, &Catalogs::empty()).unwrap()
    }

    #[test]
    fn test_keys_are_normalized() {
        assert_eq!(rule().forbidden(), &["4b93d40f".to_string(), "surface".to_string()]);
    }

    #[test]
    fn test_forbidden_key() {
        let mut node = heading();
        node.fill_style_id = StyleRef::from_raw("S:4b93d40f,9:9");
        let error = check(&node).unwrap();
        assert_eq!(error.message, "Incorrect text color use");
        assert_eq!(error.value, "Using a background color on a text layer");
    }

    #[test]
    fn test_allowed_key() {
        let mut node = heading();
        node.fill_style_id = StyleRef::from_raw("S:ink,9:9");
        assert_eq!(check(&node), None);
    }

    #[test]
    fn test_mixed_styles() {
        let mut node = heading();
        node.fill_style_id = StyleRef::Mixed;
        let error = check(&node).unwrap();
        assert_eq!(error.kind, ErrorKind::Fill);
        assert_eq!(error.message, "Mixing two styles together");
        assert_eq!(error.value, "Multiple Styles");
    }

    #[test]
    fn test_unbound_falls_back_to_fill_check() {
        let error = check(&heading()).unwrap();
        assert_eq!(error.message, "Missing fill style");
        assert_eq!(error.value, "#ffffff");
    }

    #[test]
    fn test_fallback_off_keeps_discipline_checks() {
        let rule = rule().with_fallback(false);
        assert_eq!(rule.check(&heading(), &Catalogs::empty()).unwrap(), None);

        let mut node = heading();
        node.fill_style_id = StyleRef::from_raw("S:surface,1:1");
        let error = rule.check(&node, &Catalogs::empty()).unwrap().unwrap();
        assert_eq!(error.message, "Incorrect text color use");

        node.fill_style_id = StyleRef::Mixed;
        let error = rule.check(&node, &Catalogs::empty()).unwrap().unwrap();
        assert_eq!(error.value, "Multiple Styles");
    }
}
