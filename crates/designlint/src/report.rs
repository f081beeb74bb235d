//! Lint report types for structured output.

use designlint_model::NodeRef;
use serde::{Deserialize, Serialize};

/// Property category an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Fill,
    Stroke,
    Text,
    Effects,
    Radius,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Fill => "fill",
            ErrorKind::Stroke => "stroke",
            ErrorKind::Text => "text",
            ErrorKind::Effects => "effects",
            ErrorKind::Radius => "radius",
        }
    }

    pub fn all() -> &'static [ErrorKind] {
        &[
            ErrorKind::Fill,
            ErrorKind::Stroke,
            ErrorKind::Text,
            ErrorKind::Effects,
            ErrorKind::Radius,
        ]
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog style offered as a fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCandidate {
    pub name: String,
    /// Raw style id as published by the catalog.
    pub id: String,
    /// Bare style key.
    pub key: String,
    /// Display string for the candidate.
    pub value: String,
    /// "Local Library" or the external library's name.
    pub source: String,
}

/// One non-conformance found on a node.
///
/// Records are created fresh on every lint pass and never modified once
/// emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The node the error was found on.
    pub node: NodeRef,

    #[serde(rename = "type")]
    pub kind: ErrorKind,

    /// Human-readable description (e.g. "Missing fill style").
    pub message: String,

    /// The node's current value rendered for display. Empty when not provided.
    #[serde(default)]
    pub value: String,

    /// Catalog styles exactly equal to the current value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<StyleCandidate>>,

    /// Close catalog styles, only present when there are no matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<StyleCandidate>>,
}

impl ErrorRecord {
    /// Creates a new error record with required fields.
    pub fn new(node: NodeRef, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            node,
            kind,
            message: message.into(),
            value: String::new(),
            matches: None,
            suggestions: None,
        }
    }

    /// Builder method to set the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Builder method to set exact matches.
    pub fn with_matches(mut self, matches: Vec<StyleCandidate>) -> Self {
        self.matches = Some(matches);
        self
    }

    /// Builder method to set suggestions.
    pub fn with_suggestions(mut self, suggestions: Vec<StyleCandidate>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    /// Returns the candidates a fix can choose from: matches when there are
    /// any, otherwise suggestions.
    pub fn alternatives(&self) -> &[StyleCandidate] {
        match (&self.matches, &self.suggestions) {
            (Some(matches), _) if !matches.is_empty() => matches.as_slice(),
            (_, Some(suggestions)) => suggestions.as_slice(),
            _ => &[],
        }
    }
}

/// Errors found on one visited node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub id: String,
    pub errors: Vec<ErrorRecord>,
}

/// Result of a lint pass.
///
/// `flat_errors` is the authoritative error set. `per_node_summaries` groups
/// the same records by visited node for display. Both are in traversal order:
/// a node's subtree comes before the node itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintOutcome {
    pub flat_errors: Vec<ErrorRecord>,
    pub per_node_summaries: Vec<NodeSummary>,
}

impl LintOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the errors of one visited node.
    pub fn add_node(&mut self, id: impl Into<String>, errors: Vec<ErrorRecord>) {
        self.flat_errors.extend(errors.iter().cloned());
        self.per_node_summaries.push(NodeSummary {
            id: id.into(),
            errors,
        });
    }

    /// True if no errors were found.
    pub fn is_clean(&self) -> bool {
        self.flat_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.flat_errors.len()
    }

    pub fn nodes_visited(&self) -> usize {
        self.per_node_summaries.len()
    }

    /// Number of errors of the given kind.
    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.flat_errors.iter().filter(|e| e.kind == kind).count()
    }

    /// Errors found on one node, if it was visited.
    pub fn errors_for(&self, node_id: &str) -> Option<&[ErrorRecord]> {
        self.per_node_summaries
            .iter()
            .find(|s| s.id == node_id)
            .map(|s| s.errors.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designlint_model::NodeType;
    use pretty_assertions::assert_eq;

    fn node() -> NodeRef {
        NodeRef {
            id: "1:2".to_string(),
            name: "Card".to_string(),
            node_type: NodeType::Rectangle,
        }
    }

    fn candidate(name: &str) -> StyleCandidate {
        StyleCandidate {
            name: name.to_string(),
            id: format!("S:{},1:1", name),
            key: name.to_string(),
            value: name.to_string(),
            source: "Local Library".to_string(),
        }
    }

    #[test]
    fn test_error_record_builder() {
        let record = ErrorRecord::new(node(), ErrorKind::Fill, "Missing fill style")
            .with_value("#ff0000")
            .with_matches(vec![candidate("red")]);

        assert_eq!(record.kind, ErrorKind::Fill);
        assert_eq!(record.value, "#ff0000");
        assert_eq!(record.matches.as_ref().map(Vec::len), Some(1));
        assert_eq!(record.suggestions, None);
    }

    #[test]
    fn test_minimal_record_shape() {
        let record = ErrorRecord::new(node(), ErrorKind::Stroke, "Missing stroke style");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "stroke");
        assert_eq!(json["value"], "");
        assert!(json.get("matches").is_none());
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn test_alternatives_prefer_matches() {
        let record = ErrorRecord::new(node(), ErrorKind::Text, "Missing text style")
            .with_suggestions(vec![candidate("close")]);
        assert_eq!(record.alternatives()[0].name, "close");

        let record = record.with_matches(vec![candidate("exact")]);
        assert_eq!(record.alternatives()[0].name, "exact");

        let bare = ErrorRecord::new(node(), ErrorKind::Text, "Missing text style");
        assert!(bare.alternatives().is_empty());
    }

    #[test]
    fn test_outcome_keeps_both_views() {
        let mut outcome = LintOutcome::new();
        outcome.add_node(
            "1:2",
            vec![ErrorRecord::new(node(), ErrorKind::Fill, "Missing fill style")],
        );
        outcome.add_node("1:1", vec![]);

        assert!(!outcome.is_clean());
        assert_eq!(outcome.error_count(), 1);
        assert_eq!(outcome.nodes_visited(), 2);
        assert_eq!(outcome.count_of(ErrorKind::Fill), 1);
        assert_eq!(outcome.count_of(ErrorKind::Text), 0);
        assert_eq!(outcome.errors_for("1:1").map(<[_]>::len), Some(0));
        assert!(outcome.errors_for("9:9").is_none());
    }
}
