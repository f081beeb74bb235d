//! Rule registry for managing style rules.

use designlint_model::{Node, NodeType};
use std::collections::HashSet;

use crate::candidates::Catalogs;
use crate::config::LintConfig;
use crate::report::{ErrorKind, ErrorRecord};
use crate::rules::{
    EffectRule, FillRule, LintError, RadiusRule, StrokeRule, StyleRule, TextFillRule, TextRule,
};

/// Registry of the rules a lint pass dispatches to.
pub struct RuleRegistry {
    rules: Vec<Box<dyn StyleRule>>,
    disabled_rules: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
}

impl RuleRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled_rules: HashSet::new(),
            enabled_only: None,
        }
    }

    /// Creates a registry with the default rules shaped by `config`.
    ///
    /// Rules run in the order text, fill, stroke, effects, radius.
    pub fn default_rules(config: &LintConfig) -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(TextRule));

        if config.forbidden_text_fill_keys.is_empty() {
            let fill = if config.check_text_fills {
                FillRule::new()
            } else {
                FillRule::shapes_only()
            };
            registry.register(Box::new(fill));
        } else {
            registry.register(Box::new(FillRule::shapes_only()));
            registry.register(Box::new(
                TextFillRule::new(&config.forbidden_text_fill_keys)
                    .with_fallback(config.check_text_fills),
            ));
        }

        registry.register(Box::new(StrokeRule));
        registry.register(Box::new(EffectRule));

        if config.check_radius {
            registry.register(Box::new(RadiusRule::new(config.radius_values.clone())));
        }

        for rule_id in &config.disabled_rules {
            registry.disable_rule(rule_id);
        }

        registry
    }

    /// Registers a new rule.
    pub fn register(&mut self, rule: Box<dyn StyleRule>) {
        self.rules.push(rule);
    }

    /// Disables a rule by ID.
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.disabled_rules.insert(rule_id.to_string());
    }

    /// Enables only the specified rules (disables all others).
    pub fn enable_only(&mut self, rule_ids: &[&str]) {
        self.enabled_only = Some(rule_ids.iter().map(|s| s.to_string()).collect());
    }

    /// Returns all registered rules.
    pub fn rules(&self) -> &[Box<dyn StyleRule>] {
        &self.rules
    }

    /// Returns rule metadata for documentation/introspection.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        self.rules
            .iter()
            .map(|r| RuleMetadata {
                id: r.id().to_string(),
                description: r.description().to_string(),
                kind: r.kind(),
                applies_to: r.applies_to().to_vec(),
                enabled: self.is_rule_enabled(r.id()),
            })
            .collect()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.contains(rule_id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(rule_id);
        }
        true
    }

    /// Runs every enabled rule that applies to the node's type.
    ///
    /// Each rule contributes at most one error. Children are not visited.
    pub fn lint_node(
        &self,
        node: &Node,
        catalogs: &Catalogs<'_>,
    ) -> Result<Vec<ErrorRecord>, LintError> {
        let mut errors = Vec::new();

        for rule in &self.rules {
            if !self.is_rule_enabled(rule.id()) {
                continue;
            }

            if !rule.applies_to().contains(&node.node_type) {
                continue;
            }

            if let Some(error) = rule.check(node, catalogs)? {
                errors.push(error);
            }
        }

        Ok(errors)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules(&LintConfig::default())
    }
}

/// Metadata about a rule for documentation/introspection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RuleMetadata {
    /// Rule identifier.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Error category the rule emits.
    pub kind: ErrorKind,
    /// Node types this rule applies to.
    pub applies_to: Vec<NodeType>,
    /// Whether the rule runs under the current filters.
    pub enabled: bool,
}
