//! Tree lint orchestration.

use designlint_model::{descends_into, walk_post_order, Node};

use crate::candidates::Catalogs;
use crate::registry::RuleRegistry;
use crate::report::LintOutcome;
use crate::rules::LintError;

type DescendFn = dyn Fn(&Node) -> bool + Send + Sync;

/// Lints node trees with a rule registry.
pub struct Linter {
    registry: RuleRegistry,
    descend: Box<DescendFn>,
}

impl Linter {
    /// Creates a linter that skips the children of instances.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            descend: Box::new(descends_into),
        }
    }

    /// Replaces the predicate deciding whether a node's children are linted.
    pub fn with_descend<P>(mut self, descend: P) -> Self
    where
        P: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        self.descend = Box::new(descend);
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Lints every node and its subtree.
    ///
    /// A node's children are linted before the node itself, so both views of
    /// the outcome are in post-order. The first malformed node aborts the pass.
    pub fn lint(&self, nodes: &[Node], catalogs: &Catalogs<'_>) -> Result<LintOutcome, LintError> {
        let mut outcome = LintOutcome::new();

        walk_post_order(nodes, &*self.descend, &mut |node: &Node| {
            let errors = self.registry.lint_node(node, catalogs)?;
            outcome.add_node(node.id.clone(), errors);
            Ok::<(), LintError>(())
        })?;

        Ok(outcome)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(RuleRegistry::default())
    }
}

/// Lints `nodes` with the default rules.
pub fn lint(nodes: &[Node], catalogs: &Catalogs<'_>) -> Result<LintOutcome, LintError> {
    Linter::default().lint(nodes, catalogs)
}
