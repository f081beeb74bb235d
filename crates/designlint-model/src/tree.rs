//! Tree traversal.

use crate::node::{Node, NodeType};

/// Default descent predicate: every node except instances.
///
/// An instance's children mirror its source component and cannot be edited
/// independently.
pub fn descends_into(node: &Node) -> bool {
    node.node_type != NodeType::Instance
}

/// Visits `nodes` in order, visiting each node's subtree before the node
/// itself. Children of nodes rejected by `descend` are skipped; the node
/// itself is still visited. Stops at the first error.
pub fn walk_post_order<'a, D, F, E>(nodes: &'a [Node], descend: &D, visit: &mut F) -> Result<(), E>
where
    D: Fn(&Node) -> bool + ?Sized,
    F: FnMut(&'a Node) -> Result<(), E>,
{
    for node in nodes {
        if !node.children.is_empty() && descend(node) {
            walk_post_order(&node.children, descend, visit)?;
        }
        visit(node)?;
    }
    Ok(())
}
