//! Reduced node shape for crossing a process boundary.
//!
//! Only `name`, `type`, `children`, and `id` survive. Style-bearing fields
//! have to be fetched live from the host when an action needs them.

use serde::{Deserialize, Serialize};

use crate::node::{Node, NodeType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOutline {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeOutline>,
    pub id: String,
}

impl From<&Node> for NodeOutline {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            node_type: node.node_type,
            children: outline(&node.children),
            id: node.id.clone(),
        }
    }
}

/// Outlines a node sequence, keeping the full tree shape.
pub fn outline(nodes: &[Node]) -> Vec<NodeOutline> {
    nodes.iter().map(NodeOutline::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::mixed::Mixable;
    use crate::paint::Paint;

    #[test]
    fn test_outline_drops_style_fields() {
        let mut rect = Node::new("1:2", "Rect", NodeType::Rectangle);
        rect.fills = Mixable::Value(vec![Paint::solid(Rgb::new(1.0, 0.0, 0.0), 1.0)]);
        let mut frame = Node::new("1:1", "Frame", NodeType::Frame);
        frame.children.push(rect);

        let json = serde_json::to_string(&outline(&[frame])).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"Frame","type":"FRAME","children":[{"name":"Rect","type":"RECTANGLE","id":"1:2"}],"id":"1:1"}]"#
        );
    }
}
