//! Document snapshots.
//!
//! A snapshot bundles the node selection with the catalogs the host has
//! already loaded, so the engine can run outside the host process.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::StyleCatalog;
use crate::error::ModelError;
use crate::node::Node;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Root nodes of the selection, in host order.
    pub nodes: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_styles: Option<StyleCatalog>,
    #[serde(default)]
    pub libraries: Vec<StyleCatalog>,
}

impl Document {
    /// Parses a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a snapshot file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Counts every node in the tree, including instance contents.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DOC: &str = r#"{
        "nodes": [{
            "id": "1:1",
            "name": "Frame",
            "type": "FRAME",
            "children": [
                { "id": "1:2", "name": "Rect", "type": "RECTANGLE" },
                { "id": "1:3", "name": "Label", "type": "TEXT" }
            ]
        }],
        "localStyles": { "fills": [] },
        "libraries": [{ "name": "Core" }]
    }"#;

    #[test]
    fn test_from_json() {
        let doc = Document::from_json(DOC).unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert_eq!(doc.node_count(), 3);
        assert!(doc.local_styles.is_some());
        assert_eq!(doc.libraries[0].name, "Core");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();
        let doc = Document::from_file(file.path()).unwrap();
        assert_eq!(doc.node_count(), 3);
    }

    #[test]
    fn test_invalid_json() {
        let err = Document::from_json("{ \"nodes\": 5 }").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Document::from_file(Path::new("/nonexistent/doc.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io(_)));
    }
}
