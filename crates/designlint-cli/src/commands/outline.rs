//! Outline command implementation
//!
//! Prints the reduced node tree (`name`, `type`, `children`, `id`) of a
//! document snapshot.

use anyhow::{Context, Result};
use designlint_model::{outline, Document};
use std::path::Path;
use std::process::ExitCode;

use crate::config::load_document;

/// Renders the outline of a document as JSON.
pub fn render(doc: &Document, pretty: bool) -> Result<String> {
    let tree = outline(&doc.nodes);
    let json = if pretty {
        serde_json::to_string_pretty(&tree)
    } else {
        serde_json::to_string(&tree)
    };
    json.context("Failed to serialize outline")
}

/// Run the outline command.
pub fn run(input: &str, pretty: bool) -> Result<ExitCode> {
    let doc = load_document(Path::new(input))?;
    println!("{}", render(&doc, pretty)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_compact() {
        let doc = Document::from_json(
            r#"{
                "nodes": [{
                    "id": "1:1",
                    "name": "Button",
                    "type": "INSTANCE",
                    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 1, "b": 1 } }],
                    "children": [{ "id": "1:2", "name": "Label", "type": "TEXT" }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            render(&doc, false).unwrap(),
            r#"[{"name":"Button","type":"INSTANCE","children":[{"name":"Label","type":"TEXT","id":"1:2"}],"id":"1:1"}]"#
        );
    }

    #[test]
    fn test_render_pretty_is_multiline() {
        let doc = Document::from_json(r#"{ "nodes": [{ "id": "1:1", "name": "F", "type": "FRAME" }] }"#)
            .unwrap();
        assert!(render(&doc, true).unwrap().contains('\n'));
    }
}
