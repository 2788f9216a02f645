//! Node snapshot - a normalized, serializable view of a node tree
//!
//! Snapshots record the kind tag, character data, the properties that differ
//! from the kind's defaults, and the children. Consumers that need a stable
//! textual form (tests, debugging dumps) serialize the snapshot rather than
//! walking nodes themselves.

use super::node::Node;
use super::property::PropertyBag;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

/// Snapshot a node and its subtree
pub fn snapshot_node(node: &Node) -> NodeSnapshot {
    let properties = node
        .properties()
        .iter()
        .filter(|(name, _)| !node.is_default(name))
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect();

    NodeSnapshot {
        kind: node.kind().as_str().to_string(),
        text: node.is_token().then(|| node.text().to_string()),
        properties,
        children: node.children().iter().map(snapshot_node).collect(),
    }
}

/// Snapshot a node tree as compact JSON
pub fn snapshot_to_json(node: &Node) -> Result<String, serde_json::Error> {
    serde_json::to_string(&snapshot_node(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::ast::NodeKind;

    #[test]
    fn test_snapshot_keeps_only_overrides() {
        let mut mo = Node::token(NodeKind::Mo, "(").unwrap();
        mo.set_property("fence", true);
        let row = Node::with_children(NodeKind::Mrow, vec![mo]).unwrap();

        let json = snapshot_to_json(&row).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"mrow","children":[{"kind":"mo","text":"(","properties":{"fence":true}}]}"#
        );
    }

    #[test]
    fn test_snapshot_of_annotation() {
        let mut annotation = Node::token(NodeKind::Annotation, "x^2").unwrap();
        annotation.set_property("encoding", "application/x-tex");

        let snapshot = annotation.snapshot();
        assert_eq!(snapshot.kind, "annotation");
        assert_eq!(snapshot.text.as_deref(), Some("x^2"));
        assert_eq!(snapshot.properties.len(), 1);
    }
}
