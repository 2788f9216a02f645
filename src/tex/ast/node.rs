//! AST node
//!
//! A node is one instance of a [`NodeKind`]. Construction copies the kind's
//! resolved default table into a fresh property bag, so mutating a node never
//! touches the kind's defaults or any other node. Token kinds hold character
//! data; every other kind holds an ordered list of owned children.

use super::kind::{NodeKind, StructuralFlags};
use super::property::{PropertyBag, PropertyValue};
use super::snapshot::{snapshot_node, NodeSnapshot};
use super::traits::Visitor;
use crate::tex::error::NodeError;

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    properties: PropertyBag,
    children: Vec<Node>,
    text: String,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            properties: kind.defaults().clone(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Token node holding `text` as character data
    pub fn token(kind: NodeKind, text: impl Into<String>) -> Result<Self, NodeError> {
        let mut node = Node::new(kind);
        node.set_text(text)?;
        Ok(node)
    }

    /// Container node with the given children
    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Result<Self, NodeError> {
        let mut node = Node::new(kind);
        for child in children {
            node.append_child(child)?;
        }
        Ok(node)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn flags(&self) -> StructuralFlags {
        self.kind.flags()
    }

    pub fn is_token(&self) -> bool {
        self.flags().is_token
    }

    pub fn is_not_parent(&self) -> bool {
        self.flags().not_parent
    }

    pub fn is_linebreak_container(&self) -> bool {
        self.flags().linebreak_container
    }

    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Set a property, returning the previous value. Names outside the
    /// default table are allowed and stay local to this instance.
    pub fn set_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.properties.set(name, value)
    }

    pub fn remove_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    /// Whether a property still carries the kind's default value
    pub fn is_default(&self, name: &str) -> bool {
        self.properties.get(name) == self.kind.defaults().get(name)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn append_child(&mut self, child: Node) -> Result<(), NodeError> {
        if self.is_token() {
            return Err(NodeError::NotAContainer { kind: self.kind });
        }
        self.children.push(child);
        Ok(())
    }

    /// Character data of a token node, empty for containers
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), NodeError> {
        if !self.is_token() {
            return Err(NodeError::NotCharacterData { kind: self.kind });
        }
        self.text = text.into();
        Ok(())
    }

    pub fn push_text(&mut self, text: &str) -> Result<(), NodeError> {
        if !self.is_token() {
            return Err(NodeError::NotCharacterData { kind: self.kind });
        }
        self.text.push_str(text);
        Ok(())
    }

    /// Walk this node and its subtree depth first
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_node(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visitor.leave_node(self);
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        snapshot_node(self)
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}
