//! Fluent assertion API for AST nodes

use crate::tex::ast::{Node, NodeKind, PropertyValue};

/// Create an assertion builder for `node`
pub fn assert_node(node: &Node) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "node".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: NodeKind) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: expected kind {}, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    /// Assert the character data of a token node
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text(),
            expected,
            "{}: expected text {:?}, found {:?}",
            self.context,
            expected,
            self.node.text()
        );
        self
    }

    pub fn property(self, name: &str, expected: impl Into<PropertyValue>) -> Self {
        let expected = expected.into();
        assert_eq!(
            self.node.property(name),
            Some(&expected),
            "{}: expected property {} = {}",
            self.context,
            name,
            expected
        );
        self
    }

    pub fn no_property(self, name: &str) -> Self {
        assert!(
            self.node.property(name).is_none(),
            "{}: expected no property {}, found {:?}",
            self.context,
            name,
            self.node.property(name)
        );
        self
    }

    /// Assert that `name` still holds the kind's default value
    pub fn default_property(self, name: &str) -> Self {
        assert!(
            self.node.is_default(name),
            "{}: expected {} to keep its default, found {:?}",
            self.context,
            name,
            self.node.property(name)
        );
        self
    }

    pub fn is_token(self) -> Self {
        assert!(
            self.node.is_token(),
            "{}: expected a token kind, found {}",
            self.context,
            self.node.kind()
        );
        self
    }

    pub fn not_parent(self) -> Self {
        assert!(
            self.node.is_not_parent(),
            "{}: expected {} to be marked not-a-parent",
            self.context,
            self.node.kind()
        );
        self
    }

    pub fn linebreak_container(self) -> Self {
        assert!(
            self.node.is_linebreak_container(),
            "{}: expected {} to be a line-break container",
            self.context,
            self.node.kind()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.children().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.node.children())
        );
        self
    }

    /// Assert on child `index`
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(|child| child.kind().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
