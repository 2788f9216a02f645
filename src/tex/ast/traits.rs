//! Traversal interface for the node tree

use super::node::Node;

/// Visitor for walking a node tree
///
/// Both methods default to doing nothing, so implementors only override what they need.
pub trait Visitor {
    fn visit_node(&mut self, _node: &Node) {}
    fn leave_node(&mut self, _node: &Node) {}
}

/// Collects the kind tag of every node in visit order
#[derive(Debug, Default)]
pub struct KindCollector {
    pub tags: Vec<&'static str>,
}

impl Visitor for KindCollector {
    fn visit_node(&mut self, node: &Node) {
        self.tags.push(node.kind().as_str());
    }
}
