//! Testing utilities
//!
//! Two tools, meant to be used together:
//!
//! 1. **[fixtures]** - small, known symbol maps (latin, greek, digits, fences,
//!    a core macro set) and a registry configured from them. Tests should
//!    build on these rather than declaring ad hoc tables, so that a change in
//!    map conventions only has to be made here.
//! 2. **[assert_node](fn@assert_node)** - fluent assertions over a node tree.
//!
//! ```rust-example
//! use mathtex::tex::testing::{assert_node, fixtures};
//!
//! let registry = fixtures::standard_registry(Arc::new(CollectingSink::new()));
//! let mut input = ParseInput::with_source("semantics", "{x}").with_stack(vec![x]);
//! registry.parse(CategoryKind::Macro, &mut input)?;
//!
//! assert_node(&input.stack()[0])
//!     .kind(NodeKind::Semantics)
//!     .child_count(2)
//!     .child(1, |annotation| {
//!         annotation.kind(NodeKind::Annotation).text("x");
//!     });
//! ```
//!
//! Prefer asserting the whole shape of a node over counting things: the
//! assertion messages carry the path of the failing node (`children[1]`).

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_node, NodeAssertion};
