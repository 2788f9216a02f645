//! AST node model for math markup
//!
//!     The parser builds a tree of [`Node`]s. Every node is an instance of a
//!     [`NodeKind`] (`mi`, `mfrac`, `semantics`, `annotation`, ...). A kind carries
//!     a default property table and structural flags; both are inherited down a
//!     shallow chain of supertypes and resolved once per kind.
//!
//!     Ownership is strict tree containment: a parent owns its children, the
//!     root is owned by whoever called the parse. There is no sharing and no
//!     per-node deletion, the tree is dropped as a whole.
//!
//! ## Modules
//!
//! - `kind` - kind tags, declared defaults, flag resolution
//! - `property` - property values and bags
//! - `node` - the node type itself
//! - `traits` - the [`Visitor`] traversal interface
//! - `snapshot` - serializable view of a tree

pub mod kind;
pub mod node;
pub mod property;
pub mod snapshot;
pub mod traits;

pub use kind::{
    declaration, resolve_defaults, resolve_flags, KindDeclaration, KindInfo, NodeKind,
    StructuralFlags,
};
pub use node::Node;
pub use property::{PropertyBag, PropertyValue};
pub use snapshot::{snapshot_node, snapshot_to_json, NodeSnapshot};
pub use traits::{KindCollector, Visitor};
