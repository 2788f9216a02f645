//! Node kinds, their declared defaults, and default resolution
//!
//! Each kind is declared once in [`declaration`]: an optional parent kind, the
//! default properties it adds or overrides, and overrides for the structural
//! flags. The resolved table for a kind is the parent's resolved table with the
//! kind's own declarations laid over it. Resolution is a pure function
//! ([`resolve_defaults`], [`resolve_flags`]); [`NodeKind::info`] serves the
//! result from a table built once on first use.
//!
//! Taxonomy
//!
//!     base                    abstract, presentation defaults shared by everything
//!     ├── token               abstract, leaves holding character data
//!     │   ├── mi mn mo mtext mspace
//!     ├── math mrow mfrac msqrt mroot msub msup msubsup
//!     ├── mtable mtr mtd merror
//!     ├── semantics           not a structural parent
//!     └── annotation-xml      line-break container
//!         └── annotation      annotation-xml whose payload is raw characters

use super::property::{PropertyBag, PropertyValue};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Discriminator for every node kind, including the abstract supertypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "token")]
    Token,
    #[serde(rename = "math")]
    Math,
    #[serde(rename = "mrow")]
    Mrow,
    #[serde(rename = "mi")]
    Mi,
    #[serde(rename = "mn")]
    Mn,
    #[serde(rename = "mo")]
    Mo,
    #[serde(rename = "mtext")]
    Mtext,
    #[serde(rename = "mspace")]
    Mspace,
    #[serde(rename = "mfrac")]
    Mfrac,
    #[serde(rename = "msqrt")]
    Msqrt,
    #[serde(rename = "mroot")]
    Mroot,
    #[serde(rename = "msub")]
    Msub,
    #[serde(rename = "msup")]
    Msup,
    #[serde(rename = "msubsup")]
    Msubsup,
    #[serde(rename = "mtable")]
    Mtable,
    #[serde(rename = "mtr")]
    Mtr,
    #[serde(rename = "mtd")]
    Mtd,
    #[serde(rename = "merror")]
    Merror,
    #[serde(rename = "semantics")]
    Semantics,
    #[serde(rename = "annotation-xml")]
    AnnotationXml,
    #[serde(rename = "annotation")]
    Annotation,
}

impl NodeKind {
    pub const ALL: [NodeKind; 22] = [
        NodeKind::Base,
        NodeKind::Token,
        NodeKind::Math,
        NodeKind::Mrow,
        NodeKind::Mi,
        NodeKind::Mn,
        NodeKind::Mo,
        NodeKind::Mtext,
        NodeKind::Mspace,
        NodeKind::Mfrac,
        NodeKind::Msqrt,
        NodeKind::Mroot,
        NodeKind::Msub,
        NodeKind::Msup,
        NodeKind::Msubsup,
        NodeKind::Mtable,
        NodeKind::Mtr,
        NodeKind::Mtd,
        NodeKind::Merror,
        NodeKind::Semantics,
        NodeKind::AnnotationXml,
        NodeKind::Annotation,
    ];

    /// The kind tag as it appears in the markup tree
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Base => "base",
            NodeKind::Token => "token",
            NodeKind::Math => "math",
            NodeKind::Mrow => "mrow",
            NodeKind::Mi => "mi",
            NodeKind::Mn => "mn",
            NodeKind::Mo => "mo",
            NodeKind::Mtext => "mtext",
            NodeKind::Mspace => "mspace",
            NodeKind::Mfrac => "mfrac",
            NodeKind::Msqrt => "msqrt",
            NodeKind::Mroot => "mroot",
            NodeKind::Msub => "msub",
            NodeKind::Msup => "msup",
            NodeKind::Msubsup => "msubsup",
            NodeKind::Mtable => "mtable",
            NodeKind::Mtr => "mtr",
            NodeKind::Mtd => "mtd",
            NodeKind::Merror => "merror",
            NodeKind::Semantics => "semantics",
            NodeKind::AnnotationXml => "annotation-xml",
            NodeKind::Annotation => "annotation",
        }
    }

    /// Look a kind up by its tag
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Abstract kinds only exist to share defaults and are never instantiated by parse methods
    pub fn is_abstract(self) -> bool {
        matches!(self, NodeKind::Base | NodeKind::Token)
    }

    /// Resolved defaults and flags, computed once per kind
    pub fn info(self) -> &'static KindInfo {
        &KIND_TABLE[&self]
    }

    pub fn defaults(self) -> &'static PropertyBag {
        &self.info().defaults
    }

    pub fn flags(self) -> StructuralFlags {
        self.info().flags
    }

    pub fn parent(self) -> Option<NodeKind> {
        declaration(self).parent
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structural flags downstream consumers read off a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFlags {
    /// Leaf holding character data rather than child nodes
    pub is_token: bool,
    /// Not eligible to act as a structural parent; acts as a pass-through
    pub not_parent: bool,
    /// Layout must not break a line through this node as if it were inline content
    pub linebreak_container: bool,
    /// Number of children the kind expects, `None` when it takes any number
    pub arity: Option<usize>,
}

/// Overrides a kind declares on top of its parent's resolved flags
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagOverrides {
    pub is_token: Option<bool>,
    pub not_parent: Option<bool>,
    pub linebreak_container: Option<bool>,
    pub arity: Option<Option<usize>>,
}

impl FlagOverrides {
    fn apply(self, mut flags: StructuralFlags) -> StructuralFlags {
        if let Some(v) = self.is_token {
            flags.is_token = v;
        }
        if let Some(v) = self.not_parent {
            flags.not_parent = v;
        }
        if let Some(v) = self.linebreak_container {
            flags.linebreak_container = v;
        }
        if let Some(v) = self.arity {
            flags.arity = v;
        }
        flags
    }
}

/// What a kind declares about itself, before inheritance
#[derive(Debug, Clone)]
pub struct KindDeclaration {
    pub parent: Option<NodeKind>,
    pub defaults: PropertyBag,
    pub flags: FlagOverrides,
}

impl KindDeclaration {
    fn root(defaults: PropertyBag) -> Self {
        Self {
            parent: None,
            defaults,
            flags: FlagOverrides::default(),
        }
    }

    fn extends(parent: NodeKind) -> Self {
        Self {
            parent: Some(parent),
            defaults: PropertyBag::new(),
            flags: FlagOverrides::default(),
        }
    }

    fn with(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.defaults.set(name, value);
        self
    }

    fn flags(mut self, flags: FlagOverrides) -> Self {
        self.flags = flags;
        self
    }

    fn arity(mut self, arity: usize) -> Self {
        self.flags.arity = Some(Some(arity));
        self
    }
}

/// Resolved view of a kind
#[derive(Debug, Clone)]
pub struct KindInfo {
    pub kind: NodeKind,
    pub defaults: PropertyBag,
    pub flags: StructuralFlags,
}

const INHERIT: &str = "inherit";

/// The declarative table: what each kind adds to its parent
pub fn declaration(kind: NodeKind) -> KindDeclaration {
    use NodeKind::*;
    match kind {
        Base => KindDeclaration::root(
            [
                ("mathbackground", INHERIT),
                ("mathcolor", INHERIT),
                ("mathsize", INHERIT),
                ("dir", INHERIT),
            ]
            .into_iter()
            .collect(),
        ),
        Token => KindDeclaration::extends(Base)
            .with("mathvariant", "normal")
            .flags(FlagOverrides {
                is_token: Some(true),
                arity: Some(Some(0)),
                ..FlagOverrides::default()
            }),
        Mi | Mn | Mtext => KindDeclaration::extends(Token),
        Mo => KindDeclaration::extends(Token)
            .with("form", "infix")
            .with("fence", false)
            .with("separator", false)
            .with("stretchy", false)
            .with("symmetric", false)
            .with("largeop", false)
            .with("movablelimits", false)
            .with("accent", false)
            .with("lspace", "thickmathspace")
            .with("rspace", "thickmathspace"),
        Mspace => KindDeclaration::extends(Token)
            .with("width", "0em")
            .with("height", "0ex")
            .with("depth", "0ex")
            .with("linebreak", "auto"),
        Math => KindDeclaration::extends(Base)
            .with("display", "inline")
            .with("overflow", "linebreak")
            .with("alttext", "")
            .flags(FlagOverrides {
                linebreak_container: Some(true),
                ..FlagOverrides::default()
            }),
        Mrow | Msqrt | Merror => KindDeclaration::extends(Base),
        Mfrac => KindDeclaration::extends(Base)
            .with("linethickness", "medium")
            .with("numalign", "center")
            .with("denomalign", "center")
            .with("bevelled", false)
            .arity(2),
        Mroot => KindDeclaration::extends(Base).arity(2),
        Msub => KindDeclaration::extends(Base)
            .with("subscriptshift", "")
            .arity(2),
        Msup => KindDeclaration::extends(Base)
            .with("superscriptshift", "")
            .arity(2),
        Msubsup => KindDeclaration::extends(Base)
            .with("subscriptshift", "")
            .with("superscriptshift", "")
            .arity(3),
        Mtable => KindDeclaration::extends(Base)
            .with("align", "axis")
            .with("rowalign", "baseline")
            .with("columnalign", "center")
            .with("rowspacing", "1ex")
            .with("columnspacing", ".8em")
            .with("frame", "none")
            .with("equalrows", false)
            .with("equalcolumns", false)
            .with("displaystyle", false),
        Mtr => KindDeclaration::extends(Base)
            .with("rowalign", INHERIT)
            .with("columnalign", INHERIT),
        Mtd => KindDeclaration::extends(Base)
            .with("rowspan", 1i64)
            .with("columnspan", 1i64)
            .with("rowalign", INHERIT)
            .with("columnalign", INHERIT)
            .flags(FlagOverrides {
                linebreak_container: Some(true),
                ..FlagOverrides::default()
            }),
        Semantics => KindDeclaration::extends(Base)
            .with("definitionUrl", PropertyValue::Null)
            .with("encoding", PropertyValue::Null)
            .flags(FlagOverrides {
                not_parent: Some(true),
                arity: Some(Some(1)),
                ..FlagOverrides::default()
            }),
        AnnotationXml => KindDeclaration::extends(Base)
            .with("definitionUrl", PropertyValue::Null)
            .with("encoding", PropertyValue::Null)
            .with("cd", "mathmlkeys")
            .with("name", "")
            .with("src", PropertyValue::Null)
            .flags(FlagOverrides {
                linebreak_container: Some(true),
                ..FlagOverrides::default()
            }),
        Annotation => KindDeclaration::extends(AnnotationXml)
            .with("isChars", true)
            .flags(FlagOverrides {
                is_token: Some(true),
                ..FlagOverrides::default()
            }),
    }
}

/// Defaults of `kind`: the parent's resolved defaults overlaid with its own
pub fn resolve_defaults(kind: NodeKind) -> PropertyBag {
    let decl = declaration(kind);
    let mut defaults = match decl.parent {
        Some(parent) => resolve_defaults(parent),
        None => PropertyBag::new(),
    };
    defaults.overlay(&decl.defaults);
    defaults
}

/// Flags of `kind`: the parent's resolved flags with its own overrides applied
pub fn resolve_flags(kind: NodeKind) -> StructuralFlags {
    let decl = declaration(kind);
    let inherited = match decl.parent {
        Some(parent) => resolve_flags(parent),
        None => StructuralFlags::default(),
    };
    decl.flags.apply(inherited)
}

static KIND_TABLE: Lazy<HashMap<NodeKind, KindInfo>> = Lazy::new(|| {
    NodeKind::ALL
        .into_iter()
        .map(|kind| {
            let info = KindInfo {
                kind,
                defaults: resolve_defaults(kind),
                flags: resolve_flags(kind),
            };
            (kind, info)
        })
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.as_str()), Some(kind));
        }
        assert_eq!(NodeKind::from_tag("mglyph"), None);
    }

    #[test]
    fn test_annotation_inherits_annotation_xml() {
        let xml = resolve_defaults(NodeKind::AnnotationXml);
        let annotation = resolve_defaults(NodeKind::Annotation);

        for (name, value) in xml.iter() {
            assert_eq!(annotation.get(name), Some(value), "missing {name}");
        }
        assert_eq!(annotation.len(), xml.len() + 1);
        assert_eq!(annotation.get("isChars"), Some(&PropertyValue::Bool(true)));
        assert!(!xml.contains("isChars"));
    }

    #[test]
    fn test_flags_inherit_through_specialization() {
        let flags = resolve_flags(NodeKind::Annotation);
        assert!(flags.linebreak_container);
        assert!(flags.is_token);
        assert!(!flags.not_parent);

        let xml = resolve_flags(NodeKind::AnnotationXml);
        assert!(xml.linebreak_container);
        assert!(!xml.is_token);
    }

    #[test]
    fn test_semantics_flags() {
        let flags = NodeKind::Semantics.flags();
        assert!(flags.not_parent);
        assert!(!flags.linebreak_container);
        assert_eq!(flags.arity, Some(1));
    }

    #[test]
    fn test_token_kinds_share_base_defaults() {
        let mo = NodeKind::Mo.defaults();
        assert_eq!(mo.get("mathvariant"), Some(&PropertyValue::from("normal")));
        assert_eq!(mo.get("dir"), Some(&PropertyValue::from("inherit")));
        assert_eq!(mo.get("stretchy"), Some(&PropertyValue::Bool(false)));
        assert!(NodeKind::Mo.flags().is_token);
    }

    #[test]
    fn test_cached_table_matches_pure_resolution() {
        for kind in NodeKind::ALL {
            assert_eq!(kind.defaults(), &resolve_defaults(kind));
            assert_eq!(kind.flags(), resolve_flags(kind));
        }
    }
}
