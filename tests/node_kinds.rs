//! Default properties and structural flags of node kinds

use mathtex::tex::ast::{resolve_defaults, resolve_flags, Node, NodeKind, PropertyValue};
use mathtex::tex::testing::assert_node;
use rstest::rstest;

#[test]
fn test_annotation_inherits_annotation_xml_defaults() {
    let annotation = Node::new(NodeKind::Annotation);

    for (name, value) in NodeKind::AnnotationXml.defaults().iter() {
        assert_eq!(annotation.property(name), Some(value), "{name}");
    }
    assert_node(&annotation)
        .property("definitionUrl", PropertyValue::Null)
        .property("encoding", PropertyValue::Null)
        .property("cd", "mathmlkeys")
        .property("name", "")
        .property("src", PropertyValue::Null)
        .property("isChars", true);

    assert!(NodeKind::AnnotationXml.defaults().get("isChars").is_none());
    assert_eq!(
        annotation.properties().len(),
        NodeKind::AnnotationXml.defaults().len() + 1
    );
}

#[test]
fn test_instances_do_not_share_properties() {
    let mut first = Node::new(NodeKind::Annotation);
    let second = Node::new(NodeKind::Annotation);

    first.set_property("encoding", "text/plain");
    first.set_property("isChars", false);
    first.set_property("xref", "eq1");

    assert_node(&second)
        .default_property("encoding")
        .property("isChars", true)
        .no_property("xref");
    assert_eq!(
        NodeKind::Annotation.defaults().get("encoding"),
        Some(&PropertyValue::Null)
    );
    assert_eq!(
        NodeKind::Annotation.defaults().get("isChars"),
        Some(&PropertyValue::Bool(true))
    );
    assert_eq!(Node::new(NodeKind::Annotation), second);
}

#[test]
fn test_semantics_and_annotation_flags() {
    assert!(NodeKind::Semantics.flags().not_parent);
    assert!(!NodeKind::Semantics.flags().linebreak_container);
    assert!(NodeKind::AnnotationXml.flags().linebreak_container);
    assert!(!NodeKind::AnnotationXml.flags().not_parent);

    // annotation keeps the line-break flag and adds character data
    let flags = NodeKind::Annotation.flags();
    assert!(flags.linebreak_container);
    assert!(flags.is_token);
}

#[rstest]
#[case(NodeKind::Annotation, Some(NodeKind::AnnotationXml))]
#[case(NodeKind::AnnotationXml, Some(NodeKind::Base))]
#[case(NodeKind::Semantics, Some(NodeKind::Base))]
#[case(NodeKind::Mi, Some(NodeKind::Token))]
#[case(NodeKind::Token, Some(NodeKind::Base))]
#[case(NodeKind::Base, None)]
fn test_kind_parents(#[case] kind: NodeKind, #[case] parent: Option<NodeKind>) {
    assert_eq!(kind.parent(), parent);
}

#[test]
fn test_defaults_are_parent_overlaid_with_own() {
    for kind in NodeKind::ALL {
        let defaults = kind.defaults();
        assert_eq!(defaults, &resolve_defaults(kind), "{kind}");
        assert_eq!(kind.flags(), resolve_flags(kind), "{kind}");

        if let Some(parent) = kind.parent() {
            for (name, _) in parent.defaults().iter() {
                assert!(defaults.contains(name), "{kind} lost {name} from {parent}");
            }
        }
    }
}

#[rstest]
#[case("annotation", NodeKind::Annotation)]
#[case("annotation-xml", NodeKind::AnnotationXml)]
#[case("semantics", NodeKind::Semantics)]
#[case("mfrac", NodeKind::Mfrac)]
fn test_kind_tags(#[case] tag: &str, #[case] kind: NodeKind) {
    assert_eq!(NodeKind::from_tag(tag), Some(kind));
    assert_eq!(kind.to_string(), tag);
}

#[test]
fn test_token_kinds_reject_children() {
    let mut annotation = Node::token(NodeKind::Annotation, "x^2").unwrap();
    let child = Node::token(NodeKind::Mi, "x").unwrap();
    assert!(annotation.append_child(child).is_err());
    assert_eq!(annotation.text(), "x^2");

    let mut xml = Node::new(NodeKind::AnnotationXml);
    assert!(xml.set_text("raw").is_err());
    xml.append_child(Node::new(NodeKind::Math)).unwrap();
    assert_eq!(xml.children().len(), 1);
}
