//! Parsing symbols through the standard fixture registry

use mathtex::tex::ast::{snapshot_to_json, Node, NodeKind};
use mathtex::tex::error::ParseError;
use mathtex::tex::lexing::{detokenize, tokenize, Token};
use mathtex::tex::registry::{CollectingSink, SymbolRegistry};
use mathtex::tex::symbols::{CategoryKind, Mode, ParseInput, Parsed};
use mathtex::tex::testing::{assert_node, fixtures};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn registry() -> SymbolRegistry {
    fixtures::standard_registry(Arc::new(CollectingSink::new()))
}

fn node(registry: &SymbolRegistry, category: CategoryKind, input: &mut ParseInput) -> Node {
    registry
        .parse(category, input)
        .expect("parse failed")
        .and_then(Parsed::into_node)
        .expect("expected a node")
}

#[rstest]
#[case("x", NodeKind::Mi)]
#[case("β", NodeKind::Mi)]
#[case("7", NodeKind::Mn)]
#[case("=", NodeKind::Mo)]
fn test_characters_become_tokens(
    registry: SymbolRegistry,
    #[case] symbol: &str,
    #[case] kind: NodeKind,
) {
    let parsed = node(&registry, CategoryKind::Character, &mut ParseInput::new(symbol));
    assert_node(&parsed).kind(kind).text(symbol).is_token();
}

#[rstest]
fn test_math_characters_decline_in_text_mode(registry: SymbolRegistry) {
    let mut input = ParseInput::new("7").with_mode(Mode::Text);
    assert_eq!(registry.parse(CategoryKind::Character, &mut input), Ok(None));
}

#[rstest]
#[case("\\pair{x}{y} z", "(x,y) z")]
#[case("\\pair a b", "(a,b)")]
#[case("\\alpha+1", "α+1")]
fn test_expansion_pushes_tokens_back(
    registry: SymbolRegistry,
    #[case] source: &str,
    #[case] expanded: &str,
) {
    let mut input = ParseInput::from_source(source).unwrap();
    let result = registry.parse(CategoryKind::Macro, &mut input);
    assert_eq!(result, Ok(Some(Parsed::Handled)));
    assert_eq!(detokenize(&input.remaining_tokens()), expanded);
}

#[rstest]
fn test_semantics_wraps_stack_top(registry: SymbolRegistry) {
    let operand = Node::token(NodeKind::Mi, "x").unwrap();
    let mut input = ParseInput::from_source("\\semantics{x^2}")
        .unwrap()
        .with_stack(vec![operand]);

    let result = registry.parse(CategoryKind::Macro, &mut input);
    assert_eq!(result, Ok(Some(Parsed::Handled)));
    assert_eq!(input.stack().len(), 1);

    assert_node(&input.stack()[0])
        .kind(NodeKind::Semantics)
        .not_parent()
        .child_count(2)
        .child(0, |operand| {
            operand.kind(NodeKind::Mi).text("x");
        })
        .child(1, |annotation| {
            annotation
                .kind(NodeKind::Annotation)
                .text("x^2")
                .property("encoding", "application/x-tex")
                .property("isChars", true)
                .property("cd", "mathmlkeys");
        });
}

#[rstest]
fn test_semantics_without_operand_fails(registry: SymbolRegistry) {
    let mut input = ParseInput::from_source("\\semantics{x}").unwrap();
    assert_eq!(
        registry.parse(CategoryKind::Macro, &mut input),
        Err(ParseError::MissingOperand {
            command: "semantics".to_string()
        })
    );
}

#[rstest]
fn test_unterminated_argument_fails(registry: SymbolRegistry) {
    let mut input = ParseInput::from_source("\\text{abc").unwrap();
    assert!(matches!(
        registry.parse(CategoryKind::Macro, &mut input),
        Err(ParseError::UnterminatedGroup { .. })
    ));
}

#[rstest]
fn test_annotation_macro(registry: SymbolRegistry) {
    let mut input = ParseInput::from_source("\\annotation{text/plain}{hello}").unwrap();
    let annotation = node(&registry, CategoryKind::Macro, &mut input);
    assert_node(&annotation)
        .kind(NodeKind::Annotation)
        .text("hello")
        .property("encoding", "text/plain")
        .linebreak_container();
    assert!(input.is_exhausted());
}

#[rstest]
fn test_text_commands(registry: SymbolRegistry) {
    let mut input = ParseInput::from_source("\\text{a b}").unwrap();
    let text = node(&registry, CategoryKind::Macro, &mut input);
    assert_node(&text).kind(NodeKind::Mtext).text("a b").default_property("mathvariant");

    let mut input = ParseInput::from_source("\\mathrm{d}").unwrap();
    let roman = node(&registry, CategoryKind::Macro, &mut input);
    assert_node(&roman).kind(NodeKind::Mtext).property("mathvariant", "normal");

    let mut input = ParseInput::from_source("\\quad").unwrap();
    let space = node(&registry, CategoryKind::Macro, &mut input);
    assert_node(&space).kind(NodeKind::Mspace).property("width", "1em");
}

#[rstest]
fn test_environment_parameters(registry: SymbolRegistry) {
    let mut input = ParseInput::with_source("array", "{lc} a & b");
    let table = node(&registry, CategoryKind::Environment, &mut input);
    assert_node(&table)
        .kind(NodeKind::Mtable)
        .property("columnalign", "lc")
        .child_count(0);
    assert_eq!(detokenize(&input.remaining_tokens()), " a & b");

    let mut input = ParseInput::new("matrix");
    let matrix = node(&registry, CategoryKind::Environment, &mut input);
    assert_node(&matrix).kind(NodeKind::Mtable).default_property("columnalign");
}

#[rstest]
fn test_delimiters_are_fences(registry: SymbolRegistry) {
    let paren = node(&registry, CategoryKind::Delimiter, &mut ParseInput::new("("));
    insta::assert_snapshot!(snapshot_to_json(&paren).unwrap(), @r#"{"kind":"mo","text":"(","properties":{"fence":true}}"#);

    let bar = node(&registry, CategoryKind::Delimiter, &mut ParseInput::new("|"));
    assert_node(&bar)
        .kind(NodeKind::Mo)
        .property("fence", true)
        .property("symmetric", true);

    let angle = node(&registry, CategoryKind::Delimiter, &mut ParseInput::new("langle"));
    assert_node(&angle).text("⟨");
}

#[test]
fn test_tokenize_skips_comments() {
    let tokens: Vec<Token> = tokenize("\\sqrt{x}% radicand")
        .into_iter()
        .map(|(token, _)| token)
        .collect();

    insta::assert_debug_snapshot!(tokens, @r###"
    [
        ControlWord(
            "sqrt",
        ),
        BeginGroup,
        Char(
            'x',
        ),
        EndGroup,
    ]
    "###);
}
