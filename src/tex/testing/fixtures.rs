//! Known symbol maps for tests
//!
//! Every character map maps its alphabet to itself. The names are the ones
//! [`standard_config`] refers to.

use crate::tex::ast::NodeKind;
use crate::tex::registry::{DiagnosticSink, RegistryConfig, SymbolRegistry};
use crate::tex::symbols::{
    parse_methods, CategoryKind, CharacterMap, DelimiterAction, DelimiterMap, EnvironmentAction,
    EnvironmentMap, MacroAction, MacroMap, RegexMap,
};
use std::sync::Arc;

pub const LATIN: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const GREEK: &str = "αβγδεζηθικλμνξοπρστυφχψω";
pub const DIGITS: &str = "0123456789";
pub const OPERATORS: &str = "+-=<>!,;:";

/// Latin letters as identifiers
pub fn latin() -> CharacterMap {
    CharacterMap::from_chars("latin", LATIN, parse_methods::variable)
}

pub fn greek() -> CharacterMap {
    CharacterMap::from_chars("greek", GREEK, parse_methods::variable)
}

pub fn digits() -> CharacterMap {
    CharacterMap::from_chars("digits", DIGITS, parse_methods::digit)
}

pub fn operators() -> CharacterMap {
    CharacterMap::from_chars("operators", OPERATORS, parse_methods::operator)
}

/// Latin letters as text, in either mode
pub fn text_letters() -> CharacterMap {
    CharacterMap::from_chars("text-letters", LATIN, parse_methods::text_char)
}

/// Multi-digit numbers, matched by pattern
pub fn numbers() -> Result<RegexMap, regex::Error> {
    RegexMap::new("numbers", r"[0-9]+(\.[0-9]+)?", parse_methods::digit)
}

pub fn fences() -> DelimiterMap {
    DelimiterMap::new("fences", parse_methods::delimiter)
        .with("(", DelimiterAction::new("("))
        .with(")", DelimiterAction::new(")"))
        .with("[", DelimiterAction::new("["))
        .with("]", DelimiterAction::new("]"))
        .with("|", DelimiterAction::new("|").with_attribute("symmetric", true))
        .with("langle", DelimiterAction::new("⟨"))
        .with("rangle", DelimiterAction::new("⟩"))
}

pub fn core_macros() -> MacroMap {
    MacroMap::macros("core")
        .with("alpha", MacroAction::expand("α", 0))
        .with("pair", MacroAction::expand("(#1,#2)", 2))
        .with("text", MacroAction::command(parse_methods::text))
        .with(
            "mathrm",
            MacroAction::command_with(parse_methods::text, &["normal"]),
        )
        .with(
            "quad",
            MacroAction::command_with(parse_methods::space, &["1em"]),
        )
        .with("annotation", MacroAction::command(parse_methods::annotation))
        .with("semantics", MacroAction::command(parse_methods::semantics))
}

pub fn environments() -> EnvironmentMap {
    EnvironmentMap::environments("environments")
        .with("matrix", EnvironmentAction::new("matrix", NodeKind::Mtable))
        .with(
            "array",
            EnvironmentAction::new("array", NodeKind::Mtable).with_parameter("columnalign"),
        )
}

/// Chains over the standard fixtures
pub fn standard_config() -> RegistryConfig {
    RegistryConfig::new()
        .with(CategoryKind::Character, ["latin", "greek", "digits", "operators"])
        .with(CategoryKind::Delimiter, ["fences"])
        .with(CategoryKind::Macro, ["core"])
        .with(CategoryKind::Environment, ["environments"])
}

/// Registry with every fixture registered and [`standard_config`] applied
pub fn standard_registry(diagnostics: Arc<dyn DiagnosticSink>) -> SymbolRegistry {
    let mut registry = SymbolRegistry::with_diagnostics(diagnostics);
    registry.register(latin());
    registry.register(greek());
    registry.register(digits());
    registry.register(operators());
    registry.register(text_letters());
    registry.register(fences());
    registry.register(core_macros());
    registry.register(environments());
    registry.configure(&standard_config());
    registry
}
