//! Lookup categories and the action types they resolve to
//!
//! Every category produces exactly one action type. The [`Category`] trait
//! binds a zero-sized marker to its action, so a `Configuration<Characters>`
//! can only ever hand back a [`CharacterAction`]. [`SymbolAction`] is the
//! closed union used where the category is only known at runtime.

use super::input::ParseInput;
use super::map::{RegisteredMap, SymbolMap};
use crate::tex::ast::{NodeKind, PropertyBag, PropertyValue};
use crate::tex::error::ParseResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The four fixed lookup categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Character,
    Delimiter,
    Macro,
    Environment,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 4] = [
        CategoryKind::Character,
        CategoryKind::Delimiter,
        CategoryKind::Macro,
        CategoryKind::Environment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKind::Character => "character",
            CategoryKind::Delimiter => "delimiter",
            CategoryKind::Macro => "macro",
            CategoryKind::Environment => "environment",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binds a category marker to its action type and to its slot in [`RegisteredMap`]
pub trait Category: Sized + Send + Sync + 'static {
    const KIND: CategoryKind;
    type Action: Clone + fmt::Debug + Send + Sync + 'static;

    fn wrap_action(action: Self::Action) -> SymbolAction;
    fn wrap_map(map: Arc<dyn SymbolMap<Category = Self>>) -> RegisteredMap;
    fn unwrap_map(map: &RegisteredMap) -> Option<Arc<dyn SymbolMap<Category = Self>>>;
}

#[derive(Debug, Clone, Copy)]
pub struct Characters;
#[derive(Debug, Clone, Copy)]
pub struct Delimiters;
#[derive(Debug, Clone, Copy)]
pub struct Macros;
#[derive(Debug, Clone, Copy)]
pub struct Environments;

macro_rules! category {
    ($marker:ident, $kind:ident, $action:ty) => {
        impl Category for $marker {
            const KIND: CategoryKind = CategoryKind::$kind;
            type Action = $action;

            fn wrap_action(action: Self::Action) -> SymbolAction {
                SymbolAction::$kind(action)
            }

            fn wrap_map(map: Arc<dyn SymbolMap<Category = Self>>) -> RegisteredMap {
                RegisteredMap::$kind(map)
            }

            fn unwrap_map(map: &RegisteredMap) -> Option<Arc<dyn SymbolMap<Category = Self>>> {
                match map {
                    RegisteredMap::$kind(inner) => Some(Arc::clone(inner)),
                    _ => None,
                }
            }
        }
    };
}

category!(Characters, Character, CharacterAction);
category!(Delimiters, Delimiter, DelimiterAction);
category!(Macros, Macro, MacroAction);
category!(Environments, Environment, EnvironmentAction);

/// Literal character substitution plus the attributes of the node it becomes
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterAction {
    pub text: String,
    pub attributes: PropertyBag,
}

impl CharacterAction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: PropertyBag::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

/// Delimiter glyph plus attributes
#[derive(Debug, Clone, PartialEq)]
pub struct DelimiterAction {
    pub text: String,
    pub attributes: PropertyBag,
}

impl DelimiterAction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: PropertyBag::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.attributes.set(name, value);
        self
    }
}

pub type MacroHandler = fn(&mut ParseInput, &MacroAction) -> ParseResult;

/// What a control sequence does
#[derive(Debug, Clone)]
pub enum MacroAction {
    /// Textual expansion: read `arity` arguments, substitute `#n`, and push the
    /// result back onto the input
    Expand { replacement: String, arity: usize },
    /// Call a parse method with static arguments
    Command {
        handler: MacroHandler,
        args: Vec<String>,
    },
}

impl MacroAction {
    pub fn expand(replacement: impl Into<String>, arity: usize) -> Self {
        MacroAction::Expand {
            replacement: replacement.into(),
            arity,
        }
    }

    pub fn command(handler: MacroHandler) -> Self {
        MacroAction::Command {
            handler,
            args: Vec::new(),
        }
    }

    pub fn command_with(handler: MacroHandler, args: &[&str]) -> Self {
        MacroAction::Command {
            handler,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Static argument `index`, if the action carries one
    pub fn arg(&self, index: usize) -> Option<&str> {
        match self {
            MacroAction::Command { args, .. } => args.get(index).map(String::as_str),
            MacroAction::Expand { .. } => None,
        }
    }

    /// Parse method of macro maps: run whatever the action describes
    pub fn dispatch(input: &mut ParseInput, action: &MacroAction) -> ParseResult {
        match action {
            MacroAction::Expand { replacement, arity } => {
                super::parse_methods::expand(input, replacement, *arity)
            }
            MacroAction::Command { handler, .. } => handler(input, action),
        }
    }
}

pub type EnvironmentHandler = fn(&mut ParseInput, &EnvironmentAction) -> ParseResult;

/// What `\begin{name}` opens
#[derive(Debug, Clone)]
pub struct EnvironmentAction {
    pub name: String,
    pub kind: NodeKind,
    /// Property names filled, in order, from the `{..}` arguments after `\begin{name}`
    pub parameters: Vec<String>,
    pub handler: EnvironmentHandler,
}

impl EnvironmentAction {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parameters: Vec::new(),
            handler: super::parse_methods::begin_environment,
        }
    }

    pub fn with_parameter(mut self, property: &str) -> Self {
        self.parameters.push(property.to_string());
        self
    }

    pub fn with_handler(mut self, handler: EnvironmentHandler) -> Self {
        self.handler = handler;
        self
    }

    /// Parse method of environment maps: run the action's handler
    pub fn dispatch(input: &mut ParseInput, action: &EnvironmentAction) -> ParseResult {
        (action.handler)(input, action)
    }
}

/// Union of the four action types, for category-addressed lookups
#[derive(Debug, Clone)]
pub enum SymbolAction {
    Character(CharacterAction),
    Delimiter(DelimiterAction),
    Macro(MacroAction),
    Environment(EnvironmentAction),
}

impl SymbolAction {
    pub fn category(&self) -> CategoryKind {
        match self {
            SymbolAction::Character(_) => CategoryKind::Character,
            SymbolAction::Delimiter(_) => CategoryKind::Delimiter,
            SymbolAction::Macro(_) => CategoryKind::Macro,
            SymbolAction::Environment(_) => CategoryKind::Environment,
        }
    }

    pub fn as_character(&self) -> Option<&CharacterAction> {
        match self {
            SymbolAction::Character(action) => Some(action),
            _ => None,
        }
    }

    pub fn as_delimiter(&self) -> Option<&DelimiterAction> {
        match self {
            SymbolAction::Delimiter(action) => Some(action),
            _ => None,
        }
    }

    pub fn as_macro(&self) -> Option<&MacroAction> {
        match self {
            SymbolAction::Macro(action) => Some(action),
            _ => None,
        }
    }

    pub fn as_environment(&self) -> Option<&EnvironmentAction> {
        match self {
            SymbolAction::Environment(action) => Some(action),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&CategoryKind::ALL).unwrap();
        assert_eq!(json, r#"["character","delimiter","macro","environment"]"#);
    }

    #[test]
    fn test_wrap_action_tags_category() {
        let action = Characters::wrap_action(CharacterAction::new("a"));
        assert_eq!(action.category(), CategoryKind::Character);
        assert_eq!(action.as_character().map(|a| a.text.as_str()), Some("a"));
        assert!(action.as_macro().is_none());
    }

    #[test]
    fn test_macro_static_args() {
        let action = MacroAction::command_with(
            crate::tex::symbols::parse_methods::space,
            &["0.167em"],
        );
        assert_eq!(action.arg(0), Some("0.167em"));
        assert_eq!(action.arg(1), None);
        assert_eq!(MacroAction::expand("#1", 1).arg(0), None);
    }
}
