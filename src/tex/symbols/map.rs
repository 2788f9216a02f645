//! Symbol maps
//!
//! A symbol map is a named table resolving symbols of one category. All
//! variants share the [`SymbolMap`] contract: `contains` and `lookup` answer
//! ownership questions, `parse` runs the map's parse method. An unknown symbol
//! is never an error, it is `false`/`None`/`Ok(None)`.

use super::category::{
    Category, CategoryKind, CharacterAction, Characters, Delimiters, EnvironmentAction,
    Environments, MacroAction, Macros,
};
use super::input::ParseInput;
use crate::tex::error::ParseResult;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Parse method attached to a map: turns an action into a parse result
pub type ParseMethod<C> = fn(&mut ParseInput, &<C as Category>::Action) -> ParseResult;

/// Contract shared by every map variant
pub trait SymbolMap: Send + Sync {
    type Category: Category;

    /// Registry-unique name of this map
    fn name(&self) -> &str;

    fn contains(&self, symbol: &str) -> bool;

    /// The action for `symbol`, or `None` when this map does not handle it
    fn lookup(&self, symbol: &str) -> Option<<Self::Category as Category>::Action>;

    /// Parse `input.symbol()`. `Ok(None)` means this map does not apply and the
    /// next map should be tried; `Err` is a structural failure.
    fn parse(&self, input: &mut ParseInput) -> ParseResult;
}

/// A registered map of any category, as held by the map store
#[derive(Clone)]
pub enum RegisteredMap {
    Character(Arc<dyn SymbolMap<Category = Characters>>),
    Delimiter(Arc<dyn SymbolMap<Category = Delimiters>>),
    Macro(Arc<dyn SymbolMap<Category = Macros>>),
    Environment(Arc<dyn SymbolMap<Category = Environments>>),
}

impl RegisteredMap {
    pub fn new<M: SymbolMap + 'static>(map: M) -> Self {
        <M::Category as Category>::wrap_map(Arc::new(map))
    }

    pub fn name(&self) -> &str {
        match self {
            RegisteredMap::Character(map) => map.name(),
            RegisteredMap::Delimiter(map) => map.name(),
            RegisteredMap::Macro(map) => map.name(),
            RegisteredMap::Environment(map) => map.name(),
        }
    }

    pub fn category(&self) -> CategoryKind {
        match self {
            RegisteredMap::Character(_) => CategoryKind::Character,
            RegisteredMap::Delimiter(_) => CategoryKind::Delimiter,
            RegisteredMap::Macro(_) => CategoryKind::Macro,
            RegisteredMap::Environment(_) => CategoryKind::Environment,
        }
    }

    /// Whether two handles point at the same map instance
    pub fn ptr_eq(&self, other: &RegisteredMap) -> bool {
        match (self, other) {
            (RegisteredMap::Character(a), RegisteredMap::Character(b)) => Arc::ptr_eq(a, b),
            (RegisteredMap::Delimiter(a), RegisteredMap::Delimiter(b)) => Arc::ptr_eq(a, b),
            (RegisteredMap::Macro(a), RegisteredMap::Macro(b)) => Arc::ptr_eq(a, b),
            (RegisteredMap::Environment(a), RegisteredMap::Environment(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for RegisteredMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredMap")
            .field("name", &self.name())
            .field("category", &self.category())
            .finish()
    }
}

/// Hash-table backed map: symbol -> action, plus the parse method that acts on it
pub struct TableMap<C: Category> {
    name: String,
    table: HashMap<String, C::Action>,
    parse_method: ParseMethod<C>,
}

pub type CharacterMap = TableMap<Characters>;
pub type DelimiterMap = TableMap<Delimiters>;
pub type MacroMap = TableMap<Macros>;
pub type EnvironmentMap = TableMap<Environments>;

impl<C: Category> TableMap<C> {
    pub fn new(name: impl Into<String>, parse_method: ParseMethod<C>) -> Self {
        Self {
            name: name.into(),
            table: HashMap::new(),
            parse_method,
        }
    }

    /// Builder form of [`TableMap::insert`]
    pub fn with(mut self, symbol: impl Into<String>, action: C::Action) -> Self {
        self.insert(symbol, action);
        self
    }

    pub fn insert(&mut self, symbol: impl Into<String>, action: C::Action) -> Option<C::Action> {
        self.table.insert(symbol.into(), action)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Symbols in this map, sorted
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.table.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }
}

impl CharacterMap {
    /// Map every character of `chars` to itself
    pub fn from_chars(
        name: impl Into<String>,
        chars: &str,
        parse_method: ParseMethod<Characters>,
    ) -> Self {
        let mut map = Self::new(name, parse_method);
        for c in chars.chars() {
            let symbol = c.to_string();
            map.insert(symbol.clone(), CharacterAction::new(symbol));
        }
        map
    }
}

impl MacroMap {
    /// Macro map whose parse method runs each action's own handler
    pub fn macros(name: impl Into<String>) -> Self {
        Self::new(name, MacroAction::dispatch)
    }
}

impl EnvironmentMap {
    /// Environment map whose parse method runs each action's own handler
    pub fn environments(name: impl Into<String>) -> Self {
        Self::new(name, EnvironmentAction::dispatch)
    }
}

impl<C: Category> SymbolMap for TableMap<C> {
    type Category = C;

    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, symbol: &str) -> bool {
        self.table.contains_key(symbol)
    }

    fn lookup(&self, symbol: &str) -> Option<C::Action> {
        self.table.get(symbol).cloned()
    }

    fn parse(&self, input: &mut ParseInput) -> ParseResult {
        let Some(action) = self.table.get(input.symbol()) else {
            return Ok(None);
        };
        (self.parse_method)(input, action)
    }
}

impl<C: Category> fmt::Debug for TableMap<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableMap")
            .field("name", &self.name)
            .field("category", &C::KIND)
            .field("symbols", &self.symbols())
            .finish()
    }
}

/// Character map defined by a pattern instead of a table
///
/// `contains` is a full-match regex test; `lookup` returns the symbol itself.
pub struct RegexMap {
    name: String,
    pattern: Regex,
    parse_method: ParseMethod<Characters>,
}

impl RegexMap {
    /// The pattern is anchored at both ends
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        parse_method: ParseMethod<Characters>,
    ) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            name: name.into(),
            pattern,
            parse_method,
        })
    }
}

impl SymbolMap for RegexMap {
    type Category = Characters;

    fn name(&self) -> &str {
        &self.name
    }

    fn contains(&self, symbol: &str) -> bool {
        self.pattern.is_match(symbol)
    }

    fn lookup(&self, symbol: &str) -> Option<CharacterAction> {
        self.contains(symbol).then(|| CharacterAction::new(symbol))
    }

    fn parse(&self, input: &mut ParseInput) -> ParseResult {
        let Some(action) = self.lookup(input.symbol()) else {
            return Ok(None);
        };
        (self.parse_method)(input, &action)
    }
}

impl fmt::Debug for RegexMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegexMap")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::ast::NodeKind;
    use crate::tex::symbols::parse_methods;
    use crate::tex::symbols::Parsed;

    #[test]
    fn test_table_map_contract() {
        let map = CharacterMap::from_chars("latin", "abc", parse_methods::variable);

        assert_eq!(map.name(), "latin");
        assert!(map.contains("a"));
        assert!(!map.contains("z"));
        assert_eq!(map.lookup("b").map(|a| a.text), Some("b".to_string()));
        assert_eq!(map.lookup("z"), None);
        assert_eq!(map.symbols(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_unknown_symbol_is_absent() {
        let map = CharacterMap::from_chars("latin", "abc", parse_methods::variable);
        let mut input = ParseInput::new("7");
        assert_eq!(map.parse(&mut input), Ok(None));
    }

    #[test]
    fn test_parse_known_symbol_builds_node() {
        let map = CharacterMap::from_chars("latin", "abc", parse_methods::variable);
        let mut input = ParseInput::new("a");
        let parsed = map.parse(&mut input).unwrap().and_then(Parsed::into_node).unwrap();
        assert_eq!(parsed.kind(), NodeKind::Mi);
        assert_eq!(parsed.text(), "a");
    }

    #[test]
    fn test_regex_map_is_anchored() {
        let map = RegexMap::new("digits", "[0-9]", parse_methods::digit).unwrap();
        assert!(map.contains("5"));
        assert!(!map.contains("55"));
        assert!(!map.contains("x5"));
        assert_eq!(map.lookup("7").map(|a| a.text), Some("7".to_string()));
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        assert!(RegexMap::new("broken", "[0-9", parse_methods::digit).is_err());
    }

    #[test]
    fn test_registered_map_keeps_category_and_identity() {
        let map = RegisteredMap::new(MacroMap::macros("core"));
        assert_eq!(map.category(), CategoryKind::Macro);
        assert_eq!(map.name(), "core");
        assert!(map.ptr_eq(&map.clone()));
        assert!(!map.ptr_eq(&RegisteredMap::new(MacroMap::macros("core"))));
    }
}
