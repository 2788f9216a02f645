//! Configuration: the ordered lookup chain for one category
//!
//! A configuration holds shared handles to the registry's canonical maps in
//! the order they were added. Duplicates are kept and tried again.
//!
//! Resolution policy
//!
//!     `contains` / `lookup` are ownership queries: the first map that contains
//!     the symbol answers, even if its own lookup comes back empty.
//!
//!     `parse` is a capability query: maps are tried in order and the first
//!     non-absent result wins. A map that contains the symbol but declines
//!     to parse it hands over to the next map.
//!
//!     Structural errors from a map are returned as they are.

use super::diagnostics::{Diagnostic, DiagnosticSink};
use super::store::MapStore;
use crate::tex::error::ParseResult;
use crate::tex::symbols::{Category, ParseInput, SymbolMap};
use std::fmt;
use std::sync::Arc;

pub type SharedMap<C> = Arc<dyn SymbolMap<Category = C>>;

pub struct Configuration<C: Category> {
    maps: Vec<SharedMap<C>>,
}

impl<C: Category> Configuration<C> {
    pub fn new() -> Self {
        Self { maps: Vec::new() }
    }

    /// Resolve `name` in `store` and append it to the chain
    ///
    /// A missing name, or a name registered for another category, is reported
    /// to `sink` and skipped. Returns whether the map was added.
    pub fn add(&mut self, name: &str, store: &MapStore, sink: &dyn DiagnosticSink) -> bool {
        let Some(registered) = store.get(name) else {
            sink.emit(Diagnostic::MissingMap {
                name: name.to_string(),
                category: C::KIND,
            });
            return false;
        };

        match C::unwrap_map(registered) {
            Some(map) => {
                self.maps.push(map);
                true
            }
            None => {
                sink.emit(Diagnostic::CategoryMismatch {
                    name: name.to_string(),
                    category: C::KIND,
                    found: registered.category(),
                });
                false
            }
        }
    }

    /// Append a map directly, bypassing the store
    pub fn push(&mut self, map: SharedMap<C>) {
        self.maps.push(map);
    }

    /// First capable map wins; `Ok(None)` when none applies
    pub fn parse(&self, input: &mut ParseInput) -> ParseResult {
        for map in &self.maps {
            if let Some(parsed) = map.parse(input)? {
                return Ok(Some(parsed));
            }
        }
        Ok(None)
    }

    /// Lookup in the first map that contains `symbol`, without falling through
    pub fn lookup(&self, symbol: &str) -> Option<C::Action> {
        self.applicable(symbol)?.lookup(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.applicable(symbol).is_some()
    }

    /// The first map in the chain that contains `symbol`
    pub fn applicable(&self, symbol: &str) -> Option<&SharedMap<C>> {
        self.maps.iter().find(|map| map.contains(symbol))
    }

    /// The first map in the chain named `name`
    pub fn retrieve(&self, name: &str) -> Option<&SharedMap<C>> {
        self.maps.iter().find(|map| map.name() == name)
    }

    /// Map names in chain order
    pub fn names(&self) -> Vec<&str> {
        self.maps.iter().map(|map| map.name()).collect()
    }

    pub fn maps(&self) -> &[SharedMap<C>] {
        &self.maps
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl<C: Category> Default for Configuration<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Category> Clone for Configuration<C> {
    fn clone(&self) -> Self {
        Self {
            maps: self.maps.clone(),
        }
    }
}

impl<C: Category> fmt::Display for Configuration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

impl<C: Category> fmt::Debug for Configuration<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("category", &C::KIND)
            .field("maps", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::registry::CollectingSink;
    use crate::tex::symbols::{
        parse_methods, CategoryKind, CharacterMap, Characters, MacroMap, RegisteredMap,
    };

    fn store() -> MapStore {
        let mut store = MapStore::new();
        store.insert(RegisteredMap::new(CharacterMap::from_chars(
            "latin",
            "abc",
            parse_methods::variable,
        )));
        store.insert(RegisteredMap::new(CharacterMap::from_chars(
            "greek",
            "αβγ",
            parse_methods::variable,
        )));
        store.insert(RegisteredMap::new(MacroMap::macros("core")));
        store
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let store = store();
        let sink = CollectingSink::new();
        let mut chain = Configuration::<Characters>::new();

        assert!(chain.add("greek", &store, &sink));
        assert!(chain.add("latin", &store, &sink));
        assert!(chain.add("greek", &store, &sink));

        assert_eq!(chain.names(), vec!["greek", "latin", "greek"]);
        assert_eq!(chain.to_string(), "greek, latin, greek");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_add_missing_name_warns() {
        let store = store();
        let sink = CollectingSink::new();
        let mut chain = Configuration::<Characters>::new();

        assert!(!chain.add("cyrillic", &store, &sink));
        assert!(chain.is_empty());
        assert_eq!(
            sink.events(),
            vec![Diagnostic::MissingMap {
                name: "cyrillic".to_string(),
                category: CategoryKind::Character,
            }]
        );
    }

    #[test]
    fn test_add_wrong_category_warns() {
        let store = store();
        let sink = CollectingSink::new();
        let mut chain = Configuration::<Characters>::new();

        assert!(!chain.add("core", &store, &sink));
        assert!(chain.is_empty());
        assert_eq!(
            sink.events(),
            vec![Diagnostic::CategoryMismatch {
                name: "core".to_string(),
                category: CategoryKind::Character,
                found: CategoryKind::Macro,
            }]
        );
    }

    #[test]
    fn test_lookup_and_retrieve() {
        let store = store();
        let sink = CollectingSink::new();
        let mut chain = Configuration::<Characters>::new();
        chain.add("latin", &store, &sink);
        chain.add("greek", &store, &sink);

        assert_eq!(chain.lookup("β").map(|a| a.text), Some("β".to_string()));
        assert_eq!(chain.applicable("a").map(|m| m.name()), Some("latin"));
        assert!(!chain.contains("5"));
        assert_eq!(chain.lookup("5"), None);
        assert_eq!(chain.retrieve("greek").map(|m| m.name()), Some("greek"));
        assert!(chain.retrieve("core").is_none());
    }

    #[test]
    fn test_empty_chain_parses_nothing() {
        let chain = Configuration::<Characters>::new();
        let mut input = ParseInput::new("a");
        assert_eq!(chain.parse(&mut input), Ok(None));
        assert_eq!(chain.to_string(), "");
    }
}
