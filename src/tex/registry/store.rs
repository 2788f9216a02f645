//! Authoritative store of registered symbol maps, keyed by name

use crate::tex::symbols::RegisteredMap;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MapStore {
    maps: HashMap<String, RegisteredMap>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `map` under its name, returning the map it replaced
    ///
    /// Chains that already resolved the old map keep it; only later
    /// resolutions of the name see the new one.
    pub fn insert(&mut self, map: RegisteredMap) -> Option<RegisteredMap> {
        self.maps.insert(map.name().to_string(), map)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredMap> {
        self.maps.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.maps.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.maps.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tex::symbols::{parse_methods, CharacterMap, MacroMap};

    #[test]
    fn test_insert_replaces_by_name() {
        let mut store = MapStore::new();
        let first = RegisteredMap::new(CharacterMap::from_chars("latin", "ab", parse_methods::variable));
        let second = RegisteredMap::new(CharacterMap::from_chars("latin", "xy", parse_methods::variable));

        assert!(store.insert(first.clone()).is_none());
        let replaced = store.insert(second.clone()).unwrap();

        assert!(replaced.ptr_eq(&first));
        assert!(store.get("latin").unwrap().ptr_eq(&second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_names_are_sorted() {
        let mut store = MapStore::new();
        store.insert(RegisteredMap::new(MacroMap::macros("zeta")));
        store.insert(RegisteredMap::new(MacroMap::macros("alpha")));
        assert_eq!(store.names(), vec!["alpha", "zeta"]);
        assert!(store.contains("zeta"));
        assert!(!store.contains("beta"));
    }
}
