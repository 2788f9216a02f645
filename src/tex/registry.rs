//! Symbol registry
//!
//!     The registry owns every named symbol map (the [`MapStore`]) and the four
//!     live lookup chains, one [`Configuration`] per category. Maps are
//!     registered first, then chains are built from ordered name lists:
//!
//!         registry.register(latin);
//!         registry.register(greek);
//!         registry.configure(&RegistryConfig::new().with(CategoryKind::Character, ["latin", "greek"]));
//!         registry.lookup(CategoryKind::Character, "a");   // resolved by "latin"
//!
//!     `configure` replaces every chain, `append` extends chains in place.
//!     Chains hold the map instance that was current when the name was added,
//!     so registering a new map under an existing name only affects later adds.
//!
//!     Names that cannot be resolved are reported to the registry's
//!     [`DiagnosticSink`] and skipped; configuration never fails.
//!
//! Instances
//!
//!     Prefer an explicitly constructed registry passed to the parser
//!     ([`SymbolRegistry::new`], [`SymbolRegistry::with_diagnostics`]). A lazily
//!     built process-wide instance is available through [`SymbolRegistry::global`].
//!
//! ## Modules
//!
//! - `configuration` - one ordered chain
//! - `config` - declarative name lists and packages
//! - `diagnostics` - diagnostic events and sinks
//! - `store` - the authoritative map store

pub mod config;
pub mod configuration;
pub mod diagnostics;
pub mod store;

pub use config::{Package, PackageList, RegistryConfig};
pub use configuration::{Configuration, SharedMap};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use store::MapStore;

use crate::tex::error::ParseResult;
use crate::tex::symbols::{
    Category, CategoryKind, Characters, Delimiters, Environments, Macros, ParseInput,
    RegisteredMap, SymbolAction, SymbolMap,
};
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

pub struct SymbolRegistry {
    store: MapStore,
    character: Configuration<Characters>,
    delimiter: Configuration<Delimiters>,
    macros: Configuration<Macros>,
    environment: Configuration<Environments>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl SymbolRegistry {
    /// Empty registry reporting diagnostics through `tracing`
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingSink))
    }

    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        let mut registry = Self {
            store: MapStore::new(),
            character: Configuration::new(),
            delimiter: Configuration::new(),
            macros: Configuration::new(),
            environment: Configuration::new(),
            diagnostics,
        };
        registry.configure(&RegistryConfig::default());
        registry
    }

    /// The process-wide registry, created empty on first access
    pub fn global() -> &'static Mutex<SymbolRegistry> {
        static REGISTRY: OnceLock<Mutex<SymbolRegistry>> = OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(SymbolRegistry::new()))
    }

    /// Install `map` under its name, returning the map it replaced
    pub fn register<M: SymbolMap + 'static>(&mut self, map: M) -> Option<RegisteredMap> {
        self.register_shared(RegisteredMap::new(map))
    }

    pub fn register_shared(&mut self, map: RegisteredMap) -> Option<RegisteredMap> {
        let replaced = self.store.insert(map.clone());
        tracing::debug!(
            name = map.name(),
            category = %map.category(),
            replaced = replaced.is_some(),
            "registered symbol map"
        );
        replaced
    }

    /// The map currently registered under `name`
    pub fn map(&self, name: &str) -> Option<&RegisteredMap> {
        self.store.get(name)
    }

    pub fn store(&self) -> &MapStore {
        &self.store
    }

    /// Rebuild all four chains from `config`; a category with no names ends up empty
    pub fn configure(&mut self, config: &RegistryConfig) {
        self.character = Configuration::new();
        self.delimiter = Configuration::new();
        self.macros = Configuration::new();
        self.environment = Configuration::new();
        self.append(config);
        tracing::debug!(chains = %self, "configured symbol registry");
    }

    /// Add the names in `config` after the existing entries of each chain
    pub fn append(&mut self, config: &RegistryConfig) {
        let store = &self.store;
        let sink = self.diagnostics.as_ref();
        extend(&mut self.character, &config.character, store, sink);
        extend(&mut self.delimiter, &config.delimiter, store, sink);
        extend(&mut self.macros, &config.macros, store, sink);
        extend(&mut self.environment, &config.environment, store, sink);
    }

    pub fn parse(&self, category: CategoryKind, input: &mut ParseInput) -> ParseResult {
        match category {
            CategoryKind::Character => self.character.parse(input),
            CategoryKind::Delimiter => self.delimiter.parse(input),
            CategoryKind::Macro => self.macros.parse(input),
            CategoryKind::Environment => self.environment.parse(input),
        }
    }

    pub fn lookup(&self, category: CategoryKind, symbol: &str) -> Option<SymbolAction> {
        match category {
            CategoryKind::Character => lookup_action(&self.character, symbol),
            CategoryKind::Delimiter => lookup_action(&self.delimiter, symbol),
            CategoryKind::Macro => lookup_action(&self.macros, symbol),
            CategoryKind::Environment => lookup_action(&self.environment, symbol),
        }
    }

    pub fn contains(&self, category: CategoryKind, symbol: &str) -> bool {
        match category {
            CategoryKind::Character => self.character.contains(symbol),
            CategoryKind::Delimiter => self.delimiter.contains(symbol),
            CategoryKind::Macro => self.macros.contains(symbol),
            CategoryKind::Environment => self.environment.contains(symbol),
        }
    }

    /// Typed lookup: the action type follows from the category marker
    pub fn lookup_as<C: RegistrySlot>(&self, symbol: &str) -> Option<C::Action> {
        C::slot(self).lookup(symbol)
    }

    /// A map by name from whichever chain holds it, searched in category order
    pub fn retrieve(&self, name: &str) -> Option<RegisteredMap> {
        retrieve_from(&self.character, name)
            .or_else(|| retrieve_from(&self.delimiter, name))
            .or_else(|| retrieve_from(&self.macros, name))
            .or_else(|| retrieve_from(&self.environment, name))
    }

    pub fn configuration<C: RegistrySlot>(&self) -> &Configuration<C> {
        C::slot(self)
    }

    pub fn characters(&self) -> &Configuration<Characters> {
        &self.character
    }

    pub fn delimiters(&self) -> &Configuration<Delimiters> {
        &self.delimiter
    }

    pub fn macros(&self) -> &Configuration<Macros> {
        &self.macros
    }

    pub fn environments(&self) -> &Configuration<Environments> {
        &self.environment
    }

    /// Chain names for one category, in order
    pub fn chain_names(&self, category: CategoryKind) -> Vec<&str> {
        match category {
            CategoryKind::Character => self.character.names(),
            CategoryKind::Delimiter => self.delimiter.names(),
            CategoryKind::Macro => self.macros.names(),
            CategoryKind::Environment => self.environment.names(),
        }
    }
}

fn extend<C: Category>(
    chain: &mut Configuration<C>,
    names: &[String],
    store: &MapStore,
    sink: &dyn DiagnosticSink,
) {
    for name in names {
        chain.add(name, store, sink);
    }
}

fn lookup_action<C: Category>(chain: &Configuration<C>, symbol: &str) -> Option<SymbolAction> {
    chain.lookup(symbol).map(C::wrap_action)
}

fn retrieve_from<C: Category>(chain: &Configuration<C>, name: &str) -> Option<RegisteredMap> {
    chain.retrieve(name).map(|map| C::wrap_map(Arc::clone(map)))
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in CategoryKind::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{kind}:")?;
            let names = self.chain_names(*kind);
            if !names.is_empty() {
                write!(f, " {}", names.join(", "))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolRegistry")
            .field("maps", &self.store.names())
            .field("character", &self.character)
            .field("delimiter", &self.delimiter)
            .field("macro", &self.macros)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Typed access to the chain a category marker selects
pub trait RegistrySlot: Category {
    fn slot(registry: &SymbolRegistry) -> &Configuration<Self>;
}

macro_rules! registry_slot {
    ($marker:ty, $field:ident) => {
        impl RegistrySlot for $marker {
            fn slot(registry: &SymbolRegistry) -> &Configuration<Self> {
                &registry.$field
            }
        }
    };
}

registry_slot!(Characters, character);
registry_slot!(Delimiters, delimiter);
registry_slot!(Macros, macros);
registry_slot!(Environments, environment);
