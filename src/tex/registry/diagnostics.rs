//! Configuration diagnostics
//!
//! Problems found while building lookup chains are never fatal. They are
//! reported as [`Diagnostic`] events to the sink the registry was built with,
//! and the offending name is left out of the chain.

use crate::tex::symbols::CategoryKind;
use std::fmt;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No map is registered under `name`
    MissingMap { name: String, category: CategoryKind },
    /// `name` is registered, but for another category
    CategoryMismatch {
        name: String,
        category: CategoryKind,
        found: CategoryKind,
    },
}

impl Diagnostic {
    pub fn name(&self) -> &str {
        match self {
            Diagnostic::MissingMap { name, .. } | Diagnostic::CategoryMismatch { name, .. } => name,
        }
    }

    pub fn category(&self) -> CategoryKind {
        match self {
            Diagnostic::MissingMap { category, .. }
            | Diagnostic::CategoryMismatch { category, .. } => *category,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingMap { name, category } => {
                write!(f, "{category} map '{name}' not found; omitted")
            }
            Diagnostic::CategoryMismatch {
                name,
                category,
                found,
            } => write!(
                f,
                "map '{name}' is a {found} map and cannot be added to the {category} chain; omitted"
            ),
        }
    }
}

/// Receiver for configuration diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Default sink: logs each diagnostic as a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            category = %diagnostic.category(),
            name = diagnostic.name(),
            "{diagnostic}"
        );
    }
}

/// Sink that records every diagnostic, for inspection in tests and tooling
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything emitted so far
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drain everything emitted so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
