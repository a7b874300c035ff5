//! Catalog registry
//!
//! Named catalogs the binary and embedders can choose between. The defaults are the two
//! built-in grammars; configuration files register additional ones on top.

use super::{Catalog, CatalogError};
use std::collections::HashMap;

pub struct CatalogRegistry {
    catalogs: HashMap<String, Catalog>,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        CatalogRegistry {
            catalogs: HashMap::new(),
        }
    }

    /// Register a catalog under its own name, replacing any catalog with the same name.
    pub fn register(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.name().to_string(), catalog);
    }

    pub fn get(&self, name: &str) -> Option<&Catalog> {
        self.catalogs.get(name)
    }

    /// Like [`get`](Self::get), for callers that want an error to propagate.
    pub fn resolve(&self, name: &str) -> Result<&Catalog, CatalogError> {
        self.get(name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.catalogs.contains_key(name)
    }

    /// All registered catalogs, sorted by name
    pub fn list(&self) -> Vec<&Catalog> {
        let mut catalogs: Vec<_> = self.catalogs.values().collect();
        catalogs.sort_by(|a, b| a.name().cmp(b.name()));
        catalogs
    }

    /// Create a registry holding the `full` and `legacy` grammars
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Catalog::standard().clone());
        registry.register(Catalog::legacy().clone());
        registry
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
