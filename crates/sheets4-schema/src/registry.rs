//! Process-wide caching of the normalized schema catalog.
//!
//! [`SchemaRegistry`] wraps a [`SchemaSource`] and guarantees that the
//! fetch-and-normalize sequence runs at most once per successful load, no
//! matter how many threads ask for the catalog concurrently. A failed load is
//! not cached; the next call retries the fetch.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::debug;

use crate::discovery::{DiscoveryClient, DiscoveryConfig, SchemaSource};
use crate::error::SchemaError;
use crate::normalize;

/// The normalized catalog: snake_case schema name to schema definition.
///
/// Immutable after construction. Shared between callers via `Arc`.
#[derive(Debug, Clone)]
pub struct SchemaCatalog {
    schemas: Map<String, Value>,
}

impl SchemaCatalog {
    pub(crate) fn from_raw(raw: Map<String, Value>) -> Self {
        Self {
            schemas: normalize::normalize(raw),
        }
    }

    /// Look up a schema definition by its normalized name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// True if the catalog has a schema with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// The names of all schemas in the catalog, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of schemas in the catalog.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if the catalog holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterate over (name, schema) pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.schemas.iter()
    }
}

/// Lazily populated, concurrency-safe holder of the [`SchemaCatalog`].
pub struct SchemaRegistry {
    source: Box<dyn SchemaSource>,
    catalog: RwLock<Option<Arc<SchemaCatalog>>>,
}

impl SchemaRegistry {
    /// Create a registry backed by the Sheets v4 Discovery API.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Transport` if the HTTP client cannot be built.
    pub fn new(config: DiscoveryConfig) -> Result<Self, SchemaError> {
        Ok(Self::with_source(Box::new(DiscoveryClient::new(config)?)))
    }

    /// Create a registry backed by an arbitrary schema source.
    pub fn with_source(source: Box<dyn SchemaSource>) -> Self {
        Self {
            source,
            catalog: RwLock::new(None),
        }
    }

    /// The catalog, fetched and normalized on first call.
    ///
    /// Concurrent first callers block until the single fetch completes and
    /// then all observe the same catalog instance. Callers after a successful
    /// load take only a read lock.
    ///
    /// # Errors
    ///
    /// Propagates any [`SchemaError`] from the fetch or parse. The failure is
    /// not cached: a later call attempts the fetch again.
    pub fn catalog(&self) -> Result<Arc<SchemaCatalog>, SchemaError> {
        if let Some(catalog) = self.catalog.read().as_ref() {
            return Ok(Arc::clone(catalog));
        }

        let mut slot = self.catalog.write();
        // Another caller may have populated the slot while we waited.
        if let Some(catalog) = slot.as_ref() {
            return Ok(Arc::clone(catalog));
        }

        debug!("loading schema catalog");
        let raw = self.source.fetch()?;
        let catalog = Arc::new(SchemaCatalog::from_raw(raw));
        debug!("loaded {} schemas", catalog.len());
        *slot = Some(Arc::clone(&catalog));
        Ok(catalog)
    }
}
