//! `$ref` resolution against the schema registry.
//!
//! The `jsonschema` engine hands every unresolved reference URI to a
//! [`Retrieve`] implementation. Normalized Sheets schemas reference each other
//! by bare snake_case name, so the resolved URI's final path segment is the
//! schema name; [`CatalogRetriever`] extracts it and looks it up in the
//! registry's catalog.

use std::sync::Arc;

use jsonschema::{Retrieve, Uri};
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;

/// Resolves schema references by name against a [`SchemaRegistry`].
pub struct CatalogRetriever {
    registry: Arc<SchemaRegistry>,
}

impl CatalogRetriever {
    /// Create a retriever backed by the given registry.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a reference locator to a schema definition.
    ///
    /// The returned copy always carries `unevaluatedProperties: false`,
    /// independent of how the catalog was produced, so resolved schemas stay
    /// closed even against a differently-sourced catalog.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the catalog has no schema with the
    /// referenced name, or any error from loading the catalog itself.
    pub fn resolve(&self, reference: &str) -> Result<Value, SchemaError> {
        let name = schema_name(reference);
        debug!("reading schema '{name}'");

        let catalog = self.registry.catalog()?;
        let Some(schema) = catalog.get(name) else {
            return Err(SchemaError::NotFound {
                reference: reference.to_string(),
            });
        };

        let mut schema = schema.clone();
        if let Value::Object(object) = &mut schema {
            object.insert("unevaluatedProperties".to_string(), Value::Bool(false));
        }
        Ok(schema)
    }
}

impl Retrieve for CatalogRetriever {
    fn retrieve(&self, uri: &Uri<&str>) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.resolve(uri.as_str())?)
    }
}

/// The final path segment of a reference locator.
///
/// `json-schema://sheets4/grid_data` and the bare `grid_data` both name the
/// `grid_data` schema.
fn schema_name(reference: &str) -> &str {
    let path = match reference.split(['?', '#']).next() {
        Some(path) => path,
        None => reference,
    };
    match path.rsplit('/').next() {
        Some(name) => name,
        None => path,
    }
}
