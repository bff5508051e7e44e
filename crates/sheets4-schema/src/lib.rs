//! # sheets4-schema — Sheets v4 API object validation
//!
//! Validates request and response objects for the Google Sheets v4 API
//! against the JSON schemas published by the Google Discovery API.
//!
//! The catalog of schemas is fetched once per [`SchemaRegistry`], normalized
//! to snake_case naming, closed to undeclared fields, and cached for the
//! registry's lifetime. Validation delegates constraint checking to the
//! `jsonschema` engine; this crate supplies the catalog and the `$ref`
//! resolution callback.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use serde_json::json;
//! use sheets4_schema::{DiscoveryConfig, ObjectValidator, SchemaRegistry};
//!
//! # fn main() -> Result<(), sheets4_schema::SchemaError> {
//! let registry = Arc::new(SchemaRegistry::new(DiscoveryConfig::default())?);
//!
//! // List the known schema names.
//! for name in registry.catalog()?.names() {
//!     println!("{name}");
//! }
//!
//! // Validate a request object.
//! let validator = ObjectValidator::new(registry);
//! let request = json!({ "requests": [] });
//! validator.validate("batch_update_spreadsheet_request", &request)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! [`SchemaRegistry`] may be shared across threads. The first `catalog()`
//! call performs the one blocking discovery fetch under a write lock;
//! concurrent first callers wait for it and observe the same catalog.
//! Subsequent calls take only a read lock.
//!
//! ## Logging
//!
//! Components emit `tracing` events: lookups and successful validations at
//! debug level, fetch and validation failures at error level. With no
//! subscriber installed nothing is logged and behavior is unaffected.

pub mod discovery;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod resolve;
pub mod traverse;
pub mod validate;

pub use discovery::{DiscoveryClient, DiscoveryConfig, SchemaSource, DISCOVERY_URL};
pub use error::SchemaError;
pub use registry::{SchemaCatalog, SchemaRegistry};
pub use resolve::CatalogRetriever;
pub use traverse::{traverse_mut, PathSegment};
pub use validate::ObjectValidator;
