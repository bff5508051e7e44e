//! Error types for schema loading, resolution, and validation.

use thiserror::Error;

/// Errors surfaced by the schema subsystem.
///
/// Nothing here is recovered internally: every failure is a hard stop for the
/// operation that triggered it. A failed catalog load is not cached, so a
/// later load may retry the fetch.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The discovery endpoint returned a non-success status.
    #[error("HTTP {status} loading schemas from '{url}'")]
    Fetch {
        /// HTTP status code returned by the discovery endpoint.
        status: u16,
        /// URL the fetch was issued against.
        url: String,
    },

    /// The HTTP request itself failed (connect, timeout, TLS, client build).
    #[error("transport error loading schemas from '{url}': {source}")]
    Transport {
        /// URL the fetch was issued against.
        url: String,
        /// Underlying reqwest error.
        source: reqwest::Error,
    },

    /// The discovery response body could not be interpreted.
    #[error("malformed discovery response from '{url}': {reason}")]
    Parse {
        /// URL the response came from.
        url: String,
        /// Reason the body could not be interpreted.
        reason: String,
    },

    /// A `$ref` named a schema that is not in the catalog.
    #[error("schema for '{reference}' not found")]
    NotFound {
        /// The reference locator that failed to resolve.
        reference: String,
    },

    /// The validator could not be compiled for the requested schema.
    #[error("cannot build validator for schema '{schema_name}': {reason}")]
    Compile {
        /// Name of the schema the wrapper referenced.
        schema_name: String,
        /// Reason the engine rejected the schema.
        reason: String,
    },

    /// The validated object does not conform to the schema.
    ///
    /// Carries only the first nonconformance reported by the engine.
    #[error("object {object} does not conform to '{schema_name}': {detail}")]
    Nonconforming {
        /// Name of the schema validated against.
        schema_name: String,
        /// The validated object, serialized as JSON.
        object: String,
        /// The engine's description of the first nonconformance.
        detail: String,
    },
}
