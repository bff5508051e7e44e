//! Validation of API objects against named catalog schemas.
//!
//! [`ObjectValidator`] wraps a schema name in a one-line `$ref` schema,
//! compiles it with the `jsonschema` engine configured to resolve references
//! through [`CatalogRetriever`], and surfaces the first nonconformance as a
//! [`SchemaError::Nonconforming`].

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, error};

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;
use crate::resolve::CatalogRetriever;

/// Base URI for the wrapper schema. Bare schema-name `$ref`s resolve against
/// this base, so every reference handed to the retriever is an absolute URI
/// whose final path segment is the schema name.
const SCHEMA_BASE_URI: &str = "json-schema://sheets4/";

/// Validates objects against a named schema from the catalog.
pub struct ObjectValidator {
    registry: Arc<SchemaRegistry>,
}

impl ObjectValidator {
    /// Create a validator backed by the given registry.
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self { registry }
    }

    /// Validate `object` against the schema named `schema_name`.
    ///
    /// Returns `Ok(())` if the object conforms. Nested `$ref`s are resolved
    /// transitively through the registry's catalog.
    ///
    /// # Errors
    ///
    /// - `SchemaError::Compile` if the schema (or a schema it references)
    ///   cannot be resolved or compiled; a missing referenced schema surfaces
    ///   here with the underlying not-found detail.
    /// - `SchemaError::Nonconforming` carrying the first nonconformance
    ///   reported by the engine, logged at error level.
    pub fn validate(&self, schema_name: &str, object: &Value) -> Result<(), SchemaError> {
        debug!("validating {object} against '{schema_name}'");

        let wrapper = json!({ "$id": SCHEMA_BASE_URI, "$ref": schema_name });
        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft202012);
        options.with_retriever(CatalogRetriever::new(Arc::clone(&self.registry)));
        let validator = options.build(&wrapper).map_err(|e| SchemaError::Compile {
            schema_name: schema_name.to_string(),
            reason: e.to_string(),
        })?;

        if let Some(first) = validator.iter_errors(object).next() {
            let err = SchemaError::Nonconforming {
                schema_name: schema_name.to_string(),
                object: object.to_string(),
                detail: first.to_string(),
            };
            error!("{err}");
            return Err(err);
        }

        debug!("object {object} conforms to '{schema_name}'");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::SchemaSource;
    use serde_json::Map;

    /// Catalog with a closed `Address` schema and a `Person` schema that
    /// references it, in raw discovery (PascalCase/camelCase) form.
    struct FixedSource;

    impl SchemaSource for FixedSource {
        fn fetch(&self) -> Result<Map<String, Value>, SchemaError> {
            let mut raw = Map::new();
            raw.insert(
                "Address".to_string(),
                json!({
                    "id": "Address",
                    "type": "object",
                    "properties": {
                        "city": { "type": "string" },
                        "state": { "type": "string" }
                    }
                }),
            );
            raw.insert(
                "Person".to_string(),
                json!({
                    "id": "Person",
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "homeAddress": { "$ref": "Address" }
                    }
                }),
            );
            raw.insert(
                "Sheet".to_string(),
                json!({
                    "id": "Sheet",
                    "type": "object",
                    "properties": {
                        "properties": { "$ref": "SheetProperties" }
                    }
                }),
            );
            raw.insert(
                "SheetProperties".to_string(),
                json!({
                    "id": "SheetProperties",
                    "type": "object",
                    "properties": { "title": { "type": "string" } }
                }),
            );
            raw.insert(
                "Orphan".to_string(),
                json!({
                    "id": "Orphan",
                    "type": "object",
                    "properties": {
                        "child": { "$ref": "MissingSchema" }
                    }
                }),
            );
            Ok(raw)
        }
    }

    fn validator() -> ObjectValidator {
        ObjectValidator::new(Arc::new(SchemaRegistry::with_source(Box::new(FixedSource))))
    }

    #[test]
    fn a_conforming_object_validates_silently() {
        let object = json!({ "city": "Chicago", "state": "IL" });
        validator().validate("address", &object).unwrap();
    }

    #[test]
    fn an_undeclared_field_is_a_nonconformance() {
        let object = json!({ "city": "Chicago", "state": "IL", "zip": "60601" });
        let err = validator().validate("address", &object).unwrap_err();
        match err {
            SchemaError::Nonconforming {
                schema_name,
                object,
                ..
            } => {
                assert_eq!(schema_name, "address");
                assert!(object.contains("60601"));
            }
            other => panic!("expected Nonconforming, got: {other}"),
        }
    }

    #[test]
    fn a_type_mismatch_is_a_nonconformance() {
        let object = json!({ "city": 42 });
        let err = validator().validate("address", &object).unwrap_err();
        assert!(matches!(err, SchemaError::Nonconforming { .. }));
    }

    #[test]
    fn nested_refs_resolve_transitively() {
        let object = json!({
            "name": "James",
            "home_address": { "city": "Chicago", "state": "IL" }
        });
        validator().validate("person", &object).unwrap();

        let bad = json!({
            "name": "James",
            "home_address": { "city": "Chicago", "zip": "60601" }
        });
        let err = validator().validate("person", &bad).unwrap_err();
        assert!(matches!(err, SchemaError::Nonconforming { .. }));
    }

    #[test]
    fn a_ref_under_a_property_named_properties_still_constrains() {
        let ok = json!({ "properties": { "title": "Sheet1" } });
        validator().validate("sheet", &ok).unwrap();

        let bad = json!({ "properties": { "title": 42 } });
        let err = validator().validate("sheet", &bad).unwrap_err();
        assert!(matches!(err, SchemaError::Nonconforming { .. }));
    }

    #[test]
    fn an_unknown_top_level_schema_fails_with_not_found_detail() {
        let err = validator().validate("no_such_schema", &json!({})).unwrap_err();
        match err {
            SchemaError::Compile { schema_name, reason } => {
                assert_eq!(schema_name, "no_such_schema");
                assert!(reason.contains("not found"), "reason: {reason}");
            }
            other => panic!("expected Compile, got: {other}"),
        }
    }

    #[test]
    fn a_missing_referenced_schema_fails_before_validation() {
        let err = validator().validate("orphan", &json!({})).unwrap_err();
        match err {
            SchemaError::Compile { reason, .. } => {
                assert!(reason.contains("not found"), "reason: {reason}");
            }
            other => panic!("expected Compile, got: {other}"),
        }
    }

    #[test]
    fn nonconforming_error_embeds_object_schema_and_detail() {
        let object = json!({ "city": "Chicago", "zip": "60601" });
        let message = validator()
            .validate("address", &object)
            .unwrap_err()
            .to_string();
        assert!(message.contains("does not conform to 'address'"));
        assert!(message.contains("60601"));
    }
}
