//! Post-processing of the raw discovery catalog.
//!
//! The discovery document names schemas and object properties in PascalCase
//! and camelCase. [`normalize`] rewrites all of them to snake_case so callers
//! can use the names their own objects use, and closes every top-level schema
//! to undeclared fields by setting `unevaluatedProperties: false`. `$ref`
//! values are rewritten with the same conversion, so every reference still
//! targets a key of the normalized catalog.

use heck::ToSnakeCase;
use serde_json::{Map, Value};

use crate::traverse::{traverse_mut, PathSegment};

const REF_KEY: &str = "$ref";
const UNEVALUATED_PROPERTIES: &str = "unevaluatedProperties";

/// Normalize a raw catalog in place and return it.
pub fn normalize(raw: Map<String, Value>) -> Map<String, Value> {
    let mut root = Value::Object(raw);
    traverse_mut(&mut root, &mut schema_visitor);
    match root {
        Value::Object(schemas) => schemas,
        // The visitor never replaces the root node.
        _ => Map::new(),
    }
}

/// Composite visitor applied to every node of the catalog tree.
///
/// Only object-typed nodes participate; everything else is left untouched.
fn schema_visitor(path: &[PathSegment], node: &mut Value) {
    let Value::Object(object) = node else { return };

    snake_case_schema_names(path, object);
    snake_case_schema_ids(path, object);
    add_unevaluated_properties(path, object);
    snake_case_property_names(path, object);
    snake_case_ref_values(path, object);
}

/// Rewrite every key of `object` to snake_case, preserving member order.
///
/// Keys beginning with `$` are schema keywords (`$ref`), not names; renaming
/// them would destroy the reference.
fn snake_case_keys(object: &mut Map<String, Value>) {
    let entries = std::mem::take(object);
    for (key, value) in entries {
        if key.starts_with('$') {
            object.insert(key, value);
        } else {
            object.insert(key.to_snake_case(), value);
        }
    }
}

/// The catalog root's keys are the schema names.
fn snake_case_schema_names(path: &[PathSegment], object: &mut Map<String, Value>) {
    if path.is_empty() {
        snake_case_keys(object);
    }
}

/// Keep each schema's `id` consistent with its renamed catalog key.
fn snake_case_schema_ids(path: &[PathSegment], object: &mut Map<String, Value>) {
    if path.len() == 1 {
        if let Some(Value::String(id)) = object.get_mut("id") {
            *id = id.to_snake_case();
        }
    }
}

/// Close every top-level schema to fields its `properties` do not declare.
fn add_unevaluated_properties(path: &[PathSegment], object: &mut Map<String, Value>) {
    if path.len() == 1 {
        object.insert(UNEVALUATED_PROPERTIES.to_string(), Value::Bool(false));
    }
}

/// Property names are the user-visible field names of validated objects.
fn snake_case_property_names(path: &[PathSegment], object: &mut Map<String, Value>) {
    if path.last().is_some_and(|segment| segment.is_key("properties")) {
        snake_case_keys(object);
    }
}

/// Rewrite `$ref` targets with the same conversion applied to schema names.
fn snake_case_ref_values(_path: &[PathSegment], object: &mut Map<String, Value>) {
    if let Some(Value::String(target)) = object.get_mut(REF_KEY) {
        *target = target.to_snake_case();
    }
}
