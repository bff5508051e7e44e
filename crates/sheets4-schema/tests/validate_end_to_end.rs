//! End-to-end: discovery fetch through wiremock, catalog normalization,
//! `$ref` resolution, and object validation.

use std::sync::Arc;

use serde_json::json;
use sheets4_schema::{DiscoveryConfig, ObjectValidator, SchemaError, SchemaRegistry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn start_discovery_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/discovery/rest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "discovery#restDescription",
            "schemas": {
                "Address": {
                    "id": "Address",
                    "type": "object",
                    "properties": {
                        "city": { "type": "string" },
                        "state": { "type": "string" }
                    }
                },
                "Person": {
                    "id": "Person",
                    "type": "object",
                    "properties": {
                        "fullName": { "type": "string" },
                        "homeAddress": { "$ref": "Address" }
                    }
                }
            }
        })))
        // The catalog is loaded once no matter how many validations run.
        .expect(1)
        .mount(&server)
        .await;

    server
}

fn registry_for(uri: &str) -> Arc<SchemaRegistry> {
    let config = DiscoveryConfig {
        url: format!("{uri}/discovery/rest"),
        timeout_secs: 5,
    };
    Arc::new(SchemaRegistry::new(config).unwrap())
}

#[tokio::test]
async fn validates_objects_against_the_fetched_catalog() {
    let server = start_discovery_server().await;
    let uri = server.uri();

    // The client is blocking, so registry construction and validation both
    // run off the async runtime.
    let outcome = tokio::task::spawn_blocking(move || {
        let registry = registry_for(&uri);
        let names: Vec<String> = registry
            .catalog()?
            .names()
            .into_iter()
            .map(String::from)
            .collect();

        let validator = ObjectValidator::new(registry);
        validator.validate("address", &json!({ "city": "Chicago", "state": "IL" }))?;

        let zip_error = validator
            .validate(
                "address",
                &json!({ "city": "Chicago", "state": "IL", "zip": "60601" }),
            )
            .unwrap_err();

        let nested = json!({
            "full_name": "Jane Doe",
            "home_address": { "city": "Chicago", "state": "IL" }
        });
        validator.validate("person", &nested)?;

        Ok::<_, SchemaError>((names, zip_error))
    })
    .await
    .expect("validation task panicked")
    .unwrap();

    let (names, zip_error) = outcome;
    assert_eq!(names, ["address", "person"]);
    assert!(matches!(zip_error, SchemaError::Nonconforming { .. }));
}
