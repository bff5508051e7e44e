//! Fetching the raw schema catalog from the Sheets v4 Discovery API.
//!
//! [`DiscoveryClient`] performs one blocking GET against the discovery
//! endpoint and extracts the `schemas` member of the response body. It does
//! not retry and does not cache; caching is [`SchemaRegistry`]'s job.
//!
//! [`SchemaRegistry`]: crate::registry::SchemaRegistry

use std::time::Duration;

use serde_json::{Map, Value};
use tracing::error;

use crate::error::SchemaError;

/// The Google Discovery API description of the Sheets v4 API.
pub const DISCOVERY_URL: &str = "https://sheets.googleapis.com/$discovery/rest?version=v4";

/// Configuration for the discovery fetch.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// URL of the discovery document.
    pub url: String,
    /// HTTP timeout for the fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            url: DISCOVERY_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

/// A source of the raw (un-normalized) schema catalog.
///
/// [`DiscoveryClient`] is the production implementation; tests substitute
/// in-memory sources to exercise caching behavior without the network.
pub trait SchemaSource: Send + Sync {
    /// Fetch the raw catalog, keyed by the source's original schema names.
    fn fetch(&self) -> Result<Map<String, Value>, SchemaError>;
}

/// Blocking HTTP client for the discovery endpoint.
#[derive(Debug)]
pub struct DiscoveryClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl DiscoveryClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: DiscoveryConfig) -> Result<Self, SchemaError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SchemaError::Transport {
                url: config.url.clone(),
                source: e,
            })?;
        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The discovery URL this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SchemaSource for DiscoveryClient {
    fn fetch(&self) -> Result<Map<String, Value>, SchemaError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .map_err(|e| SchemaError::Transport {
                url: self.url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let err = SchemaError::Fetch {
                status: status.as_u16(),
                url: self.url.clone(),
            };
            error!("{err}");
            return Err(err);
        }

        let document: Value = response.json().map_err(|e| SchemaError::Parse {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        match document {
            Value::Object(mut document) => match document.remove("schemas") {
                Some(Value::Object(schemas)) => Ok(schemas),
                _ => Err(SchemaError::Parse {
                    url: self.url.clone(),
                    reason: "missing 'schemas' object".to_string(),
                }),
            },
            _ => Err(SchemaError::Parse {
                url: self.url.clone(),
                reason: "discovery document is not a JSON object".to_string(),
            }),
        }
    }
}
