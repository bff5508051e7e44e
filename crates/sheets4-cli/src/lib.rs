//! # sheets4-cli — subcommand handlers
//!
//! Argument structs and handlers for the `sheets4` binary. Each subcommand
//! module exposes an `Args` struct consumed by `main.rs` and a `run` function
//! that does the work against `sheets4-schema`.

pub mod schemas;
pub mod validate;

use std::sync::Arc;

use clap::Args;
use sheets4_schema::{DiscoveryConfig, SchemaRegistry};

/// Discovery endpoint options shared by all subcommands.
#[derive(Args, Debug)]
pub struct DiscoveryOpts {
    /// URL of the discovery document.
    #[arg(long, default_value = sheets4_schema::DISCOVERY_URL)]
    pub url: String,

    /// HTTP timeout for the discovery fetch, in seconds.
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,
}

impl DiscoveryOpts {
    /// Build a schema registry from these options.
    pub fn registry(&self) -> anyhow::Result<Arc<SchemaRegistry>> {
        let config = DiscoveryConfig {
            url: self.url.clone(),
            timeout_secs: self.timeout_secs,
        };
        Ok(Arc::new(SchemaRegistry::new(config)?))
    }
}
