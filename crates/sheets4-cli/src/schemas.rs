//! # Schemas Subcommand
//!
//! Lists the schema names published by the discovery endpoint, after
//! normalization. Useful for finding the name to pass to `validate`.

use clap::Args;

use crate::DiscoveryOpts;

/// Arguments for the schemas subcommand.
#[derive(Args, Debug)]
pub struct SchemasArgs {
    #[command(flatten)]
    pub discovery: DiscoveryOpts,
}

/// Print every schema name in the catalog, one per line, sorted.
pub fn run(args: &SchemasArgs) -> anyhow::Result<()> {
    let registry = args.discovery.registry()?;
    let catalog = registry.catalog()?;
    for name in catalog.names() {
        println!("{name}");
    }
    Ok(())
}
