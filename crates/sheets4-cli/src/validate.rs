//! # Validate Subcommand
//!
//! Validates a JSON document against a named catalog schema.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use sheets4_schema::ObjectValidator;

use crate::DiscoveryOpts;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Name of the schema to validate against (e.g. `batch_update_spreadsheet_request`).
    pub schema_name: String,

    /// Path to the JSON document to validate.
    pub file: PathBuf,

    #[command(flatten)]
    pub discovery: DiscoveryOpts,
}

/// Validate the document; any nonconformance surfaces as the process error.
pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read '{}'", args.file.display()))?;
    let object: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("'{}' is not valid JSON", args.file.display()))?;

    let registry = args.discovery.registry()?;
    ObjectValidator::new(registry).validate(&args.schema_name, &object)?;

    println!("{} conforms to '{}'", args.file.display(), args.schema_name);
    Ok(())
}
