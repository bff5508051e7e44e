//! # sheets4 CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Sheets v4 schema tooling.
///
/// Lists the schemas published by the Google Sheets v4 Discovery API and
/// validates JSON documents against them.
#[derive(Parser, Debug)]
#[command(name = "sheets4", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List the schema names in the catalog.
    Schemas(sheets4_cli::schemas::SchemasArgs),
    /// Validate a JSON document against a named schema.
    Validate(sheets4_cli::validate::ValidateArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schemas(args) => sheets4_cli::schemas::run(&args),
        Commands::Validate(args) => sheets4_cli::validate::run(&args),
    }
}
