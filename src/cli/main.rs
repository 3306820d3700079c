//! relation2dbml binary
//!
//! Reads a schema description JSON and a relation definitions YAML file and
//! prints the schema as DBML with the inferred `Ref` statements appended.

use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use relation2dbml::cli::commands::{GenerateOptions, handle_generate};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser)]
#[command(name = "relation2dbml", version, about = "Generate DBML with inferred relations")]
struct Cli {
    /// Schema description JSON produced by a DBML database connector
    schema_file: PathBuf,

    /// Relation definitions file
    #[arg(short, long, default_value = relation2dbml::import::DEFAULT_DEFINITIONS_PATH)]
    input_file: PathBuf,

    /// Write the DBML to this file instead of stdout
    #[arg(short, long)]
    out_file: Option<PathBuf>,

    /// Show debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        debug!("{:?}", e);
        exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let options = GenerateOptions {
        schema_file: cli.schema_file,
        input_file: Some(cli.input_file),
        out_file: cli.out_file,
    };
    handle_generate(&options).context("DBML generation failed")
}
