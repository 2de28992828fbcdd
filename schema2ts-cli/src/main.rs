//! schema2ts command line tool.
//!
//! Reads JSON Schema files and writes TypeScript declarations to a file or
//! stdout.

mod args;
mod loader;

use anyhow::{Context, Result, bail};
use args::Cli;
use clap::Parser;
use schema2ts::codegen::{Generator, GeneratorOptions};
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    run(&cli)
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let files = cli.input_files();
    if files.is_empty() {
        bail!("no schema files given (pass FILES or --files a.json,b.json)");
    }

    let options = match &cli.config {
        Some(path) => loader::load_options(path)?,
        None => GeneratorOptions::new(),
    };
    let generator = Generator::new(options.merge(cli.overrides()));

    let schemas = loader::load_schemas(&files)?;
    let declarations = generator
        .generate(&schemas)
        .context("failed to generate declarations")?;

    match &cli.output {
        Some(path) => {
            loader::write_output(path, &declarations)?;
            eprintln!(
                "Wrote {} schema(s) to {}",
                schemas.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", declarations).context("failed to write to stdout")?;
        }
    }

    Ok(())
}
