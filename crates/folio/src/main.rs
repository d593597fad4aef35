//! Folio CLI - inspect a content tree the way the engine sees it.
//!
//! Provides commands for:
//! - `show`: Parse one document
//! - `list`: Parse a directory tree into a collection
//! - `resolve`: Map an identifier back to its source file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GlobalArgs, ListArgs, ResolveArgs, ShowArgs};
use output::Output;

/// Folio - plain-text content engine.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single document and print it as JSON.
    Show(ShowArgs),
    /// Parse every document below a directory and print them as JSON.
    List(ListArgs),
    /// Print the source file an identifier refers to.
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.global.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Show(args) => args.execute(&output),
        Commands::List(args) => args.execute(&cli.global, &output),
        Commands::Resolve(args) => args.execute(&cli.global, &output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
