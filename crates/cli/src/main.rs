//! autodiag CLI - Command-line front end for the symptom classifier
//!
//! This CLI lets a technician or a script:
//! - Evaluate a diagnostic request
//! - Explain how each family score was reached
//! - Ask for follow-up questions that separate the leading families
//! - Browse the observation catalog

use std::path::PathBuf;

use autodiag_engine::DiagnosticEngine;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::{catalog, clarify, evaluate, explain};
use error::CliResult;
use output::{print_error, OutputFormat};

/// autodiag CLI application
#[derive(Parser)]
#[command(name = "autodiag")]
#[command(about = "autodiag - vehicle symptom diagnosis", long_about = None)]
#[command(version)]
struct Cli {
    /// Engine configuration file (TOML)
    #[arg(short, long, global = true, env = "AUTODIAG_CONFIG")]
    config: Option<PathBuf>,

    /// Observation catalog to use instead of the built-in one (JSON)
    #[arg(long, global = true, env = "AUTODIAG_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Diagnose a request
    #[command(alias = "eval")]
    Evaluate(evaluate::EvaluateArgs),

    /// Diagnose a request and show every intermediate stage
    Explain(explain::ExplainArgs),

    /// Suggest follow-up questions for a request
    Clarify(clarify::ClarifyArgs),

    /// List catalog observations
    Catalog(catalog::CatalogArgs),

    /// Show the effective engine configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(cli) {
        print_error(&err.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let engine_config = config::load_engine_config(cli.config.as_deref())?;
    let diagnostic_catalog = config::load_catalog(cli.catalog.as_deref())?;

    if let Commands::Config = cli.command {
        print!("{}", engine_config.to_toml_string()?);
        return Ok(());
    }

    let engine = DiagnosticEngine::new(diagnostic_catalog, engine_config)?;

    match cli.command {
        Commands::Evaluate(args) => evaluate::execute(args, &engine, cli.format),
        Commands::Explain(args) => explain::execute(args, &engine, cli.format),
        Commands::Clarify(args) => clarify::execute(args, &engine, cli.format),
        Commands::Catalog(args) => catalog::execute(args, engine.catalog(), cli.format),
        Commands::Config => Ok(()),
    }
}
