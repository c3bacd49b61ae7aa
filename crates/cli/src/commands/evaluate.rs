//! Evaluate command

use std::path::PathBuf;

use autodiag_engine::DiagnosticEngine;
use clap::Args;

use crate::error::CliResult;
use crate::input::read_request;
use crate::output::{print_json, print_result, OutputFormat};

/// Evaluate arguments
#[derive(Args)]
pub struct EvaluateArgs {
    /// Request file (JSON), or `-` for stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Include the full score map in text output
    #[arg(long)]
    pub scores: bool,
}

/// Execute the evaluate command
pub fn execute(args: EvaluateArgs, engine: &DiagnosticEngine, format: OutputFormat) -> CliResult<()> {
    let request = read_request(&args.input)?;
    let output = engine.evaluate(&request);

    match format {
        OutputFormat::Json => print_json(&output)?,
        OutputFormat::Text => {
            let scores = if args.scores { output.scores.as_ref() } else { None };
            print_result(&output.result, scores);
        }
    }
    Ok(())
}
