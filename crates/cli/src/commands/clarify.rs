//! Clarify command

use std::path::PathBuf;

use autodiag_engine::{DiagnosticEngine, MAX_CLARIFIERS};
use clap::Args;
use tabled::Tabled;

use crate::error::CliResult;
use crate::input::read_request;
use crate::output::{print_info, print_json, print_table, OutputFormat};

/// Clarify arguments
#[derive(Args)]
pub struct ClarifyArgs {
    /// Request file (JSON), or `-` for stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Maximum number of questions
    #[arg(short, long, default_value_t = MAX_CLARIFIERS)]
    pub limit: usize,
}

/// Table row for a suggested question
#[derive(Debug, Tabled)]
struct ClarifierRow {
    #[tabled(rename = "Observation")]
    observation: String,
    #[tabled(rename = "Question")]
    label: String,
    #[tabled(rename = "Separates")]
    families: String,
    #[tabled(rename = "Strength")]
    strength: String,
}

/// Execute the clarify command
pub fn execute(args: ClarifyArgs, engine: &DiagnosticEngine, format: OutputFormat) -> CliResult<()> {
    let request = read_request(&args.input)?;
    let clarifiers = engine.clarify(&request, args.limit);

    match format {
        OutputFormat::Json => print_json(&clarifiers)?,
        OutputFormat::Text => {
            if clarifiers.is_empty() {
                print_info("No follow-up questions would separate the leading families");
                return Ok(());
            }
            let rows: Vec<ClarifierRow> = clarifiers
                .into_iter()
                .map(|c| ClarifierRow {
                    observation: c.observation.to_string(),
                    label: c.label,
                    families: c
                        .families
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    strength: c.strength.to_string(),
                })
                .collect();
            print_table(rows);
        }
    }
    Ok(())
}
