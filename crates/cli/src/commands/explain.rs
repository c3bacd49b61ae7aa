//! Explain command

use std::path::PathBuf;

use autodiag_engine::{DiagnosticEngine, Explanation};
use clap::Args;
use colored::*;
use tabled::Tabled;

use crate::error::CliResult;
use crate::input::read_request;
use crate::output::{print_info, print_json, print_result, print_table, OutputFormat};

/// Explain arguments
#[derive(Args)]
pub struct ExplainArgs {
    /// Request file (JSON), or `-` for stdin
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also list families no observation touched
    #[arg(long)]
    pub all: bool,
}

/// Table row for one family's bucket totals
#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "+Weak")]
    positive_weak: String,
    #[tabled(rename = "+Medium")]
    positive_medium: String,
    #[tabled(rename = "+Strong")]
    positive_strong: String,
    #[tabled(rename = "-Weak")]
    negative_weak: String,
    #[tabled(rename = "-Medium")]
    negative_medium: String,
    #[tabled(rename = "-Strong")]
    negative_strong: String,
    #[tabled(rename = "Capped")]
    capped: String,
    #[tabled(rename = "Raw score")]
    raw_score: String,
    #[tabled(rename = "Score")]
    score: String,
}

fn amount(value: f64) -> String {
    if value == 0.0 {
        "-".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Execute the explain command
pub fn execute(args: ExplainArgs, engine: &DiagnosticEngine, format: OutputFormat) -> CliResult<()> {
    let request = read_request(&args.input)?;
    let explanation = engine.explain(&request);

    match format {
        OutputFormat::Json => print_json(&explanation)?,
        OutputFormat::Text => print_explanation(&explanation, args.all),
    }
    Ok(())
}

fn print_explanation(explanation: &Explanation, all: bool) {
    let stages: Vec<_> = explanation.stages.iter().map(|s| s.as_str()).collect();
    println!("{} {}", "Stages:".bold(), stages.join(" → "));
    println!();

    if let (Some(breakdown), Some(scores)) = (&explanation.breakdown, &explanation.output.scores) {
        let rows: Vec<BreakdownRow> = breakdown
            .families
            .iter()
            .filter(|entry| all || !entry.is_untouched())
            .map(|entry| BreakdownRow {
                family: entry.family.to_string(),
                positive_weak: amount(entry.positive_buckets[0]),
                positive_medium: amount(entry.positive_buckets[1]),
                positive_strong: amount(entry.positive_buckets[2]),
                negative_weak: amount(entry.negative_buckets[0]),
                negative_medium: amount(entry.negative_buckets[1]),
                negative_strong: amount(entry.negative_buckets[2]),
                capped: if entry.medium_cap_applied { "yes" } else { "" }.to_string(),
                raw_score: format!("{:.2}", entry.score),
                score: format!("{:.2}", scores.get(entry.family)),
            })
            .collect();
        print_table(rows);
        println!();
    }

    if explanation.corrections.is_empty() {
        if explanation.breakdown.is_some() {
            println!("{}", "No credibility corrections".dimmed());
        }
    } else {
        println!("{}", "Credibility corrections:".bold());
        for correction in &explanation.corrections {
            println!(
                "  {} {:.2} → {:.2} (penalty {:.2}, rules: {})",
                correction.target,
                correction.original,
                correction.corrected,
                correction.penalty,
                correction.fired.join(", ")
            );
            if correction.redistributed() {
                print_info(&format!(
                    "  {} raised {:.2} → {:.2}",
                    correction.alternate, correction.alternate_before, correction.alternate_after
                ));
            }
        }
    }
    println!();

    print_result(&explanation.output.result, explanation.output.scores.as_ref());
}
