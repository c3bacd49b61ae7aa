//! Output formatting utilities

use autodiag_types::{ConfidenceBand, DiagnosticResult, ScoreMap};
use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text and tables
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(data: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print rows as a table
pub fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!("{}", "No results".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

pub fn colorize_band(band: ConfidenceBand) -> ColoredString {
    match band {
        ConfidenceBand::Confident => band.as_str().green(),
        ConfidenceBand::Probable => band.as_str().yellow(),
        ConfidenceBand::Unsure => band.as_str().dimmed(),
    }
}

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "Score")]
    score: String,
}

/// Print a diagnostic result as text
pub fn print_result(result: &DiagnosticResult, scores: Option<&ScoreMap>) {
    println!(
        "Result {} (vehicle {}, {}, {})",
        result.id().bold(),
        result.vehicle_id(),
        result.entry_anchor(),
        result.timestamp().to_rfc3339()
    );

    if result.is_safety_override() {
        print_warning(&"SAFETY OVERRIDE: stop and act before continuing".red().bold().to_string());
        for note in result.safety_notes().unwrap_or_default() {
            println!("  {} {}", "!".red(), note);
        }
        let triggered: Vec<_> = result
            .supporting_observations()
            .iter()
            .map(|id| id.as_str())
            .collect();
        println!("Triggered: {}", triggered.join(", "));
        return;
    }

    match result.top_hypothesis() {
        Some(top) => println!("Top hypothesis: {}", top.as_str().bold()),
        None => print_info("No hypothesis could be selected"),
    }
    if let Some(component) = result.specific_component() {
        println!("Component: {}", component);
    }
    println!(
        "Confidence: {:.2} ({})",
        result.confidence(),
        colorize_band(result.confidence_band())
    );
    if !result.supporting_observations().is_empty() {
        let supporting: Vec<_> = result
            .supporting_observations()
            .iter()
            .map(|id| id.as_str())
            .collect();
        println!("Supporting: {}", supporting.join(", "));
    }

    if let Some(scores) = scores {
        let rows: Vec<ScoreRow> = scores
            .iter()
            .filter(|(_, s)| *s != 0.0)
            .map(|(family, score)| ScoreRow {
                family: family.to_string(),
                score: format!("{score:.2}"),
            })
            .collect();
        println!();
        print_table(rows);
    }
}
