//! Catalog command

use autodiag_catalog::{Catalog, ObservationSpec};
use autodiag_types::HypothesisFamily;
use clap::Args;
use tabled::Tabled;

use crate::error::{CliError, CliResult};
use crate::output::{print_json, print_table, OutputFormat};

/// Catalog arguments
#[derive(Args)]
pub struct CatalogArgs {
    /// Only observations whose mapping touches this family
    #[arg(long)]
    pub family: Option<String>,
}

/// Table row for catalog display
#[derive(Debug, Tabled)]
struct CatalogRow {
    #[tabled(rename = "Observation")]
    id: String,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Strength")]
    strength: String,
    #[tabled(rename = "Primary")]
    primary: String,
    #[tabled(rename = "Secondary")]
    secondary: String,
    #[tabled(rename = "Safety")]
    safety: String,
}

impl CatalogRow {
    fn new(spec: &ObservationSpec, catalog: &Catalog) -> Self {
        let mapping = catalog.mapping(spec.id.as_str());
        Self {
            id: spec.id.to_string(),
            domain: spec.domain.to_string(),
            strength: spec.default_strength.to_string(),
            primary: mapping.map(|m| m.primary.to_string()).unwrap_or_default(),
            secondary: mapping
                .map(|m| {
                    m.secondary
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
            safety: if spec.safety_critical { "yes" } else { "" }.to_string(),
        }
    }
}

/// Execute the catalog command
pub fn execute(args: CatalogArgs, catalog: &Catalog, format: OutputFormat) -> CliResult<()> {
    let specs: Vec<&ObservationSpec> = match args.family.as_deref() {
        Some(name) => {
            let family = HypothesisFamily::lookup(name)
                .ok_or_else(|| CliError::InvalidInput(format!("unknown family: {name}")))?;
            catalog.observations_for(family)
        }
        None => catalog.observations().iter().collect(),
    };

    match format {
        OutputFormat::Json => print_json(&specs)?,
        OutputFormat::Text => {
            let rows: Vec<CatalogRow> = specs.iter().map(|spec| CatalogRow::new(spec, catalog)).collect();
            print_table(rows);
        }
    }
    Ok(())
}
