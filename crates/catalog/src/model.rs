//! Catalog records and the validated, indexed [`Catalog`].

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::path::Path;

use autodiag_types::{HypothesisFamily, ObservationId, StrengthClass};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::ids::SAFETY_TRIGGERS;

// ── Records ─────────────────────────────────────────────────────────────

/// Coarse grouping of symptoms, used for listing and question flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservationDomain {
    Starting,
    Charging,
    Engine,
    Cooling,
    Brakes,
    Drivetrain,
    Chassis,
    Exhaust,
    Safety,
}

impl fmt::Display for ObservationDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObservationDomain::Starting => "STARTING",
            ObservationDomain::Charging => "CHARGING",
            ObservationDomain::Engine => "ENGINE",
            ObservationDomain::Cooling => "COOLING",
            ObservationDomain::Brakes => "BRAKES",
            ObservationDomain::Drivetrain => "DRIVETRAIN",
            ObservationDomain::Chassis => "CHASSIS",
            ObservationDomain::Exhaust => "EXHAUST",
            ObservationDomain::Safety => "SAFETY",
        };
        f.write_str(name)
    }
}

/// One known symptom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationSpec {
    pub id: ObservationId,
    /// Reliability class used when a report carries no explicit strength.
    pub default_strength: StrengthClass,
    pub domain: ObservationDomain,
    #[serde(default)]
    pub safety_critical: bool,
    /// Short human-readable wording.
    #[serde(default)]
    pub label: String,
}

/// Where an observation's evidence goes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMapping {
    pub observation: ObservationId,
    pub primary: HypothesisFamily,
    /// Families that receive a small spillover, in listed order.
    #[serde(default)]
    pub secondary: Vec<HypothesisFamily>,
}

impl FamilyMapping {
    /// Primary first, then secondaries.
    pub fn families(&self) -> impl Iterator<Item = HypothesisFamily> + '_ {
        std::iter::once(self.primary).chain(self.secondary.iter().copied())
    }

    pub fn touches(&self, family: HypothesisFamily) -> bool {
        self.families().any(|f| f == family)
    }
}

/// Serialized form of a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub observations: Vec<ObservationSpec>,
    pub mappings: Vec<FamilyMapping>,
}

// ── Catalog ─────────────────────────────────────────────────────────────

/// Validated observation catalog plus family mapping table.
///
/// Immutable once built; the pipeline only reads it.
#[derive(Clone, Debug)]
pub struct Catalog {
    document: CatalogDocument,
    observation_index: HashMap<ObservationId, usize>,
    mapping_index: HashMap<ObservationId, usize>,
}

impl Catalog {
    /// Validate and index a catalog.
    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        validate(&document)?;
        let catalog = Self::assemble(document);
        debug!(
            observations = catalog.document.observations.len(),
            mappings = catalog.document.mappings.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_parts(
        observations: Vec<ObservationSpec>,
        mappings: Vec<FamilyMapping>,
    ) -> CatalogResult<Self> {
        Self::from_document(CatalogDocument {
            observations,
            mappings,
        })
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }

    /// Index an already-trusted document.
    pub(crate) fn assemble(document: CatalogDocument) -> Self {
        let observation_index = document
            .observations
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.id.clone(), i))
            .collect();
        let mapping_index = document
            .mappings
            .iter()
            .enumerate()
            .map(|(i, mapping)| (mapping.observation.clone(), i))
            .collect();
        Self {
            document,
            observation_index,
            mapping_index,
        }
    }

    pub fn observations(&self) -> &[ObservationSpec] {
        &self.document.observations
    }

    pub fn mappings(&self) -> &[FamilyMapping] {
        &self.document.mappings
    }

    pub fn spec(&self, id: &str) -> Option<&ObservationSpec> {
        self.observation_index
            .get(id)
            .map(|i| &self.document.observations[*i])
    }

    pub fn mapping(&self, id: &str) -> Option<&FamilyMapping> {
        self.mapping_index.get(id).map(|i| &self.document.mappings[*i])
    }

    /// Catalog default strength, MEDIUM for ids the catalog does not know.
    pub fn default_strength(&self, id: &str) -> StrengthClass {
        self.spec(id)
            .map(|spec| spec.default_strength)
            .unwrap_or(StrengthClass::Medium)
    }

    pub fn is_safety_critical(&self, id: &str) -> bool {
        self.spec(id).map(|spec| spec.safety_critical).unwrap_or(false)
    }

    /// Catalog entries whose mapping touches `family`, in catalog order.
    pub fn observations_for(&self, family: HypothesisFamily) -> Vec<&ObservationSpec> {
        self.document
            .observations
            .iter()
            .filter(|spec| {
                self.mapping(spec.id.as_str())
                    .map(|m| m.touches(family))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Families that are the primary target of a safety-critical symptom.
    ///
    /// Score-suppressing stages must never target these.
    pub fn safety_guarded_families(&self) -> BTreeSet<HypothesisFamily> {
        self.document
            .observations
            .iter()
            .filter(|spec| spec.safety_critical)
            .filter_map(|spec| self.mapping(spec.id.as_str()))
            .map(|m| m.primary)
            .collect()
    }
}

fn validate(document: &CatalogDocument) -> CatalogResult<()> {
    let mut seen = HashSet::new();
    for spec in &document.observations {
        if !seen.insert(spec.id.as_str()) {
            return Err(CatalogError::DuplicateObservation(spec.id.to_string()));
        }
    }

    let mut mapped = HashSet::new();
    for mapping in &document.mappings {
        let observation = mapping.observation.to_string();
        if !mapped.insert(mapping.observation.as_str()) {
            return Err(CatalogError::DuplicateMapping(observation));
        }
        let mut secondaries = HashSet::new();
        for family in &mapping.secondary {
            if *family == mapping.primary {
                return Err(CatalogError::SecondaryIsPrimary {
                    observation,
                    family: family.to_string(),
                });
            }
            if !secondaries.insert(*family) {
                return Err(CatalogError::DuplicateSecondary {
                    observation,
                    family: family.to_string(),
                });
            }
        }
    }

    for trigger in SAFETY_TRIGGERS {
        match document.observations.iter().find(|s| s.id.as_str() == trigger) {
            None => return Err(CatalogError::MissingSafetyTrigger(trigger.to_string())),
            Some(spec) if !spec.safety_critical => {
                return Err(CatalogError::UnflaggedSafetyTrigger(trigger.to_string()))
            }
            Some(_) => {}
        }
    }

    Ok(())
}
