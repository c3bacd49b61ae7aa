//! Ordered refinement rules, grouped by family.

use std::collections::{BTreeMap, HashSet};

use autodiag_types::{ComponentId, HypothesisFamily, ObservationId, ObservationSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RefineError, RefineResult};

/// One pattern: all `required` YES, all `excluded` NO or unanswered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementRule {
    pub component: ComponentId,
    pub required: Vec<ObservationId>,
    #[serde(default)]
    pub excluded: Vec<ObservationId>,
}

impl RefinementRule {
    pub fn new(component: &str, required: &[&str], excluded: &[&str]) -> Self {
        Self {
            component: ComponentId::new(component),
            required: required.iter().map(|id| ObservationId::new(*id)).collect(),
            excluded: excluded.iter().map(|id| ObservationId::new(*id)).collect(),
        }
    }

    pub fn matches(&self, observations: &ObservationSet<'_>) -> bool {
        self.required.iter().all(|id| observations.is_yes(id.as_str()))
            && self
                .excluded
                .iter()
                .all(|id| observations.is_no_or_absent(id.as_str()))
    }
}

/// Validated per-family rule lists. Order inside a list is significant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefinementTable {
    rules: BTreeMap<HypothesisFamily, Vec<RefinementRule>>,
}

impl RefinementTable {
    pub fn new(rules: BTreeMap<HypothesisFamily, Vec<RefinementRule>>) -> RefineResult<Self> {
        for (family, list) in &rules {
            validate(*family, list)?;
        }
        Ok(Self { rules })
    }

    /// Wrap rules that are known to be valid.
    pub(crate) fn from_trusted(rules: BTreeMap<HypothesisFamily, Vec<RefinementRule>>) -> Self {
        Self { rules }
    }

    pub fn rules_for(&self, family: HypothesisFamily) -> &[RefinementRule] {
        self.rules.get(&family).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Families that own at least one rule.
    pub fn families(&self) -> impl Iterator<Item = HypothesisFamily> + '_ {
        self.rules
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(family, _)| *family)
    }

    /// First matching component for `family`, if any.
    pub fn refine(
        &self,
        family: HypothesisFamily,
        observations: &ObservationSet<'_>,
    ) -> Option<ComponentId> {
        let found = self
            .rules_for(family)
            .iter()
            .find(|rule| rule.matches(observations))
            .map(|rule| rule.component.clone());
        debug!(
            stage = "refine",
            family = %family,
            component = found.as_ref().map(ComponentId::as_str),
            "Refined family"
        );
        found
    }
}

fn validate(family: HypothesisFamily, rules: &[RefinementRule]) -> RefineResult<()> {
    let mut components = HashSet::new();
    for rule in rules {
        let component = rule.component.to_string();
        if rule.required.is_empty() {
            return Err(RefineError::NoRequiredObservations { family, component });
        }
        if let Some(both) = rule.required.iter().find(|id| rule.excluded.contains(id)) {
            return Err(RefineError::ContradictoryRule {
                family,
                component,
                observation: both.to_string(),
            });
        }
        if !components.insert(rule.component.as_str()) {
            return Err(RefineError::DuplicateComponent { family, component });
        }
    }
    Ok(())
}
