//! Applies rule sets to a score map.

use std::collections::{BTreeSet, HashSet};

use autodiag_types::{HypothesisFamily, ObservationSet, ScoreMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builtin::battery_rule_set;
use crate::error::{CredibilityError, CredibilityResult};
use crate::rule::{Condition, CredibilityRuleSet};

// ── Parameters ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredibilityParams {
    /// Run the stage at all.
    pub enabled: bool,
    /// Upper bound on the accumulated penalty.
    pub penalty_cap: f64,
    /// Penalty strictly above this moves mass to the alternate family.
    pub redistribution_threshold: f64,
    /// Share of the removed-equivalent mass given to the alternate.
    pub redistribution_ratio: f64,
}

impl Default for CredibilityParams {
    fn default() -> Self {
        Self {
            enabled: true,
            penalty_cap: 1.5,
            redistribution_threshold: 0.5,
            redistribution_ratio: 0.5,
        }
    }
}

// ── Report ──────────────────────────────────────────────────────────────

/// What one rule set did to the scores.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Correction {
    pub target: HypothesisFamily,
    pub alternate: HypothesisFamily,
    /// Names of the rules that fired, in table order.
    pub fired: Vec<String>,
    /// Accumulated penalty after clamping.
    pub penalty: f64,
    pub original: f64,
    pub corrected: f64,
    pub alternate_before: f64,
    pub alternate_after: f64,
}

impl Correction {
    pub fn redistributed(&self) -> bool {
        self.alternate_after != self.alternate_before
    }
}

/// Corrected scores plus one entry per rule set that fired.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorrectionReport {
    pub scores: ScoreMap,
    pub corrections: Vec<Correction>,
}

impl CorrectionReport {
    pub fn fired_rules(&self) -> impl Iterator<Item = &str> {
        self.corrections
            .iter()
            .flat_map(|c| c.fired.iter().map(String::as_str))
    }
}

// ── Corrector ───────────────────────────────────────────────────────────

/// Validated rule sets, applied in order.
#[derive(Clone, Debug)]
pub struct CredibilityCorrector {
    sets: Vec<CredibilityRuleSet>,
    params: CredibilityParams,
}

impl CredibilityCorrector {
    /// Build a corrector. `guarded` are the families no rule set may target.
    pub fn new(
        sets: Vec<CredibilityRuleSet>,
        params: CredibilityParams,
        guarded: &BTreeSet<HypothesisFamily>,
    ) -> CredibilityResult<Self> {
        let mut targets = HashSet::new();
        for set in &sets {
            validate_set(set, guarded)?;
            if !targets.insert(set.target) {
                return Err(CredibilityError::DuplicateTarget(set.target));
            }
        }
        debug!(rule_sets = sets.len(), "Credibility corrector ready");
        Ok(Self { sets, params })
    }

    /// The built-in BATTERY rule set.
    pub fn builtin(
        params: CredibilityParams,
        guarded: &BTreeSet<HypothesisFamily>,
    ) -> CredibilityResult<Self> {
        Self::new(vec![battery_rule_set()], params, guarded)
    }

    pub fn rule_sets(&self) -> &[CredibilityRuleSet] {
        &self.sets
    }

    pub fn params(&self) -> &CredibilityParams {
        &self.params
    }

    /// Correct `scores` against the observations. The input map is untouched.
    pub fn apply(&self, scores: &ScoreMap, observations: &ObservationSet<'_>) -> CorrectionReport {
        let mut corrected = scores.clone();
        let mut corrections = Vec::new();

        if self.params.enabled {
            for set in &self.sets {
                if let Some(correction) = self.apply_set(set, &mut corrected, observations) {
                    corrections.push(correction);
                }
            }
        }

        CorrectionReport {
            scores: corrected,
            corrections,
        }
    }

    fn apply_set(
        &self,
        set: &CredibilityRuleSet,
        scores: &mut ScoreMap,
        observations: &ObservationSet<'_>,
    ) -> Option<Correction> {
        let original = scores.get(set.target);
        if original <= 0.0 {
            return None;
        }

        let mut penalty = 0.0;
        let mut fired = Vec::new();
        for rule in &set.rules {
            if rule.condition.holds(observations) {
                penalty += rule.penalty;
                fired.push(rule.name.clone());
            }
        }
        if fired.is_empty() {
            return None;
        }

        let penalty = penalty.min(self.params.penalty_cap);
        let corrected = (original * (1.0 - penalty)).max(0.0);
        scores.set(set.target, corrected);

        let alternate_before = scores.get(set.alternate);
        let mut alternate_after = alternate_before;
        if penalty > self.params.redistribution_threshold {
            let boost = original.abs() * penalty * self.params.redistribution_ratio;
            alternate_after = alternate_before.max(alternate_before + boost);
            scores.set(set.alternate, alternate_after);
        }

        let correction = Correction {
            target: set.target,
            alternate: set.alternate,
            fired,
            penalty,
            original,
            corrected,
            alternate_before,
            alternate_after,
        };

        if correction.redistributed() {
            warn!(
                stage = "correct",
                target = %set.target,
                alternate = %set.alternate,
                penalty,
                original,
                corrected,
                alternate_after,
                fired = ?correction.fired,
                "Credibility correction redistributed score"
            );
        } else {
            debug!(
                stage = "correct",
                target = %set.target,
                penalty,
                original,
                corrected,
                fired = ?correction.fired,
                "Credibility correction applied"
            );
        }

        Some(correction)
    }
}

fn validate_set(
    set: &CredibilityRuleSet,
    guarded: &BTreeSet<HypothesisFamily>,
) -> CredibilityResult<()> {
    if guarded.contains(&set.target) {
        return Err(CredibilityError::SafetyGuardedTarget(set.target));
    }
    if set.alternate == set.target {
        return Err(CredibilityError::AlternateIsTarget(set.target));
    }
    if set.rules.is_empty() {
        return Err(CredibilityError::EmptyRuleSet(set.target));
    }
    for rule in &set.rules {
        if !rule.penalty.is_finite() || rule.penalty < 0.0 {
            return Err(CredibilityError::InvalidPenalty {
                rule: rule.name.clone(),
                penalty: rule.penalty,
            });
        }
        if matches!(&rule.condition, Condition::AllHold(checks) if checks.is_empty()) {
            return Err(CredibilityError::EmptyCondition(rule.name.clone()));
        }
    }
    Ok(())
}
