//! Rule conditions and rule tables.

use autodiag_types::{HypothesisFamily, ObservationId, ObservationSet, ObservationValue};
use serde::{Deserialize, Serialize};

/// What a single observation's resolved answer must be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Expectation {
    Yes,
    No,
    /// NO, or never answered. UNSURE does not qualify.
    NoOrAbsent,
}

impl Expectation {
    pub fn holds(&self, observations: &ObservationSet<'_>, id: &str) -> bool {
        match self {
            Expectation::Yes => observations.answer(id) == Some(ObservationValue::Yes),
            Expectation::No => observations.answer(id) == Some(ObservationValue::No),
            Expectation::NoOrAbsent => observations.is_no_or_absent(id),
        }
    }
}

/// One observation paired with its expectation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub observation: ObservationId,
    pub expect: Expectation,
}

impl Check {
    pub fn new(observation: &str, expect: Expectation) -> Self {
        Self {
            observation: ObservationId::new(observation),
            expect,
        }
    }
}

/// When a rule fires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    /// Supporting evidence is missing or denied.
    NoOrAbsent(ObservationId),
    /// Contradicting evidence is present.
    Yes(ObservationId),
    /// Guardrail: every check holds at once.
    AllHold(Vec<Check>),
}

impl Condition {
    pub fn holds(&self, observations: &ObservationSet<'_>) -> bool {
        match self {
            Condition::NoOrAbsent(id) => Expectation::NoOrAbsent.holds(observations, id.as_str()),
            Condition::Yes(id) => Expectation::Yes.holds(observations, id.as_str()),
            Condition::AllHold(checks) => {
                !checks.is_empty()
                    && checks
                        .iter()
                        .all(|c| c.expect.holds(observations, c.observation.as_str()))
            }
        }
    }
}

/// A named penalty increment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredibilityRule {
    pub name: String,
    pub condition: Condition,
    pub penalty: f64,
}

impl CredibilityRule {
    pub fn new(name: impl Into<String>, condition: Condition, penalty: f64) -> Self {
        Self {
            name: name.into(),
            condition,
            penalty,
        }
    }
}

/// Ordered rules for one target family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredibilityRuleSet {
    /// Family whose score is suppressed.
    pub target: HypothesisFamily,
    /// Family that receives redistributed mass.
    pub alternate: HypothesisFamily,
    pub rules: Vec<CredibilityRule>,
}
