//! Evaluation request and result records.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::anchor::EntryAnchor;
use crate::error::ParseError;
use crate::family::{HypothesisFamily, ScoreMap};
use crate::observation::{Observation, ObservationId};

/// Marker reported as the top hypothesis when a safety trigger fires.
pub const SAFETY_OVERRIDE: &str = "SAFETY_OVERRIDE";

// ── Top Hypothesis ──────────────────────────────────────────────────────

/// What the diagnosis points to: a family, or the safety override marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TopHypothesis {
    Family(HypothesisFamily),
    SafetyOverride,
}

impl TopHypothesis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopHypothesis::Family(family) => family.as_str(),
            TopHypothesis::SafetyOverride => SAFETY_OVERRIDE,
        }
    }

    pub fn family(&self) -> Option<HypothesisFamily> {
        match self {
            TopHypothesis::Family(family) => Some(*family),
            TopHypothesis::SafetyOverride => None,
        }
    }

    pub fn is_safety_override(&self) -> bool {
        matches!(self, TopHypothesis::SafetyOverride)
    }
}

impl fmt::Display for TopHypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopHypothesis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(SAFETY_OVERRIDE) {
            return Ok(TopHypothesis::SafetyOverride);
        }
        HypothesisFamily::lookup(s)
            .map(TopHypothesis::Family)
            .ok_or_else(|| ParseError::UnknownHypothesis(s.to_string()))
    }
}

impl From<TopHypothesis> for String {
    fn from(value: TopHypothesis) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for TopHypothesis {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── Confidence Band ─────────────────────────────────────────────────────

/// Three-band reading of a confidence value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceBand {
    Unsure,
    Probable,
    Confident,
}

impl ConfidenceBand {
    /// Lower bound (inclusive) of the CONFIDENT band.
    pub const CONFIDENT_AT: f64 = 0.80;
    /// Lower bound (inclusive) of the PROBABLE band.
    pub const PROBABLE_AT: f64 = 0.60;

    /// Classify with the reference thresholds.
    pub fn from_confidence(confidence: f64) -> Self {
        Self::classify(confidence, Self::CONFIDENT_AT, Self::PROBABLE_AT)
    }

    /// Classify with explicit, inclusive lower bounds.
    pub fn classify(confidence: f64, confident_at: f64, probable_at: f64) -> Self {
        if confidence >= confident_at {
            ConfidenceBand::Confident
        } else if confidence >= probable_at {
            ConfidenceBand::Probable
        } else {
            ConfidenceBand::Unsure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::Unsure => "UNSURE",
            ConfidenceBand::Probable => "PROBABLE",
            ConfidenceBand::Confident => "CONFIDENT",
        }
    }
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Component ───────────────────────────────────────────────────────────

/// A specific named part inside a family, e.g. `STARTER_SOLENOID`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Request ─────────────────────────────────────────────────────────────

/// Everything the caller hands to one evaluation.
///
/// Identifiers and timestamps come from the caller; the engine never
/// generates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRequest {
    pub result_id: String,
    pub vehicle_id: String,
    pub timestamp: DateTime<Utc>,
    pub entry_anchor: EntryAnchor,
    #[serde(default)]
    pub observations: Vec<Observation>,
    /// Family names to skip during top selection. Scores are untouched.
    #[serde(default)]
    pub excluded_hypotheses: Vec<String>,
}

impl DiagnosticRequest {
    pub fn new(
        result_id: impl Into<String>,
        vehicle_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        entry_anchor: EntryAnchor,
    ) -> Self {
        Self {
            result_id: result_id.into(),
            vehicle_id: vehicle_id.into(),
            timestamp,
            entry_anchor,
            observations: Vec::new(),
            excluded_hypotheses: Vec::new(),
        }
    }

    pub fn with_observations(mut self, observations: Vec<Observation>) -> Self {
        self.observations = observations;
        self
    }

    pub fn with_exclusions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_hypotheses = names.into_iter().map(Into::into).collect();
        self
    }

    /// Identity fields carried verbatim into the result.
    pub fn header(&self) -> ResultHeader {
        ResultHeader {
            id: self.result_id.clone(),
            vehicle_id: self.vehicle_id.clone(),
            timestamp: self.timestamp,
            entry_anchor: self.entry_anchor,
        }
    }
}

// ── Result ──────────────────────────────────────────────────────────────

/// Caller-supplied identity of a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultHeader {
    pub id: String,
    pub vehicle_id: String,
    pub timestamp: DateTime<Utc>,
    pub entry_anchor: EntryAnchor,
}

/// Outcome of a normal (non-override) run.
#[derive(Clone, Debug, PartialEq)]
pub struct Finding {
    pub top: Option<HypothesisFamily>,
    pub component: Option<ComponentId>,
    pub confidence: f64,
    pub band: ConfidenceBand,
    pub supporting: Vec<ObservationId>,
}

/// One diagnosis. Built once by the engine and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    #[serde(flatten)]
    header: ResultHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_hypothesis: Option<TopHypothesis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    specific_component: Option<ComponentId>,
    confidence: f64,
    confidence_band: ConfidenceBand,
    #[serde(default)]
    supporting_observations: Vec<ObservationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    safety_notes: Option<Vec<String>>,
}

impl DiagnosticResult {
    /// Result of a run that went through scoring.
    pub fn diagnosis(header: ResultHeader, finding: Finding) -> Self {
        Self {
            header,
            top_hypothesis: finding.top.map(TopHypothesis::Family),
            // A component without a family would be meaningless.
            specific_component: finding.top.and(finding.component),
            confidence: finding.confidence,
            confidence_band: finding.band,
            supporting_observations: finding.supporting,
            safety_notes: None,
        }
    }

    /// Result of a run cut short by a safety trigger.
    pub fn safety_override(
        header: ResultHeader,
        triggered: Vec<ObservationId>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            header,
            top_hypothesis: Some(TopHypothesis::SafetyOverride),
            specific_component: None,
            confidence: 0.0,
            confidence_band: ConfidenceBand::Unsure,
            supporting_observations: triggered,
            safety_notes: Some(notes),
        }
    }

    pub fn id(&self) -> &str {
        &self.header.id
    }

    pub fn vehicle_id(&self) -> &str {
        &self.header.vehicle_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.header.timestamp
    }

    pub fn entry_anchor(&self) -> EntryAnchor {
        self.header.entry_anchor
    }

    pub fn top_hypothesis(&self) -> Option<TopHypothesis> {
        self.top_hypothesis
    }

    pub fn specific_component(&self) -> Option<&ComponentId> {
        self.specific_component.as_ref()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn confidence_band(&self) -> ConfidenceBand {
        self.confidence_band
    }

    pub fn supporting_observations(&self) -> &[ObservationId] {
        &self.supporting_observations
    }

    pub fn safety_notes(&self) -> Option<&[String]> {
        self.safety_notes.as_deref()
    }

    pub fn is_safety_override(&self) -> bool {
        self.top_hypothesis
            .map(|t| t.is_safety_override())
            .unwrap_or(false)
    }
}

/// What an evaluation hands back to the caller.
///
/// `scores` is present on every normal run and deliberately absent when a
/// safety override short-circuited scoring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutput {
    pub result: DiagnosticResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<ScoreMap>,
}
