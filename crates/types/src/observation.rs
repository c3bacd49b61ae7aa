//! Observation model: symptom identifiers, answers and reliability classes.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseError;

// ── Identifier ──────────────────────────────────────────────────────────

/// Canonical symptom identifier, e.g. `OIL_PRESSURE_WARNING`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationId(pub String);

impl ObservationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ObservationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ObservationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ── Raw input ───────────────────────────────────────────────────────────

/// Whatever the caller put in a `value`/`strength` slot. Anything that is
/// not text or a boolean is swallowed so it can normalize instead of failing.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Text(String),
    Flag(bool),
    Other(IgnoredAny),
}

// ── Answer ──────────────────────────────────────────────────────────────

/// Answer given for one symptom.
///
/// Absent or unrecognized input is [`ObservationValue::Skip`]. Only `Yes`
/// and `No` ever reach the scoring engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservationValue {
    Yes,
    No,
    Unsure,
    #[default]
    Skip,
}

impl ObservationValue {
    /// Normalize free-form input. Never fails.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_uppercase()).as_deref() {
            Some("YES") => ObservationValue::Yes,
            Some("NO") => ObservationValue::No,
            Some("UNSURE") => ObservationValue::Unsure,
            _ => ObservationValue::Skip,
        }
    }

    /// +1 for YES, -1 for NO, `None` for the neutral answers.
    pub fn sign(&self) -> Option<f64> {
        match self {
            ObservationValue::Yes => Some(1.0),
            ObservationValue::No => Some(-1.0),
            ObservationValue::Unsure | ObservationValue::Skip => None,
        }
    }

    pub fn is_scorable(&self) -> bool {
        self.sign().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationValue::Yes => "YES",
            ObservationValue::No => "NO",
            ObservationValue::Unsure => "UNSURE",
            ObservationValue::Skip => "SKIP",
        }
    }
}

impl<'de> Deserialize<'de> for ObservationValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawToken::deserialize(deserializer)? {
            RawToken::Text(text) => ObservationValue::normalize(Some(&text)),
            RawToken::Flag(true) => ObservationValue::Yes,
            RawToken::Flag(false) => ObservationValue::No,
            RawToken::Other(_) => ObservationValue::Skip,
        })
    }
}

impl fmt::Display for ObservationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Strength ────────────────────────────────────────────────────────────

/// Reliability class of a symptom report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthClass {
    Weak,
    Medium,
    Strong,
}

impl StrengthClass {
    pub const ALL: [StrengthClass; 3] =
        [StrengthClass::Weak, StrengthClass::Medium, StrengthClass::Strong];

    /// Reference weight of the class: 6 / 13 / 26.
    pub fn default_weight(&self) -> f64 {
        match self {
            StrengthClass::Weak => 6.0,
            StrengthClass::Medium => 13.0,
            StrengthClass::Strong => 26.0,
        }
    }

    /// Position in per-class arrays.
    pub fn index(&self) -> usize {
        match self {
            StrengthClass::Weak => 0,
            StrengthClass::Medium => 1,
            StrengthClass::Strong => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthClass::Weak => "WEAK",
            StrengthClass::Medium => "MEDIUM",
            StrengthClass::Strong => "STRONG",
        }
    }
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WEAK" => Ok(StrengthClass::Weak),
            "MEDIUM" => Ok(StrengthClass::Medium),
            "STRONG" => Ok(StrengthClass::Strong),
            _ => Err(ParseError::UnknownStrength(s.to_string())),
        }
    }
}

/// Unrecognized strengths become `None` so the catalog default applies.
fn lenient_strength<'de, D>(deserializer: D) -> Result<Option<StrengthClass>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawToken>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawToken::Text(text)) => text.parse().ok(),
        _ => None,
    })
}

// ── Observation ─────────────────────────────────────────────────────────

/// A single self-reported symptom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub id: ObservationId,
    #[serde(default)]
    pub value: ObservationValue,
    #[serde(
        default,
        deserialize_with = "lenient_strength",
        skip_serializing_if = "Option::is_none"
    )]
    pub strength: Option<StrengthClass>,
}

impl Observation {
    pub fn new(id: impl Into<String>, value: ObservationValue) -> Self {
        Self {
            id: ObservationId::new(id),
            value,
            strength: None,
        }
    }

    pub fn yes(id: impl Into<String>) -> Self {
        Self::new(id, ObservationValue::Yes)
    }

    pub fn no(id: impl Into<String>) -> Self {
        Self::new(id, ObservationValue::No)
    }

    /// Override the catalog default strength.
    pub fn with_strength(mut self, strength: StrengthClass) -> Self {
        self.strength = Some(strength);
        self
    }
}

// ── Observation Set ─────────────────────────────────────────────────────

/// Read-only view over an ordered observation list.
///
/// Lookups use the *resolved answer* of an id: the last entry for that id
/// whose value is not SKIP. Scoring iterates entries directly instead.
#[derive(Debug)]
pub struct ObservationSet<'a> {
    entries: &'a [Observation],
    answers: HashMap<&'a str, ObservationValue>,
}

impl<'a> ObservationSet<'a> {
    pub fn new(entries: &'a [Observation]) -> Self {
        let mut answers = HashMap::with_capacity(entries.len());
        for entry in entries {
            if entry.value != ObservationValue::Skip {
                answers.insert(entry.id.as_str(), entry.value);
            }
        }
        Self { entries, answers }
    }

    pub fn entries(&self) -> &'a [Observation] {
        self.entries
    }

    /// Entries that carry evidence (YES or NO), in input order.
    pub fn scorable(&self) -> impl Iterator<Item = &'a Observation> + 'a {
        self.entries.iter().filter(|o| o.value.is_scorable())
    }

    pub fn answer(&self, id: &str) -> Option<ObservationValue> {
        self.answers.get(id).copied()
    }

    pub fn is_yes(&self, id: &str) -> bool {
        self.answer(id) == Some(ObservationValue::Yes)
    }

    pub fn is_no(&self, id: &str) -> bool {
        self.answer(id) == Some(ObservationValue::No)
    }

    /// NO, or never answered (missing or only SKIP entries). UNSURE does
    /// not qualify.
    pub fn is_no_or_absent(&self, id: &str) -> bool {
        matches!(self.answer(id), None | Some(ObservationValue::No))
    }

    /// True when any entry for `id` is YES, regardless of later entries.
    pub fn any_yes(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|o| o.id.as_str() == id && o.value == ObservationValue::Yes)
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.answers.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
