//! Hypothesis families and the per-family score map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseError;

// ── Hypothesis Family ───────────────────────────────────────────────────

/// One candidate vehicle subsystem a diagnosis can point to.
///
/// The set is closed. Declaration order is the canonical ordering used for
/// score maps, reports and tie-free iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HypothesisFamily {
    Battery,
    Alternator,
    Starter,
    Fuel,
    Ignition,
    Cooling,
    Brakes,
    Transmission,
    Suspension,
    Exhaust,
    Electrical,
    EngineMechanical,
}

impl HypothesisFamily {
    /// Every family, in canonical order.
    pub const ALL: [HypothesisFamily; 12] = [
        HypothesisFamily::Battery,
        HypothesisFamily::Alternator,
        HypothesisFamily::Starter,
        HypothesisFamily::Fuel,
        HypothesisFamily::Ignition,
        HypothesisFamily::Cooling,
        HypothesisFamily::Brakes,
        HypothesisFamily::Transmission,
        HypothesisFamily::Suspension,
        HypothesisFamily::Exhaust,
        HypothesisFamily::Electrical,
        HypothesisFamily::EngineMechanical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HypothesisFamily::Battery => "BATTERY",
            HypothesisFamily::Alternator => "ALTERNATOR",
            HypothesisFamily::Starter => "STARTER",
            HypothesisFamily::Fuel => "FUEL",
            HypothesisFamily::Ignition => "IGNITION",
            HypothesisFamily::Cooling => "COOLING",
            HypothesisFamily::Brakes => "BRAKES",
            HypothesisFamily::Transmission => "TRANSMISSION",
            HypothesisFamily::Suspension => "SUSPENSION",
            HypothesisFamily::Exhaust => "EXHAUST",
            HypothesisFamily::Electrical => "ELECTRICAL",
            HypothesisFamily::EngineMechanical => "ENGINE_MECHANICAL",
        }
    }

    /// Case-insensitive lookup that also accepts `-` and spaces for `_`.
    ///
    /// Returns `None` rather than an error; used where unknown names are
    /// ignored (exclusion lists).
    pub fn lookup(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL.into_iter().find(|f| f.as_str() == normalized)
    }
}

impl fmt::Display for HypothesisFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HypothesisFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseError::UnknownFamily(s.to_string()))
    }
}

// ── Score Map ───────────────────────────────────────────────────────────

/// Signed score per family.
///
/// Always total: every family in [`HypothesisFamily::ALL`] has an entry,
/// 0.0 when nothing touched it. Built fresh for every evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<HypothesisFamily, f64>);

impl ScoreMap {
    /// A map with every family present at 0.0.
    pub fn zeroed() -> Self {
        Self(HypothesisFamily::ALL.iter().map(|f| (*f, 0.0)).collect())
    }

    pub fn get(&self, family: HypothesisFamily) -> f64 {
        self.0.get(&family).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, family: HypothesisFamily, score: f64) {
        self.0.insert(family, score);
    }

    /// Iterate in canonical family order.
    pub fn iter(&self) -> impl Iterator<Item = (HypothesisFamily, f64)> + '_ {
        self.0.iter().map(|(f, s)| (*f, *s))
    }

    /// Families with a strictly positive score, in canonical order.
    pub fn positive(&self) -> impl Iterator<Item = (HypothesisFamily, f64)> + '_ {
        self.iter().filter(|(_, s)| *s > 0.0)
    }

    /// True when every score is exactly zero.
    pub fn is_all_zero(&self) -> bool {
        self.0.values().all(|s| *s == 0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ScoreMap {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Families missing from the input read as 0.0.
impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = BTreeMap::<HypothesisFamily, f64>::deserialize(deserializer)?;
        let mut map = Self::zeroed();
        for (family, score) in parsed {
            map.set(family, score);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_names_round_trip() {
        for family in HypothesisFamily::ALL {
            assert_eq!(family.as_str().parse::<HypothesisFamily>().unwrap(), family);
        }
    }

    #[test]
    fn lookup_is_lenient() {
        assert_eq!(
            HypothesisFamily::lookup(" engine-mechanical "),
            Some(HypothesisFamily::EngineMechanical)
        );
        assert_eq!(HypothesisFamily::lookup("battery"), Some(HypothesisFamily::Battery));
        assert_eq!(HypothesisFamily::lookup("wipers"), None);
        assert!("wipers".parse::<HypothesisFamily>().is_err());
    }

    #[test]
    fn zeroed_map_is_total() {
        let map = ScoreMap::zeroed();
        assert_eq!(map.len(), HypothesisFamily::ALL.len());
        assert!(map.is_all_zero());
        assert_eq!(map.positive().count(), 0);
    }

    #[test]
    fn score_map_serializes_with_family_keys() {
        let mut map = ScoreMap::zeroed();
        map.set(HypothesisFamily::Starter, 6.5);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["STARTER"], 6.5);
        assert_eq!(json["BATTERY"], 0.0);

        let restored: ScoreMap = serde_json::from_value(json).unwrap();
        assert_eq!(restored, map);
    }

    #[test]
    fn partial_score_map_is_filled_in() {
        let map: ScoreMap = serde_json::from_str(r#"{"FUEL": -13.0}"#).unwrap();
        assert_eq!(map.len(), HypothesisFamily::ALL.len());
        assert_eq!(map.get(HypothesisFamily::Fuel), -13.0);
        assert_eq!(map.get(HypothesisFamily::Battery), 0.0);

        let empty: ScoreMap = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ScoreMap::zeroed());
    }
}
