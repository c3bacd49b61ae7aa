//! Per-family bucket aggregation and the final score map.

use autodiag_catalog::Catalog;
use autodiag_types::{HypothesisFamily, ObservationSet, ScoreMap, StrengthClass};
use serde::Serialize;
use tracing::debug;

use crate::params::ScoringParams;

// ── Buckets ─────────────────────────────────────────────────────────────

/// Running totals for one family, indexed by [`StrengthClass::index`].
///
/// Negative contributions are stored as magnitudes.
#[derive(Clone, Copy, Debug, Default)]
struct Buckets {
    positive: [f64; 3],
    negative: [f64; 3],
}

impl Buckets {
    fn add(&mut self, sign: f64, class: StrengthClass, amount: f64) {
        if sign > 0.0 {
            self.positive[class.index()] += amount;
        } else {
            self.negative[class.index()] += amount;
        }
    }

    fn has_strong(&self) -> bool {
        let strong = StrengthClass::Strong.index();
        self.positive[strong] != 0.0 || self.negative[strong] != 0.0
    }
}

// ── Breakdown ───────────────────────────────────────────────────────────

/// How one family's score was reached.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyBreakdown {
    pub family: HypothesisFamily,
    /// Positive totals per class (weak, medium, strong), after the cap.
    pub positive_buckets: [f64; 3],
    /// Negative magnitudes per class (weak, medium, strong).
    pub negative_buckets: [f64; 3],
    /// True when the medium cap reduced the positive medium total.
    pub medium_cap_applied: bool,
    pub positive: f64,
    pub negative: f64,
    /// Dampened score, before any credibility correction.
    pub score: f64,
}

impl FamilyBreakdown {
    pub fn is_untouched(&self) -> bool {
        self.positive == 0.0 && self.negative == 0.0
    }
}

/// Breakdown for every family, in canonical family order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub families: Vec<FamilyBreakdown>,
}

impl ScoreBreakdown {
    pub fn family(&self, family: HypothesisFamily) -> Option<&FamilyBreakdown> {
        self.families.iter().find(|b| b.family == family)
    }

    /// Collapse to the plain score map.
    pub fn scores(&self) -> ScoreMap {
        let mut map = ScoreMap::zeroed();
        for entry in &self.families {
            map.set(entry.family, entry.score);
        }
        map
    }
}

// ── Scoring ─────────────────────────────────────────────────────────────

/// Score every family. Untouched families are present at 0.0.
pub fn score(
    observations: &ObservationSet<'_>,
    catalog: &Catalog,
    params: &ScoringParams,
) -> ScoreMap {
    score_with_breakdown(observations, catalog, params).scores()
}

/// Score every family and keep the intermediate bucket totals.
pub fn score_with_breakdown(
    observations: &ObservationSet<'_>,
    catalog: &Catalog,
    params: &ScoringParams,
) -> ScoreBreakdown {
    let mut buckets = vec![Buckets::default(); HypothesisFamily::ALL.len()];
    let mut folded = 0usize;

    for observation in observations.scorable() {
        let Some(sign) = observation.value.sign() else {
            continue;
        };
        let Some(mapping) = catalog.mapping(observation.id.as_str()) else {
            continue;
        };
        let class = observation
            .strength
            .unwrap_or_else(|| catalog.default_strength(observation.id.as_str()));
        let weight = params.weight(class);

        buckets[family_index(mapping.primary)].add(sign, class, weight);
        let spill = weight * params.spillover_multiplier;
        for secondary in &mapping.secondary {
            buckets[family_index(*secondary)].add(sign, class, spill);
        }
        folded += 1;
    }

    let families: Vec<FamilyBreakdown> = HypothesisFamily::ALL
        .iter()
        .zip(buckets.iter())
        .map(|(family, b)| finalize(*family, *b, params))
        .collect();

    debug!(
        stage = "score",
        folded,
        touched = families.iter().filter(|f| !f.is_untouched()).count(),
        "Scored observations"
    );

    ScoreBreakdown { families }
}

fn finalize(family: HypothesisFamily, mut buckets: Buckets, params: &ScoringParams) -> FamilyBreakdown {
    let medium = StrengthClass::Medium.index();
    let mut medium_cap_applied = false;
    if !buckets.has_strong() && buckets.positive[medium] > params.medium_cap {
        buckets.positive[medium] = params.medium_cap;
        medium_cap_applied = true;
    }

    let positive: f64 = buckets.positive.iter().sum();
    let negative: f64 = buckets.negative.iter().sum();
    let net = positive - negative;
    // net × dampening carries the sign of the larger side; equal sides give 0.
    let score = if net == 0.0 { 0.0 } else { net * params.dampening };

    FamilyBreakdown {
        family,
        positive_buckets: buckets.positive,
        negative_buckets: buckets.negative,
        medium_cap_applied,
        positive,
        negative,
        score,
    }
}

/// Declaration order of the enum matches `HypothesisFamily::ALL`.
fn family_index(family: HypothesisFamily) -> usize {
    family as usize
}
