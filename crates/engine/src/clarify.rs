//! Clarifier suggestions.
//!
//! A clarifier is a follow-up question that separates the leading
//! families. Answers come back as ordinary observations on the next
//! evaluation; nothing in the pipeline treats them specially.

use autodiag_catalog::Catalog;
use autodiag_types::{HypothesisFamily, ObservationId, ObservationSet, ScoreMap, StrengthClass};
use serde::Serialize;

/// Hard limit on clarifiers per run.
pub const MAX_CLARIFIERS: usize = 3;

/// How many leading positive families are considered.
const LEADING: usize = 3;

/// A follow-up question worth asking.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clarifier {
    pub observation: ObservationId,
    pub label: String,
    /// Leading families the answer would move, in score order.
    pub families: Vec<HypothesisFamily>,
    pub strength: StrengthClass,
}

/// Positive families by descending score, ties in canonical order.
pub fn leading_families(scores: &ScoreMap, count: usize) -> Vec<HypothesisFamily> {
    let mut positive: Vec<(HypothesisFamily, f64)> = scores.positive().collect();
    positive.sort_by(|a, b| b.1.total_cmp(&a.1));
    positive.into_iter().take(count).map(|(f, _)| f).collect()
}

/// Up to `limit` (at most [`MAX_CLARIFIERS`]) unanswered, non-safety
/// observations that touch at least two leading families.
///
/// Ranked by families touched, then default strength, then catalog order.
pub fn suggest_clarifiers(
    catalog: &Catalog,
    scores: &ScoreMap,
    observations: &ObservationSet<'_>,
    limit: usize,
) -> Vec<Clarifier> {
    let leading = leading_families(scores, LEADING);
    if leading.len() < 2 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, Clarifier)> = catalog
        .observations()
        .iter()
        .enumerate()
        .filter(|(_, spec)| !spec.safety_critical)
        .filter(|(_, spec)| !observations.is_answered(spec.id.as_str()))
        .filter_map(|(position, spec)| {
            let mapping = catalog.mapping(spec.id.as_str())?;
            let families: Vec<HypothesisFamily> = leading
                .iter()
                .copied()
                .filter(|f| mapping.touches(*f))
                .collect();
            (families.len() >= 2).then(|| {
                (
                    position,
                    Clarifier {
                        observation: spec.id.clone(),
                        label: spec.label.clone(),
                        families,
                        strength: spec.default_strength,
                    },
                )
            })
        })
        .collect();

    candidates.sort_by(|(pa, a), (pb, b)| {
        b.families
            .len()
            .cmp(&a.families.len())
            .then(b.strength.cmp(&a.strength))
            .then(pa.cmp(pb))
    });

    candidates
        .into_iter()
        .take(limit.min(MAX_CLARIFIERS))
        .map(|(_, clarifier)| clarifier)
        .collect()
}
