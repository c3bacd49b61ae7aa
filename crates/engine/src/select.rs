//! Top-hypothesis selection and supporting-evidence collection.

use std::collections::HashSet;

use autodiag_catalog::Catalog;
use autodiag_types::{HypothesisFamily, ObservationId, ObservationSet, ScoreMap};

/// Parse caller exclusions. Matching is case-insensitive; unknown names
/// are dropped.
pub fn parse_exclusions(names: &[String]) -> HashSet<HypothesisFamily> {
    names
        .iter()
        .filter_map(|name| HypothesisFamily::lookup(name))
        .collect()
}

/// Family with the greatest absolute score among those not excluded.
///
/// A tie for the greatest magnitude, or nothing but zeros, selects nothing.
pub fn select_top(
    scores: &ScoreMap,
    excluded: &HashSet<HypothesisFamily>,
) -> Option<HypothesisFamily> {
    let mut best: Option<(HypothesisFamily, f64)> = None;
    let mut tied = false;

    for (family, score) in scores.iter() {
        if excluded.contains(&family) {
            continue;
        }
        let magnitude = score.abs();
        match best {
            Some((_, top)) if magnitude < top => {}
            Some((_, top)) if magnitude == top => tied = true,
            _ => {
                best = Some((family, magnitude));
                tied = false;
            }
        }
    }

    match best {
        Some((family, magnitude)) if magnitude > 0.0 && !tied => Some(family),
        _ => None,
    }
}

/// YES observations whose mapping touches `top`, in input order, each once.
pub fn supporting_observations(
    top: HypothesisFamily,
    observations: &ObservationSet<'_>,
    catalog: &Catalog,
) -> Vec<ObservationId> {
    let mut seen = HashSet::new();
    observations
        .entries()
        .iter()
        .filter(|o| observations.is_yes(o.id.as_str()))
        .filter(|o| {
            catalog
                .mapping(o.id.as_str())
                .map(|m| m.touches(top))
                .unwrap_or(false)
        })
        .filter(|o| seen.insert(o.id.as_str()))
        .map(|o| o.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodiag_catalog::ids;
    use autodiag_types::Observation;
    use HypothesisFamily::*;

    fn map(entries: &[(HypothesisFamily, f64)]) -> ScoreMap {
        let mut scores = ScoreMap::zeroed();
        for (family, score) in entries {
            scores.set(*family, *score);
        }
        scores
    }

    #[test]
    fn picks_greatest_magnitude() {
        let scores = map(&[(Battery, 6.5), (Starter, 3.0)]);
        assert_eq!(select_top(&scores, &HashSet::new()), Some(Battery));
    }

    #[test]
    fn negative_magnitude_can_win() {
        let scores = map(&[(Battery, 2.0), (Fuel, -6.5)]);
        assert_eq!(select_top(&scores, &HashSet::new()), Some(Fuel));
    }

    #[test]
    fn all_zero_selects_nothing() {
        assert_eq!(select_top(&ScoreMap::zeroed(), &HashSet::new()), None);
    }

    #[test]
    fn tie_selects_nothing() {
        let scores = map(&[(Battery, 6.5), (Starter, 6.5), (Fuel, 1.0)]);
        assert_eq!(select_top(&scores, &HashSet::new()), None);
        let opposite = map(&[(Battery, 6.5), (Starter, -6.5)]);
        assert_eq!(select_top(&opposite, &HashSet::new()), None);
    }

    #[test]
    fn tie_below_the_top_is_irrelevant() {
        let scores = map(&[(Battery, 1.0), (Starter, 1.0), (Fuel, 6.5)]);
        assert_eq!(select_top(&scores, &HashSet::new()), Some(Fuel));
    }

    #[test]
    fn exclusion_skips_family() {
        let scores = map(&[(Battery, 6.5), (Starter, 3.0)]);
        let excluded = parse_exclusions(&["battery".to_string(), "WIPERS".to_string()]);
        assert_eq!(excluded.len(), 1);
        assert_eq!(select_top(&scores, &excluded), Some(Starter));
    }

    #[test]
    fn excluding_only_viable_family_selects_nothing() {
        let scores = map(&[(Battery, 6.5)]);
        let excluded = parse_exclusions(&["Battery".to_string()]);
        assert_eq!(select_top(&scores, &excluded), None);
    }

    #[test]
    fn excluding_one_of_a_tie_breaks_it() {
        let scores = map(&[(Battery, 6.5), (Starter, 6.5)]);
        let excluded = parse_exclusions(&["STARTER".to_string()]);
        assert_eq!(select_top(&scores, &excluded), Some(Battery));
    }

    #[test]
    fn supporting_is_ordered_and_deduplicated() {
        let catalog = Catalog::builtin();
        let entries = [
            Observation::yes(ids::JUMP_START_WORKS),
            Observation::yes(ids::SINGLE_CLICK_NO_CRANK),
            Observation::no(ids::BATTERY_OVER_5_YEARS),
            Observation::yes(ids::ROUGH_IDLE),
            Observation::yes(ids::JUMP_START_WORKS),
        ];
        let supporting =
            supporting_observations(Battery, &ObservationSet::new(&entries), &catalog);
        let found: Vec<_> = supporting.iter().map(|id| id.as_str()).collect();
        // SINGLE_CLICK_NO_CRANK reaches BATTERY as a secondary.
        assert_eq!(found, vec![ids::JUMP_START_WORKS, ids::SINGLE_CLICK_NO_CRANK]);
    }

    #[test]
    fn retracted_yes_is_not_supporting() {
        let catalog = Catalog::builtin();
        let entries = [
            Observation::yes(ids::JUMP_START_WORKS),
            Observation::no(ids::JUMP_START_WORKS),
        ];
        let supporting =
            supporting_observations(Battery, &ObservationSet::new(&entries), &catalog);
        assert!(supporting.is_empty());
    }
}
