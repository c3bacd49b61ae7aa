//! The built-in BATTERY rule set against the built-in catalog.

use autodiag_catalog::{ids, Catalog};
use autodiag_credibility::*;
use autodiag_types::{HypothesisFamily, Observation, ObservationSet, ScoreMap};

fn corrector() -> CredibilityCorrector {
    let guarded = Catalog::builtin().safety_guarded_families();
    CredibilityCorrector::builtin(CredibilityParams::default(), &guarded).unwrap()
}

fn battery_scores(battery: f64, starter: f64) -> ScoreMap {
    let mut scores = ScoreMap::zeroed();
    scores.set(HypothesisFamily::Battery, battery);
    scores.set(HypothesisFamily::Starter, starter);
    scores
}

#[test]
fn builtin_accepts_builtin_catalog_guards() {
    let corrector = corrector();
    assert_eq!(corrector.rule_sets().len(), 1);
    let guarded = Catalog::builtin().safety_guarded_families();
    for set in corrector.rule_sets() {
        assert!(!guarded.contains(&set.target));
    }
}

#[test]
fn full_battery_support_fires_nothing() {
    let entries = [
        Observation::yes(ids::JUMP_START_WORKS),
        Observation::yes(ids::DASH_LIGHTS_DIM_ON_CRANK),
        Observation::yes(ids::ENGINE_CRANKS_SLOWLY),
    ];
    let input = battery_scores(13.0, 0.5);
    let report = corrector().apply(&input, &ObservationSet::new(&entries));
    assert_eq!(report.scores, input);
    assert!(report.corrections.is_empty());
}

#[test]
fn starter_tap_guardrail_moves_score_to_starter() {
    let entries = [
        Observation::yes(ids::SINGLE_CLICK_NO_CRANK),
        Observation::yes(ids::STARTS_AFTER_TAPPING_STARTER),
        Observation::yes(ids::JUMP_START_WORKS),
        Observation::yes(ids::DASH_LIGHTS_DIM_ON_CRANK),
        Observation::yes(ids::ENGINE_CRANKS_SLOWLY),
    ];
    let report = corrector().apply(&battery_scores(10.0, 1.0), &ObservationSet::new(&entries));
    let fired: Vec<_> = report.fired_rules().collect();
    assert_eq!(fired, vec!["click_then_tap_starts"]);
    assert!((report.scores.get(HypothesisFamily::Battery) - 2.0).abs() < 1e-9);
    assert!((report.scores.get(HypothesisFamily::Starter) - 5.0).abs() < 1e-9);
}

#[test]
fn unsure_does_not_count_as_absent() {
    let entries = [
        Observation::new(ids::JUMP_START_WORKS, autodiag_types::ObservationValue::Unsure),
        Observation::yes(ids::DASH_LIGHTS_DIM_ON_CRANK),
        Observation::yes(ids::ENGINE_CRANKS_SLOWLY),
    ];
    let report = corrector().apply(&battery_scores(10.0, 0.0), &ObservationSet::new(&entries));
    assert!(report.corrections.is_empty());
}
