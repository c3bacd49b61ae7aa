//! Property tests: override precedence, exclusion invariance, determinism
//! and result well-formedness over random requests.

use autodiag_catalog::{Catalog, SAFETY_TRIGGERS};
use autodiag_engine::*;
use autodiag_types::{
    ConfidenceBand, DiagnosticRequest, EntryAnchor, HypothesisFamily, Observation,
    ObservationId, ObservationValue, StrengthClass, TopHypothesis,
};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Non-safety catalog ids plus one unknown id.
fn ordinary_ids() -> Vec<String> {
    let mut ids: Vec<String> = Catalog::builtin()
        .observations()
        .iter()
        .filter(|s| !s.safety_critical)
        .map(|s| s.id.to_string())
        .collect();
    ids.push("UNKNOWN_SYMPTOM".into());
    ids
}

fn arb_value() -> impl Strategy<Value = ObservationValue> {
    prop_oneof![
        3 => Just(ObservationValue::Yes),
        2 => Just(ObservationValue::No),
        1 => Just(ObservationValue::Unsure),
        1 => Just(ObservationValue::Skip),
    ]
}

fn arb_observation() -> impl Strategy<Value = Observation> {
    (
        prop::sample::select(ordinary_ids()),
        arb_value(),
        prop::option::of(prop::sample::select(StrengthClass::ALL.to_vec())),
    )
        .prop_map(|(id, value, strength)| Observation {
            id: ObservationId::new(id),
            value,
            strength,
        })
}

fn arb_anchor() -> impl Strategy<Value = EntryAnchor> {
    prop::sample::select(EntryAnchor::ALL.to_vec())
}

fn arb_request() -> impl Strategy<Value = DiagnosticRequest> {
    (arb_anchor(), prop::collection::vec(arb_observation(), 0..16)).prop_map(
        |(anchor, observations)| {
            DiagnosticRequest::new(
                "prop",
                "vehicle",
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                anchor,
            )
            .with_observations(observations)
        },
    )
}

fn arb_family() -> impl Strategy<Value = HypothesisFamily> {
    prop::sample::select(HypothesisFamily::ALL.to_vec())
}

fn engine() -> DiagnosticEngine {
    DiagnosticEngine::with_defaults().unwrap()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Any YES on a safety trigger overrides, wherever it sits.
    #[test]
    fn safety_trigger_always_overrides(
        request in arb_request(),
        trigger in prop::sample::select(SAFETY_TRIGGERS.to_vec()),
        position in any::<prop::sample::Index>(),
    ) {
        let mut request = request;
        let at = position.index(request.observations.len() + 1);
        request.observations.insert(at, Observation::yes(trigger));

        let output = engine().evaluate(&request);
        prop_assert_eq!(output.result.top_hypothesis(), Some(TopHypothesis::SafetyOverride));
        prop_assert_eq!(output.result.confidence(), 0.0);
        prop_assert!(output.scores.is_none());
    }

    /// Exclusions never change a score.
    #[test]
    fn exclusions_do_not_touch_scores(
        request in arb_request(),
        excluded in prop::collection::vec(arb_family(), 0..4),
    ) {
        let engine = engine();
        let plain = engine.evaluate(&request);
        let names: Vec<String> = excluded.iter().map(|f| f.as_str().to_lowercase()).collect();
        let with_exclusions = engine.evaluate(&request.clone().with_exclusions(names));

        prop_assert_eq!(plain.scores, with_exclusions.scores);
        if let Some(TopHypothesis::Family(top)) = with_exclusions.result.top_hypothesis() {
            prop_assert!(!excluded.contains(&top));
        }
    }

    /// Same request, same output.
    #[test]
    fn evaluation_is_deterministic(request in arb_request()) {
        let engine = engine();
        prop_assert_eq!(engine.evaluate(&request), engine.evaluate(&request));
    }

    /// Results are well formed on every normal run.
    #[test]
    fn results_are_well_formed(request in arb_request()) {
        let output = engine().evaluate(&request);
        let result = &output.result;
        let scores = output.scores.as_ref().unwrap();

        prop_assert_eq!(scores.len(), HypothesisFamily::ALL.len());
        prop_assert!((0.0..=1.0).contains(&result.confidence()));
        prop_assert_eq!(
            result.confidence_band(),
            ConfidenceBand::from_confidence(result.confidence())
        );
        prop_assert!(result.safety_notes().is_none());

        match result.top_hypothesis() {
            None => {
                prop_assert_eq!(result.confidence(), 0.0);
                prop_assert!(result.specific_component().is_none());
                prop_assert!(result.supporting_observations().is_empty());
            }
            Some(TopHypothesis::Family(top)) => {
                let best = scores.iter().map(|(_, s)| s.abs()).fold(0.0, f64::max);
                prop_assert_eq!(scores.get(top).abs(), best);
                if scores.get(top) <= 0.0 {
                    prop_assert_eq!(result.confidence(), 0.0);
                    prop_assert_eq!(result.confidence_band(), ConfidenceBand::Unsure);
                }
            }
            Some(TopHypothesis::SafetyOverride) => prop_assert!(false, "unexpected override"),
        }

        let mut seen = std::collections::HashSet::new();
        for id in result.supporting_observations() {
            prop_assert!(seen.insert(id.clone()), "duplicate supporting id {}", id);
        }
    }

    /// Corrected scores never go below zero for a corrected target.
    #[test]
    fn correction_never_makes_target_negative(request in arb_request()) {
        let explanation = engine().explain(&request);
        let scores = explanation.output.scores.unwrap();
        for correction in &explanation.corrections {
            prop_assert!(correction.corrected >= 0.0);
            prop_assert!(correction.alternate_after >= correction.alternate_before);
            prop_assert_eq!(scores.get(correction.target), correction.corrected);
        }
    }
}
