//! End-to-end evaluations against the built-in catalog and tables.

use autodiag_catalog::ids;
use autodiag_engine::*;
use autodiag_types::{
    ConfidenceBand, DiagnosticRequest, EntryAnchor, EvaluationOutput, HypothesisFamily,
    Observation, ObservationValue, TopHypothesis,
};
use chrono::{TimeZone, Utc};

const EPS: f64 = 1e-9;

fn request(anchor: EntryAnchor, observations: Vec<Observation>) -> DiagnosticRequest {
    DiagnosticRequest::new(
        "r-42",
        "veh-7",
        Utc.with_ymd_and_hms(2024, 11, 5, 7, 15, 0).unwrap(),
        anchor,
    )
    .with_observations(observations)
}

fn evaluate(request: &DiagnosticRequest) -> EvaluationOutput {
    DiagnosticEngine::with_defaults().unwrap().evaluate(request)
}

fn supporting(output: &EvaluationOutput) -> Vec<&str> {
    output
        .result
        .supporting_observations()
        .iter()
        .map(|id| id.as_str())
        .collect()
}

#[test]
fn oil_pressure_warning_overrides() {
    let output = evaluate(&request(
        EntryAnchor::WarningLight,
        vec![Observation::yes(ids::OIL_PRESSURE_WARNING)],
    ));
    assert_eq!(
        output.result.top_hypothesis(),
        Some(TopHypothesis::SafetyOverride)
    );
    assert_eq!(output.result.confidence(), 0.0);
    assert!(output.scores.is_none());
    assert!(output.result.safety_notes().is_some());
}

#[test]
fn override_wins_over_strong_evidence() {
    let output = evaluate(&request(
        EntryAnchor::WontStart,
        vec![
            Observation::yes(ids::JUMP_START_WORKS),
            Observation::yes(ids::DASH_LIGHTS_DIM_ON_CRANK),
            Observation::yes(ids::BRAKE_PEDAL_TO_FLOOR),
        ],
    ));
    assert!(output.result.is_safety_override());
    assert!(output.result.specific_component().is_none());
}

#[test]
fn empty_observations_for_every_anchor() {
    for anchor in EntryAnchor::ALL {
        let output = evaluate(&request(anchor, vec![]));
        assert!(output.result.top_hypothesis().is_none());
        assert_eq!(output.result.confidence(), 0.0);
        assert_eq!(output.result.confidence_band(), ConfidenceBand::Unsure);
        assert_eq!(output.result.entry_anchor(), anchor);
        assert_eq!(output.scores.unwrap().len(), HypothesisFamily::ALL.len());
    }
}

#[test]
fn discharged_battery() {
    let output = evaluate(&request(
        EntryAnchor::WontStart,
        vec![
            Observation::yes(ids::JUMP_START_WORKS),
            Observation::yes(ids::DASH_LIGHTS_DIM_ON_CRANK),
            Observation::yes(ids::ENGINE_CRANKS_SLOWLY),
        ],
    ));
    let scores = output.scores.as_ref().unwrap();
    assert!((scores.get(HypothesisFamily::Battery) - 26.0).abs() < EPS);
    assert!((scores.get(HypothesisFamily::Alternator) - 0.39).abs() < EPS);
    assert!((scores.get(HypothesisFamily::Starter) - 0.13).abs() < EPS);

    let result = &output.result;
    assert_eq!(
        result.top_hypothesis(),
        Some(TopHypothesis::Family(HypothesisFamily::Battery))
    );
    assert_eq!(result.confidence_band(), ConfidenceBand::Confident);
    assert!((result.confidence() - 26.0 / 26.52).abs() < EPS);
    assert_eq!(
        result.specific_component().map(|c| c.as_str()),
        Some("BATTERY_DISCHARGED")
    );
    assert_eq!(
        supporting(&output),
        vec![
            ids::JUMP_START_WORKS,
            ids::DASH_LIGHTS_DIM_ON_CRANK,
            ids::ENGINE_CRANKS_SLOWLY
        ]
    );
}

#[test]
fn starter_guardrail_shifts_away_from_battery() {
    let engine = DiagnosticEngine::with_defaults().unwrap();
    let req = request(
        EntryAnchor::WontStart,
        vec![
            Observation::yes(ids::SINGLE_CLICK_NO_CRANK),
            Observation::yes(ids::STARTS_AFTER_TAPPING_STARTER),
        ],
    );
    let explanation = engine.explain(&req);

    let raw = explanation.breakdown.as_ref().unwrap().scores();
    assert!((raw.get(HypothesisFamily::Battery) - 0.13).abs() < EPS);

    let fired: Vec<_> = explanation
        .corrections
        .iter()
        .flat_map(|c| c.fired.iter().map(String::as_str))
        .collect();
    assert!(fired.contains(&"click_then_tap_starts"));

    let output = &explanation.output;
    let scores = output.scores.as_ref().unwrap();
    assert_eq!(scores.get(HypothesisFamily::Battery), 0.0);
    assert!(scores.get(HypothesisFamily::Starter) > 19.5);

    let result = &output.result;
    assert_eq!(
        result.top_hypothesis(),
        Some(TopHypothesis::Family(HypothesisFamily::Starter))
    );
    assert_eq!(result.confidence(), 1.0);
    assert_eq!(
        result.specific_component().map(|c| c.as_str()),
        Some("STARTER_MOTOR_DEAD_SPOT")
    );
}

#[test]
fn two_mediums_cap_at_six_and_a_half() {
    let output = evaluate(&request(
        EntryAnchor::DrivesPoorly,
        vec![
            Observation::yes(ids::ROUGH_IDLE),
            Observation::yes(ids::MISFIRE_FELT),
        ],
    ));
    let scores = output.scores.unwrap();
    assert!((scores.get(HypothesisFamily::Ignition) - 6.5).abs() < EPS);
    assert!((scores.get(HypothesisFamily::Fuel) - 0.26).abs() < EPS);
    assert_eq!(
        output.result.specific_component().map(|c| c.as_str()),
        Some("SPARK_PLUGS")
    );
}

#[test]
fn exclusion_changes_top_not_scores() {
    let observations = vec![
        Observation::yes(ids::JUMP_START_WORKS),
        Observation::yes(ids::DASH_LIGHTS_DIM_ON_CRANK),
        Observation::yes(ids::ENGINE_CRANKS_SLOWLY),
    ];
    let plain = evaluate(&request(EntryAnchor::WontStart, observations.clone()));
    let excluded = evaluate(
        &request(EntryAnchor::WontStart, observations).with_exclusions(["battery"]),
    );

    assert_eq!(plain.scores, excluded.scores);
    assert_eq!(
        excluded.result.top_hypothesis(),
        Some(TopHypothesis::Family(HypothesisFamily::Alternator))
    );
    // 0.39 / (0.39 + 0.13)
    assert!((excluded.result.confidence() - 0.75).abs() < EPS);
    assert_eq!(excluded.result.confidence_band(), ConfidenceBand::Probable);
    assert!(excluded.result.specific_component().is_none());
    assert_eq!(
        supporting(&excluded),
        vec![ids::JUMP_START_WORKS, ids::DASH_LIGHTS_DIM_ON_CRANK]
    );
}

#[test]
fn excluding_the_only_family_leaves_no_hypothesis() {
    let output = evaluate(
        &request(
            EntryAnchor::StrangeNoise,
            vec![Observation::yes(ids::BOUNCY_RIDE)],
        )
        .with_exclusions(["SUSPENSION"]),
    );
    assert!(output.result.top_hypothesis().is_none());
    assert_eq!(output.result.confidence_band(), ConfidenceBand::Unsure);
    assert!(output.scores.unwrap().get(HypothesisFamily::Suspension) > 0.0);
}

#[test]
fn tied_leaders_give_no_hypothesis() {
    let output = evaluate(&request(
        EntryAnchor::ElectricalIssue,
        vec![
            Observation::yes(ids::BLOWN_FUSE_FOUND),
            Observation::yes(ids::LOUD_EXHAUST),
        ],
    ));
    let scores = output.scores.as_ref().unwrap();
    assert_eq!(
        scores.get(HypothesisFamily::Electrical),
        scores.get(HypothesisFamily::Exhaust)
    );
    assert!(output.result.top_hypothesis().is_none());
    assert_eq!(output.result.confidence(), 0.0);
}

#[test]
fn unsure_and_skip_are_neutral() {
    let output = evaluate(&request(
        EntryAnchor::LeakOrSmell,
        vec![
            Observation::new(ids::COOLANT_LEAK_VISIBLE, ObservationValue::Unsure),
            Observation::new(ids::SWEET_SMELL, ObservationValue::Skip),
            Observation::yes("SOMETHING_UNMAPPED"),
        ],
    ));
    assert!(output.scores.unwrap().is_all_zero());
    assert!(output.result.top_hypothesis().is_none());
}

#[test]
fn request_json_round_trip_through_engine() {
    let json = r#"{
        "resultId": "r-1",
        "vehicleId": "v-1",
        "timestamp": "2024-05-01T12:00:00Z",
        "entryAnchor": "LEAK_OR_SMELL",
        "observations": [
            {"id": "TEMP_GAUGE_HIGH", "value": "yes"},
            {"id": "COOLANT_LEAK_VISIBLE", "value": "YES", "strength": "bogus"}
        ],
        "excludedHypotheses": []
    }"#;
    let req: DiagnosticRequest = serde_json::from_str(json).unwrap();
    let output = evaluate(&req);
    assert_eq!(
        output.result.specific_component().map(|c| c.as_str()),
        Some("WATER_PUMP")
    );

    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["result"]["topHypothesis"], "COOLING");
    assert_eq!(value["result"]["id"], "r-1");
    assert!(value["scores"].is_object());
    assert!(value["result"].get("safetyNotes").is_none());
}

#[test]
fn override_output_json_omits_scores() {
    let output = evaluate(&request(
        EntryAnchor::LeakOrSmell,
        vec![Observation::yes(ids::FUEL_SMELL_STRONG)],
    ));
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["result"]["topHypothesis"], "SAFETY_OVERRIDE");
    assert!(value.get("scores").is_none());
    assert!(value["result"]["safetyNotes"].is_array());
}

#[test]
fn clarifiers_separate_leading_families() {
    let engine = DiagnosticEngine::with_defaults().unwrap();
    let req = request(
        EntryAnchor::WontStart,
        vec![
            Observation::yes(ids::ENGINE_CRANKS_SLOWLY),
            Observation::yes(ids::SINGLE_CLICK_NO_CRANK),
        ],
    );
    let clarifiers = engine.clarify(&req, 3);
    assert!(!clarifiers.is_empty());
    assert!(clarifiers.len() <= MAX_CLARIFIERS);
    for clarifier in &clarifiers {
        assert!(clarifier.families.len() >= 2);
        assert_ne!(clarifier.observation.as_str(), ids::ENGINE_CRANKS_SLOWLY);
        assert_ne!(clarifier.observation.as_str(), ids::SINGLE_CLICK_NO_CRANK);
    }
}

#[test]
fn denied_symptom_top_carries_no_confidence() {
    let output = evaluate(&request(
        EntryAnchor::WontStart,
        vec![
            Observation::no(ids::FUEL_GAUGE_EMPTY),
            Observation::yes(ids::BATTERY_OVER_5_YEARS),
        ],
    ));
    let scores = output.scores.as_ref().unwrap();
    assert!((scores.get(HypothesisFamily::Fuel) + 13.0).abs() < EPS);
    assert!(scores.get(HypothesisFamily::Battery) > 0.0);

    let result = &output.result;
    assert_eq!(
        result.top_hypothesis(),
        Some(TopHypothesis::Family(HypothesisFamily::Fuel))
    );
    assert_eq!(result.confidence(), 0.0);
    assert_eq!(result.confidence_band(), ConfidenceBand::Unsure);
    assert!(supporting(&output).is_empty());
}
