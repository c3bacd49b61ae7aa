//! # autodiag-safety
//!
//! Safety Evaluator. A YES on any of the five safety-trigger symptoms
//! stops the diagnosis: the user must act before anything else is
//! computed. There is no severity grading; one trigger weighs the same as
//! five.

#![deny(unsafe_code)]

use autodiag_catalog::ids::{
    BRAKE_PEDAL_TO_FLOOR, FUEL_SMELL_STRONG, OIL_PRESSURE_WARNING, SAFETY_TRIGGERS,
    SMOKE_FROM_HOOD, TEMP_GAUGE_RED,
};
use autodiag_types::{Observation, ObservationId, ObservationSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of the safety check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    /// True when at least one trigger is YES.
    pub safety_override: bool,
    /// Always equal to `safety_override`.
    pub hard_stop: bool,
    /// Triggered ids, in trigger order.
    pub warnings: Vec<ObservationId>,
    /// One advisory per triggered id, aligned with `warnings`.
    pub notes: Vec<String>,
}

impl SafetyReport {
    pub fn is_clear(&self) -> bool {
        !self.safety_override
    }
}

/// Advisory shown to the user for a safety trigger.
pub fn safety_note(trigger: &str) -> Option<&'static str> {
    let note = match trigger {
        OIL_PRESSURE_WARNING => {
            "Oil pressure warning: stop the engine now. Running without oil pressure destroys the engine."
        }
        BRAKE_PEDAL_TO_FLOOR => {
            "Brake pedal goes to the floor: do not drive. Have the vehicle towed."
        }
        FUEL_SMELL_STRONG => {
            "Strong fuel smell: turn the engine off, keep sparks and flames away and move away from the vehicle."
        }
        SMOKE_FROM_HOOD => {
            "Smoke from under the hood: turn the engine off, get out and keep clear. Do not open the hood if you see flames."
        }
        TEMP_GAUGE_RED => {
            "Engine overheating: pull over and switch off. Never open the radiator cap while hot."
        }
        _ => return None,
    };
    Some(note)
}

/// Check the raw observation list for safety triggers.
///
/// A trigger counts when any of its entries is YES, even if a later entry
/// for the same id says otherwise.
pub fn evaluate_safety(observations: &[Observation]) -> SafetyReport {
    let set = ObservationSet::new(observations);
    let mut report = SafetyReport::default();

    for trigger in SAFETY_TRIGGERS {
        if !set.any_yes(trigger) {
            continue;
        }
        report.warnings.push(ObservationId::new(trigger));
        if let Some(note) = safety_note(trigger) {
            report.notes.push(note.to_string());
        }
    }

    report.safety_override = !report.warnings.is_empty();
    report.hard_stop = report.safety_override;

    if report.safety_override {
        warn!(
            triggered = ?report.warnings,
            "Safety override: diagnosis suspended"
        );
    } else {
        debug!(observations = observations.len(), "Safety check clear");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodiag_types::ObservationValue;

    #[test]
    fn empty_input_is_clear() {
        let report = evaluate_safety(&[]);
        assert!(report.is_clear());
        assert!(!report.hard_stop);
        assert!(report.warnings.is_empty());
        assert!(report.notes.is_empty());
    }

    #[test]
    fn single_trigger_overrides() {
        let report = evaluate_safety(&[Observation::yes(OIL_PRESSURE_WARNING)]);
        assert!(report.safety_override);
        assert!(report.hard_stop);
        assert_eq!(report.warnings, vec![ObservationId::new(OIL_PRESSURE_WARNING)]);
        assert_eq!(report.notes.len(), 1);
    }

    #[test]
    fn warnings_follow_trigger_order_not_input_order() {
        let report = evaluate_safety(&[
            Observation::yes(TEMP_GAUGE_RED),
            Observation::yes("ROUGH_IDLE"),
            Observation::yes(BRAKE_PEDAL_TO_FLOOR),
        ]);
        assert_eq!(
            report.warnings,
            vec![
                ObservationId::new(BRAKE_PEDAL_TO_FLOOR),
                ObservationId::new(TEMP_GAUGE_RED)
            ]
        );
        assert_eq!(report.notes.len(), 2);
    }

    #[test]
    fn only_yes_activates() {
        let report = evaluate_safety(&[
            Observation::no(OIL_PRESSURE_WARNING),
            Observation::new(FUEL_SMELL_STRONG, ObservationValue::Unsure),
            Observation::new(SMOKE_FROM_HOOD, ObservationValue::Skip),
        ]);
        assert!(report.is_clear());
    }

    #[test]
    fn any_yes_entry_counts() {
        let report = evaluate_safety(&[
            Observation::yes(SMOKE_FROM_HOOD),
            Observation::no(SMOKE_FROM_HOOD),
        ]);
        assert!(report.safety_override);
    }

    #[test]
    fn lowercase_yes_in_json_activates() {
        let observations: Vec<Observation> =
            serde_json::from_str(r#"[{"id": "FUEL_SMELL_STRONG", "value": "yes"}]"#).unwrap();
        assert!(evaluate_safety(&observations).safety_override);
    }

    #[test]
    fn every_trigger_has_a_note() {
        for trigger in SAFETY_TRIGGERS {
            assert!(safety_note(trigger).is_some(), "{trigger}");
        }
        assert!(safety_note("ROUGH_IDLE").is_none());
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = evaluate_safety(&[Observation::yes(TEMP_GAUGE_RED)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["safetyOverride"], true);
        assert_eq!(json["hardStop"], true);
        assert_eq!(json["warnings"][0], "TEMP_GAUGE_RED");
    }
}
