//! Numeric knobs of the scoring arithmetic.

use autodiag_types::StrengthClass;
use serde::{Deserialize, Serialize};

/// Weights, spillover, cap and dampening used by [`crate::score`].
///
/// Defaults reproduce the reference behaviour exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    pub weak_weight: f64,
    pub medium_weight: f64,
    pub strong_weight: f64,
    /// Fraction of the weight each secondary family receives.
    pub spillover_multiplier: f64,
    /// Ceiling on the positive medium total of a family with no strong evidence.
    pub medium_cap: f64,
    /// Applied to every family's net score as the last step.
    pub dampening: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            weak_weight: StrengthClass::Weak.default_weight(),
            medium_weight: StrengthClass::Medium.default_weight(),
            strong_weight: StrengthClass::Strong.default_weight(),
            spillover_multiplier: 0.02,
            medium_cap: 13.0,
            dampening: 0.5,
        }
    }
}

impl ScoringParams {
    pub fn weight(&self, class: StrengthClass) -> f64 {
        match class {
            StrengthClass::Weak => self.weak_weight,
            StrengthClass::Medium => self.medium_weight,
            StrengthClass::Strong => self.strong_weight,
        }
    }
}
