//! Confidence estimation over a score map.
//!
//! `confidence = top / (sum of the top three positive scores)`. Negative
//! and zero scores never count. With a single positive family the result
//! is 1.0; with none it is 0.0.

use autodiag_types::{ConfidenceBand, ScoreMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Thresholds and window of the estimator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceParams {
    /// Inclusive lower bound of CONFIDENT.
    pub confident_at: f64,
    /// Inclusive lower bound of PROBABLE.
    pub probable_at: f64,
    /// How many leading positive scores form the denominator.
    pub top_k: usize,
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        Self {
            confident_at: ConfidenceBand::CONFIDENT_AT,
            probable_at: ConfidenceBand::PROBABLE_AT,
            top_k: 3,
        }
    }
}

/// Confidence value together with its band.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceEstimate {
    pub confidence: f64,
    pub band: ConfidenceBand,
}

impl ConfidenceEstimate {
    pub fn none() -> Self {
        Self {
            confidence: 0.0,
            band: ConfidenceBand::Unsure,
        }
    }
}

/// Ratio of the best positive score to the sum of the best `top_k`.
///
/// Independent of family order.
pub fn estimate_confidence(scores: &ScoreMap, top_k: usize) -> f64 {
    let mut positive: Vec<f64> = scores.positive().map(|(_, s)| s).collect();
    if positive.is_empty() || top_k == 0 {
        return 0.0;
    }
    positive.sort_by(|a, b| b.total_cmp(a));

    let top = positive[0];
    let sum: f64 = positive.iter().take(top_k).sum();
    if sum <= 0.0 {
        return 0.0;
    }
    (top / sum).clamp(0.0, 1.0)
}

/// Confidence value and band for a score map.
pub fn estimate(scores: &ScoreMap, params: &ConfidenceParams) -> ConfidenceEstimate {
    let confidence = estimate_confidence(scores, params.top_k);
    let band = ConfidenceBand::classify(confidence, params.confident_at, params.probable_at);
    debug!(stage = "confidence", confidence, band = %band, "Estimated confidence");
    ConfidenceEstimate { confidence, band }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodiag_types::HypothesisFamily::*;

    fn map(entries: &[(autodiag_types::HypothesisFamily, f64)]) -> ScoreMap {
        let mut scores = ScoreMap::zeroed();
        for (family, score) in entries {
            scores.set(*family, *score);
        }
        scores
    }

    #[test]
    fn no_positive_scores_is_zero() {
        assert_eq!(estimate_confidence(&ScoreMap::zeroed(), 3), 0.0);
        let negative_only = map(&[(Battery, -6.5), (Fuel, -3.0)]);
        assert_eq!(estimate_confidence(&negative_only, 3), 0.0);
        assert_eq!(estimate(&negative_only, &ConfidenceParams::default()), ConfidenceEstimate::none());
    }

    #[test]
    fn single_positive_is_certain() {
        let scores = map(&[(Starter, 6.5), (Battery, -2.0)]);
        assert_eq!(estimate_confidence(&scores, 3), 1.0);
    }

    #[test]
    fn boundary_at_080_is_confident() {
        let scores = map(&[(Battery, 8.0), (Starter, 1.0), (Alternator, 1.0)]);
        let result = estimate(&scores, &ConfidenceParams::default());
        assert_eq!(result.confidence, 0.8);
        assert_eq!(result.band, ConfidenceBand::Confident);
    }

    #[test]
    fn boundary_at_060_is_probable() {
        let scores = map(&[(Battery, 6.0), (Starter, 2.0), (Alternator, 2.0)]);
        let result = estimate(&scores, &ConfidenceParams::default());
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.band, ConfidenceBand::Probable);
    }

    #[test]
    fn below_060_is_unsure() {
        let scores = map(&[(Battery, 5.0), (Starter, 3.0), (Alternator, 2.0)]);
        let result = estimate(&scores, &ConfidenceParams::default());
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.band, ConfidenceBand::Unsure);
    }

    #[test]
    fn only_top_three_count() {
        let scores = map(&[
            (Battery, 8.0),
            (Starter, 1.0),
            (Alternator, 1.0),
            (Fuel, 0.5),
            (Ignition, 0.5),
        ]);
        assert_eq!(estimate_confidence(&scores, 3), 0.8);
    }

    #[test]
    fn negatives_do_not_dilute() {
        let scores = map(&[(Battery, 6.0), (Starter, 2.0), (Fuel, -20.0)]);
        assert_eq!(estimate_confidence(&scores, 3), 0.75);
    }

    #[test]
    fn zero_window_is_zero() {
        let scores = map(&[(Battery, 6.0)]);
        assert_eq!(estimate_confidence(&scores, 0), 0.0);
    }
}
