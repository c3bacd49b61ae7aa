//! Engine configuration.
//!
//! Every section and field is optional in TOML; whatever is missing keeps
//! its default, and the defaults reproduce the reference arithmetic.
//!
//! ```toml
//! [scoring]
//! spillover_multiplier = 0.02
//!
//! [confidence]
//! confident_at = 0.8
//!
//! [credibility]
//! enabled = false
//! ```

use std::path::Path;

use autodiag_credibility::CredibilityParams;
use autodiag_scoring::{ConfidenceParams, ScoringParams};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringParams,
    pub confidence: ConfidenceParams,
    pub credibility: CredibilityParams,
}

impl EngineConfig {
    pub fn from_toml_str(contents: &str) -> EngineResult<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> EngineResult<String> {
        toml::to_string_pretty(self).map_err(|e| EngineError::Configuration(e.to_string()))
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> EngineResult<()> {
        let s = &self.scoring;
        for (name, weight) in [
            ("scoring.weak_weight", s.weak_weight),
            ("scoring.medium_weight", s.medium_weight),
            ("scoring.strong_weight", s.strong_weight),
            ("scoring.medium_cap", s.medium_cap),
        ] {
            if !(weight.is_finite() && weight > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {weight}")));
            }
        }
        unit_interval("scoring.spillover_multiplier", s.spillover_multiplier)?;
        unit_interval("scoring.dampening", s.dampening)?;
        if s.dampening == 0.0 {
            return Err(invalid("scoring.dampening must be greater than 0".into()));
        }

        let c = &self.confidence;
        unit_interval("confidence.confident_at", c.confident_at)?;
        unit_interval("confidence.probable_at", c.probable_at)?;
        if c.probable_at > c.confident_at {
            return Err(invalid(format!(
                "confidence.probable_at ({}) exceeds confidence.confident_at ({})",
                c.probable_at, c.confident_at
            )));
        }
        if c.top_k == 0 {
            return Err(invalid("confidence.top_k must be at least 1".into()));
        }

        let r = &self.credibility;
        if !(r.penalty_cap.is_finite() && r.penalty_cap >= 0.0) {
            return Err(invalid(format!(
                "credibility.penalty_cap must be non-negative, got {}",
                r.penalty_cap
            )));
        }
        if !(r.redistribution_threshold.is_finite() && r.redistribution_threshold >= 0.0) {
            return Err(invalid(format!(
                "credibility.redistribution_threshold must be non-negative, got {}",
                r.redistribution_threshold
            )));
        }
        unit_interval("credibility.redistribution_ratio", r.redistribution_ratio)?;

        Ok(())
    }
}

fn unit_interval(name: &str, value: f64) -> EngineResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be within [0, 1], got {value}")))
    }
}

fn invalid(message: String) -> EngineError {
    EngineError::Configuration(message)
}
