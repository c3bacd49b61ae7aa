//! Error types for rule-set construction.

use autodiag_types::HypothesisFamily;
use thiserror::Error;

/// Errors raised while building a [`crate::CredibilityCorrector`].
#[derive(Debug, Error)]
pub enum CredibilityError {
    #[error("rule set may not target safety-guarded family {0}")]
    SafetyGuardedTarget(HypothesisFamily),

    #[error("alternate family equals target family {0}")]
    AlternateIsTarget(HypothesisFamily),

    #[error("more than one rule set targets {0}")]
    DuplicateTarget(HypothesisFamily),

    #[error("rule {rule} has invalid penalty {penalty}")]
    InvalidPenalty { rule: String, penalty: f64 },

    #[error("rule {0} has an empty condition")]
    EmptyCondition(String),

    #[error("rule set for {0} has no rules")]
    EmptyRuleSet(HypothesisFamily),
}

/// Result type for credibility operations.
pub type CredibilityResult<T> = Result<T, CredibilityError>;
