//! # autodiag-credibility
//!
//! Post-scoring correction of known over-selection bias.
//!
//! A [`CredibilityRuleSet`] names a target family, an alternate family and
//! an ordered table of [`CredibilityRule`]s. Every rule whose condition
//! holds adds its penalty. The accumulated penalty (clamped to a cap)
//! shrinks the target's score multiplicatively; above a threshold part of
//! the removed mass moves to the alternate.
//!
//! Rule sets may never target a safety-guarded family.

#![deny(unsafe_code)]

pub mod builtin;
pub mod corrector;
pub mod error;
pub mod rule;

pub use builtin::battery_rule_set;
pub use corrector::{Correction, CorrectionReport, CredibilityCorrector, CredibilityParams};
pub use error::{CredibilityError, CredibilityResult};
pub use rule::{Check, Condition, CredibilityRule, CredibilityRuleSet, Expectation};
