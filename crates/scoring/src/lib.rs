//! # autodiag-scoring
//!
//! Turns YES/NO observations into one signed score per hypothesis family,
//! then condenses the score map into a confidence value and band.
//!
//! ## Scoring steps
//!
//! 1. Each YES/NO entry adds its signed weight (6/13/26 by strength class)
//!    to its primary family, and `weight × 0.02` to each listed secondary.
//! 2. Contributions land in per-family buckets keyed by sign and class.
//! 3. **Medium cap**: without any strong evidence, a family's positive
//!    medium total is clamped to 13.
//! 4. **Dampening**: `final = (positive − negative) × 0.5`, always.
//!
//! Every call builds its aggregates from scratch; nothing is shared.

#![deny(unsafe_code)]

pub mod breakdown;
pub mod confidence;
pub mod params;

pub use breakdown::{score, score_with_breakdown, FamilyBreakdown, ScoreBreakdown};
pub use confidence::{estimate, estimate_confidence, ConfidenceEstimate, ConfidenceParams};
pub use params::ScoringParams;
