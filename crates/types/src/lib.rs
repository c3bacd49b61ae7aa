//! # autodiag-types
//!
//! Shared vocabulary of the diagnosis pipeline.
//!
//! - **Observation model**: symptom ids, YES/NO/UNSURE/SKIP answers and the
//!   WEAK/MEDIUM/STRONG reliability classes.
//! - **Hypothesis families**: the closed set of vehicle subsystems and the
//!   total per-family [`ScoreMap`].
//! - **Records**: [`DiagnosticRequest`] in, [`EvaluationOutput`] out.
//!
//! Nothing here computes a diagnosis; the pipeline crates do.

#![deny(unsafe_code)]

pub mod anchor;
pub mod error;
pub mod family;
pub mod observation;
pub mod result;

pub use anchor::EntryAnchor;
pub use error::{ParseError, ParseResult};
pub use family::{HypothesisFamily, ScoreMap};
pub use observation::{
    Observation, ObservationId, ObservationSet, ObservationValue, StrengthClass,
};
pub use result::{
    ComponentId, ConfidenceBand, DiagnosticRequest, DiagnosticResult, EvaluationOutput, Finding,
    ResultHeader, TopHypothesis, SAFETY_OVERRIDE,
};
