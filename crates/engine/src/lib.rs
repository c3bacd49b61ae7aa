//! # autodiag-engine
//!
//! Orchestrates one diagnosis:
//!
//! ```text
//! SafetyCheck → Normalize → Score → [Correct] → Confidence → SelectTop → Refine → Assemble
//!      │                                                                            ▲
//!      └──────────────────────────── safety override ───────────────────────────────┘
//! ```
//!
//! [`DiagnosticEngine::evaluate`] never fails. Construction validates the
//! catalog, the rule tables and the [`EngineConfig`]; that is the only
//! place errors come from.

#![deny(unsafe_code)]

pub mod clarify;
pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod select;

pub use clarify::{suggest_clarifiers, Clarifier, MAX_CLARIFIERS};
pub use config::EngineConfig;
pub use engine::{DiagnosticEngine, Explanation};
pub use error::{EngineError, EngineResult};
pub use pipeline::PipelineStage;
pub use select::{parse_exclusions, select_top, supporting_observations};
