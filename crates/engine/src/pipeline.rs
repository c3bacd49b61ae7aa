//! Pipeline stages, in execution order.

use std::fmt;

use serde::Serialize;

/// One step of an evaluation.
///
/// Stages run strictly in declaration order. The only branch is a safety
/// override, which jumps from [`PipelineStage::SafetyCheck`] straight to
/// [`PipelineStage::Assemble`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineStage {
    SafetyCheck,
    Normalize,
    Score,
    Correct,
    Confidence,
    SelectTop,
    Refine,
    Assemble,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 8] = [
        PipelineStage::SafetyCheck,
        PipelineStage::Normalize,
        PipelineStage::Score,
        PipelineStage::Correct,
        PipelineStage::Confidence,
        PipelineStage::SelectTop,
        PipelineStage::Refine,
        PipelineStage::Assemble,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::SafetyCheck => "safety_check",
            PipelineStage::Normalize => "normalize",
            PipelineStage::Score => "score",
            PipelineStage::Correct => "correct",
            PipelineStage::Confidence => "confidence",
            PipelineStage::SelectTop => "select_top",
            PipelineStage::Refine => "refine",
            PipelineStage::Assemble => "assemble",
        }
    }

    /// Stages a run passes through.
    pub fn path(safety_override: bool, correct: bool) -> Vec<PipelineStage> {
        if safety_override {
            return vec![PipelineStage::SafetyCheck, PipelineStage::Assemble];
        }
        Self::ALL
            .into_iter()
            .filter(|stage| correct || *stage != PipelineStage::Correct)
            .collect()
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
