//! The diagnosis orchestrator.

use std::collections::{BTreeSet, HashSet};

use autodiag_catalog::Catalog;
use autodiag_credibility::{
    Correction, CorrectionReport, CredibilityCorrector, CredibilityRuleSet,
};
use autodiag_refine::RefinementTable;
use autodiag_safety::{evaluate_safety, SafetyReport};
use autodiag_scoring::{estimate, score_with_breakdown, ConfidenceEstimate, ScoreBreakdown};
use autodiag_types::{
    ComponentId, DiagnosticRequest, DiagnosticResult, EvaluationOutput, Finding, HypothesisFamily,
    ObservationSet, ScoreMap,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clarify::{suggest_clarifiers, Clarifier};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::pipeline::PipelineStage;
use crate::select::{parse_exclusions, select_top, supporting_observations};

// ── Explanation ─────────────────────────────────────────────────────────

/// Everything an evaluation computed, for display and auditing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub stages: Vec<PipelineStage>,
    pub safety: SafetyReport,
    /// Scores before credibility correction; `output.scores` holds the
    /// corrected map. Absent on a safety override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub corrections: Vec<Correction>,
    pub output: EvaluationOutput,
}

// ── Engine ──────────────────────────────────────────────────────────────

/// Immutable once built; share it across threads behind an `Arc`.
#[derive(Clone, Debug)]
pub struct DiagnosticEngine {
    catalog: Catalog,
    config: EngineConfig,
    corrector: CredibilityCorrector,
    refiner: RefinementTable,
}

impl DiagnosticEngine {
    /// Engine with the built-in credibility and refinement tables.
    pub fn new(catalog: Catalog, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let corrector = CredibilityCorrector::builtin(
            config.credibility.clone(),
            &catalog.safety_guarded_families(),
        )?;
        Ok(Self::assemble(catalog, config, corrector, RefinementTable::builtin()))
    }

    /// Engine with caller-supplied tables.
    pub fn with_tables(
        catalog: Catalog,
        config: EngineConfig,
        rule_sets: Vec<CredibilityRuleSet>,
        refiner: RefinementTable,
    ) -> EngineResult<Self> {
        config.validate()?;
        let corrector = CredibilityCorrector::new(
            rule_sets,
            config.credibility.clone(),
            &catalog.safety_guarded_families(),
        )?;
        Ok(Self::assemble(catalog, config, corrector, refiner))
    }

    /// Built-in catalog and default configuration.
    pub fn with_defaults() -> EngineResult<Self> {
        Self::new(Catalog::builtin(), EngineConfig::default())
    }

    fn assemble(
        catalog: Catalog,
        config: EngineConfig,
        corrector: CredibilityCorrector,
        refiner: RefinementTable,
    ) -> Self {
        debug!(
            observations = catalog.observations().len(),
            rule_sets = corrector.rule_sets().len(),
            credibility = config.credibility.enabled,
            "Diagnostic engine ready"
        );
        Self {
            catalog,
            config,
            corrector,
            refiner,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn refiner(&self) -> &RefinementTable {
        &self.refiner
    }

    /// Families no credibility rule may target.
    pub fn safety_guarded_families(&self) -> BTreeSet<HypothesisFamily> {
        self.catalog.safety_guarded_families()
    }

    /// Run the pipeline. Never fails.
    pub fn evaluate(&self, request: &DiagnosticRequest) -> EvaluationOutput {
        self.explain(request).output
    }

    /// Run the pipeline and keep every intermediate result.
    pub fn explain(&self, request: &DiagnosticRequest) -> Explanation {
        let correct = self.config.credibility.enabled;

        // SafetyCheck
        let safety = evaluate_safety(&request.observations);
        if safety.safety_override {
            let result = DiagnosticResult::safety_override(
                request.header(),
                safety.warnings.clone(),
                safety.notes.clone(),
            );
            warn!(
                result_id = %request.result_id,
                triggered = safety.warnings.len(),
                "Evaluation ended in safety override"
            );
            return Explanation {
                stages: PipelineStage::path(true, correct),
                safety,
                breakdown: None,
                corrections: Vec::new(),
                output: EvaluationOutput {
                    result,
                    scores: None,
                },
            };
        }

        // Normalize
        let observations = ObservationSet::new(&request.observations);

        // Score
        let breakdown = score_with_breakdown(&observations, &self.catalog, &self.config.scoring);
        let raw = breakdown.scores();

        // Correct
        let CorrectionReport {
            scores,
            corrections,
        } = if correct {
            self.corrector.apply(&raw, &observations)
        } else {
            CorrectionReport {
                scores: raw,
                corrections: Vec::new(),
            }
        };

        // Confidence, over the families that may still be reported.
        let excluded = parse_exclusions(&request.excluded_hypotheses);
        let confidence = estimate(&without(&scores, &excluded), &self.config.confidence);

        // SelectTop
        let top = select_top(&scores, &excluded);
        // A family reported on evidence against it carries no confidence.
        let confidence = match top {
            Some(family) if scores.get(family) <= 0.0 => ConfidenceEstimate::none(),
            _ => confidence,
        };
        debug!(
            stage = %PipelineStage::SelectTop,
            top = top.map(|f| f.as_str()),
            excluded = excluded.len(),
            "Selected top hypothesis"
        );

        // Refine
        let component = top.and_then(|family| self.refiner.refine(family, &observations));

        // Assemble
        let finding = self.finding(top, component, confidence, &observations);
        let result = DiagnosticResult::diagnosis(request.header(), finding);
        info!(
            result_id = %request.result_id,
            top = result.top_hypothesis().map(|t| t.as_str()),
            component = result.specific_component().map(|c| c.as_str()),
            confidence = result.confidence(),
            band = %result.confidence_band(),
            "Evaluation complete"
        );

        Explanation {
            stages: PipelineStage::path(false, correct),
            safety,
            breakdown: Some(breakdown),
            corrections,
            output: EvaluationOutput {
                result,
                scores: Some(scores),
            },
        }
    }

    /// Follow-up questions that would separate the leading families.
    ///
    /// Empty on a safety override: the user must act first.
    pub fn clarify(&self, request: &DiagnosticRequest, limit: usize) -> Vec<Clarifier> {
        let explanation = self.explain(request);
        let Some(scores) = explanation.output.scores else {
            return Vec::new();
        };
        let observations = ObservationSet::new(&request.observations);
        suggest_clarifiers(&self.catalog, &scores, &observations, limit)
    }

    /// Score map after correction, or `None` on a safety override.
    pub fn scores(&self, request: &DiagnosticRequest) -> Option<ScoreMap> {
        self.evaluate(request).scores
    }

    fn finding(
        &self,
        top: Option<HypothesisFamily>,
        component: Option<ComponentId>,
        confidence: ConfidenceEstimate,
        observations: &ObservationSet<'_>,
    ) -> Finding {
        match top {
            Some(family) => Finding {
                top: Some(family),
                component,
                confidence: confidence.confidence,
                band: confidence.band,
                supporting: supporting_observations(family, observations, &self.catalog),
            },
            None => {
                let none = ConfidenceEstimate::none();
                Finding {
                    top: None,
                    component: None,
                    confidence: none.confidence,
                    band: none.band,
                    supporting: Vec::new(),
                }
            }
        }
    }
}

/// Copy of `scores` with excluded families zeroed.
fn without(scores: &ScoreMap, excluded: &HashSet<HypothesisFamily>) -> ScoreMap {
    let mut visible = scores.clone();
    for family in excluded {
        visible.set(*family, 0.0);
    }
    visible
}
