use autodiag_types::HypothesisFamily;
use thiserror::Error;

/// Errors raised while building a [`crate::RefinementTable`].
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("rule {component} for {family} has no required observations")]
    NoRequiredObservations {
        family: HypothesisFamily,
        component: String,
    },

    #[error("rule {component} for {family} both requires and excludes {observation}")]
    ContradictoryRule {
        family: HypothesisFamily,
        component: String,
        observation: String,
    },

    #[error("component {component} appears more than once for {family}")]
    DuplicateComponent {
        family: HypothesisFamily,
        component: String,
    },
}

/// Result type for refinement operations.
pub type RefineResult<T> = Result<T, RefineError>;
