//! Error types for catalog loading and validation.

use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate observation id in catalog: {0}")]
    DuplicateObservation(String),

    #[error("duplicate mapping entry for observation: {0}")]
    DuplicateMapping(String),

    #[error("mapping for {observation} lists its primary family {family} as secondary")]
    SecondaryIsPrimary { observation: String, family: String },

    #[error("mapping for {observation} lists secondary family {family} more than once")]
    DuplicateSecondary { observation: String, family: String },

    #[error("safety trigger {0} is missing from the catalog")]
    MissingSafetyTrigger(String),

    #[error("safety trigger {0} is not flagged safety-critical")]
    UnflaggedSafetyTrigger(String),

    #[error("catalog io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
