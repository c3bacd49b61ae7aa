//! Error types for engine construction.
//!
//! Evaluation itself never fails; every error here comes from building an
//! engine out of a catalog, rule tables or a configuration.

use autodiag_catalog::CatalogError;
use autodiag_credibility::CredibilityError;
use autodiag_refine::RefineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("credibility rules error: {0}")]
    Credibility(#[from] CredibilityError),

    #[error("refinement rules error: {0}")]
    Refine(#[from] RefineError),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
