//! CLI error types

use autodiag_catalog::CatalogError;
use autodiag_engine::EngineError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine construction or configuration error
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Catalog loading error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
