//! Error types for parsing the shared vocabulary.

use thiserror::Error;

/// Errors raised when a textual name does not belong to a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Name is not one of the hypothesis families.
    #[error("unknown hypothesis family: {0}")]
    UnknownFamily(String),

    /// Name is not one of the six entry anchors.
    #[error("unknown entry anchor: {0}")]
    UnknownAnchor(String),

    /// Name is neither a family nor the safety override marker.
    #[error("unknown top hypothesis: {0}")]
    UnknownHypothesis(String),

    /// Name is not a strength class.
    #[error("unknown strength class: {0}")]
    UnknownStrength(String),
}

/// Result type for vocabulary parsing.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ParseError::UnknownFamily("WIPERS".into());
        assert_eq!(err.to_string(), "unknown hypothesis family: WIPERS");

        let err = ParseError::UnknownAnchor("BORED".into());
        assert_eq!(err.to_string(), "unknown entry anchor: BORED");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
    }
}
