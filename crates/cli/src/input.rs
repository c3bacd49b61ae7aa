//! Request input
//!
//! The CLI is the external caller, so it supplies the identifiers the
//! engine never invents.

use std::path::Path;

use autodiag_types::DiagnosticRequest;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{CliError, CliResult};

/// Read a request from a file, or from stdin when the path is `-`.
pub fn read_request(path: &Path) -> CliResult<DiagnosticRequest> {
    let contents = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(path)?
    };
    parse_request(&contents)
}

/// Parse request JSON, filling in `resultId` and `timestamp` when absent.
pub fn parse_request(contents: &str) -> CliResult<DiagnosticRequest> {
    let mut value: Value = serde_json::from_str(contents)?;
    let Some(object) = value.as_object_mut() else {
        return Err(CliError::InvalidInput(
            "request must be a JSON object".to_string(),
        ));
    };

    if !object.contains_key("resultId") {
        object.insert(
            "resultId".to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
    }
    if !object.contains_key("timestamp") {
        object.insert(
            "timestamp".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodiag_types::EntryAnchor;

    #[test]
    fn test_missing_identity_is_supplied() {
        let request = parse_request(r#"{"vehicleId": "veh-1", "entryAnchor": "WONT_START"}"#)
            .unwrap();
        assert!(Uuid::parse_str(&request.result_id).is_ok());
        assert_eq!(request.entry_anchor, EntryAnchor::WontStart);
        assert!(request.observations.is_empty());
    }

    #[test]
    fn test_caller_identity_is_kept() {
        let request = parse_request(
            r#"{
                "resultId": "r-1",
                "vehicleId": "veh-1",
                "timestamp": "2024-03-01T12:00:00Z",
                "entryAnchor": "STRANGE_NOISE"
            }"#,
        )
        .unwrap();
        assert_eq!(request.result_id, "r-1");
        assert_eq!(request.timestamp.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_non_object_rejected() {
        let err = parse_request("[1, 2]").unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_request("{").unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
