//! Entry anchors: the top-level problem category a question flow starts from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Top-level problem category that scoped which observations were asked.
///
/// The pipeline never branches on it; it is carried into the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryAnchor {
    WontStart,
    StrangeNoise,
    WarningLight,
    DrivesPoorly,
    LeakOrSmell,
    ElectricalIssue,
}

impl EntryAnchor {
    pub const ALL: [EntryAnchor; 6] = [
        EntryAnchor::WontStart,
        EntryAnchor::StrangeNoise,
        EntryAnchor::WarningLight,
        EntryAnchor::DrivesPoorly,
        EntryAnchor::LeakOrSmell,
        EntryAnchor::ElectricalIssue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryAnchor::WontStart => "WONT_START",
            EntryAnchor::StrangeNoise => "STRANGE_NOISE",
            EntryAnchor::WarningLight => "WARNING_LIGHT",
            EntryAnchor::DrivesPoorly => "DRIVES_POORLY",
            EntryAnchor::LeakOrSmell => "LEAK_OR_SMELL",
            EntryAnchor::ElectricalIssue => "ELECTRICAL_ISSUE",
        }
    }
}

impl fmt::Display for EntryAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryAnchor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| ParseError::UnknownAnchor(s.to_string()))
    }
}
