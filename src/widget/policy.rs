use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the transcript shows when a request fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Nothing is rendered; the failure is only logged.
    #[default]
    Silent,
    /// A notice describing the failure is appended.
    Report,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "report" => Ok(Self::Report),
            other => Err(format!(
                "unknown failure policy '{other}', expected 'silent' or 'report'"
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => write!(f, "silent"),
            Self::Report => write!(f, "report"),
        }
    }
}
