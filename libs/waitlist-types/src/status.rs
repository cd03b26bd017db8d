use serde::{Deserialize, Serialize};

/// Outcome of one form round-trip.
///
/// `Idle` is the state a form starts in before its first submission; the
/// API itself only ever answers with `Success` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Error,
    #[default]
    Idle,
}

impl SubmissionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Idle => "idle",
        };
        write!(f, "{}", s)
    }
}
