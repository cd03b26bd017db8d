use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ErrorCode, SubmissionStatus};

/// Per-field validation messages, keyed by the request's camelCase field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Response body for a waitlist submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Human-readable message suitable for a toast or inline banner.
    pub message: String,

    pub status: SubmissionStatus,

    /// Field-level messages, present only for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    /// Machine-readable error code, present only on errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl SubmissionResult {
    pub fn idle() -> Self {
        Self {
            message: String::new(),
            status: SubmissionStatus::Idle,
            errors: None,
            code: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: SubmissionStatus::Success,
            errors: None,
            code: None,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: SubmissionStatus::Error,
            errors: None,
            code: Some(code),
        }
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Response body for `GET /api/waitlist/count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistCount {
    pub count: u64,
}
