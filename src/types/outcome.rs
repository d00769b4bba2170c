//! Success/error duality records for mutation endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback message when a failure body carries no `detail` field.
pub(crate) const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Uniform result record for mutation endpoints.
///
/// A missing `success` field decodes as `false`; the client sets the flag
/// explicitly from the HTTP status, so the schema default is only visible to
/// code decoding raw payloads directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorItem {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Field-location indicator as reported by the server, shape varies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ValidationErrorItem {
    /// Mark this record as the business-failure side of the duality,
    /// populating `message` from the payload's `detail` field.
    pub(crate) fn mark_failure(&mut self) {
        self.success = false;
        self.message = Some(
            self.detail
                .clone()
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        );
    }
}

/// Typed outcome of an operation whose endpoint answers either with the full
/// record or with a structured error body.
///
/// Both arms are normal return values: transport failures and invalid
/// arguments surface as [`crate::Error`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ValidationErrorItem),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            ApiOutcome::Success(value) => Some(value),
            ApiOutcome::Failure(_) => None,
        }
    }

    pub fn failure(self) -> Option<ValidationErrorItem> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Failure(item) => Some(item),
        }
    }
}
