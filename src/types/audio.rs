//! Audio transcription records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Transcription result for an uploaded audio file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    pub text: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
