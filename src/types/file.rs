//! File storage records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A file stored on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<FileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<FileMeta>,
    /// Only meaningful on mutation results: the upload path sets this to
    /// `true` on HTTP 200. Read endpoints leave it at the default.
    #[serde(default)]
    pub success: bool,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl File {
    /// Extracted text content, when the server has processed the file.
    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.content.as_deref())
    }
}

/// Content payload nested under a file record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Descriptive metadata nested under a file record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_reads_through_the_nested_payload() {
        let file: File = serde_json::from_value(json!({
            "id": "f1",
            "filename": "notes.txt",
            "data": {"content": "hello"},
            "meta": {"content_type": "text/plain", "size": 5}
        }))
        .unwrap();
        assert_eq!(file.content(), Some("hello"));
        assert_eq!(file.meta.unwrap().size, Some(5));
        assert!(!file.success);
    }

    #[test]
    fn missing_payloads_read_as_absent() {
        let file: File =
            serde_json::from_value(json!({"id": "f1", "filename": "notes.txt"})).unwrap();
        assert!(file.data.is_none());
        assert!(file.meta.is_none());
        assert_eq!(file.content(), None);
    }
}
