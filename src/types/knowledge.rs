//! Knowledge base records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::file::File;
use super::user::User;

/// A knowledge base: a named collection of files, optionally annotated with
/// free-form data/meta/access-control maps and the owning user.
///
/// The file list is a snapshot copied at decode time, not a live view of
/// remote state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Knowledge {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub access_control: HashMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Knowledge {
    /// Whether a file id is present in this snapshot's file list.
    pub fn contains_file(&self, file_id: &str) -> bool {
        self.files.iter().any(|f| f.id == file_id)
    }
}
