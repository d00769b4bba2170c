//! Knowledge base operations.

use serde_json::json;
use tracing::info;

use super::core::Client;
use super::validation;
use crate::decode;
use crate::types::{ApiOutcome, Knowledge};
use crate::Result;

impl Client {
    /// List every knowledge base visible to the authenticated user.
    pub fn list_knowledge(&self) -> Result<Vec<Knowledge>> {
        info!("fetching all knowledge bases");
        let raw = self.transport().get("/v1/knowledge")?;
        let body = self.ensure_success(raw)?;
        let items = decode::list_from_value("knowledge", body)?;
        info!(count = items.len(), "retrieved knowledge bases");
        Ok(items)
    }

    /// Fetch a single knowledge base by id.
    pub fn get_knowledge(&self, id: &str) -> Result<ApiOutcome<Knowledge>> {
        validation::require_non_empty("id", id)?;
        let raw = self.transport().get(&format!("/v1/knowledge/{}", id))?;
        self.record_outcome(raw, "knowledge")
    }

    /// Attach an uploaded file to a knowledge base.
    pub fn add_knowledge_file(
        &self,
        knowledge_id: &str,
        file_id: &str,
    ) -> Result<ApiOutcome<Knowledge>> {
        self.knowledge_file_op(knowledge_id, file_id, "add")
    }

    /// Detach a file from a knowledge base.
    pub fn remove_knowledge_file(
        &self,
        knowledge_id: &str,
        file_id: &str,
    ) -> Result<ApiOutcome<Knowledge>> {
        self.knowledge_file_op(knowledge_id, file_id, "remove")
    }

    // The decoded Knowledge is returned as the server sent it; membership of
    // the file in its list is not re-checked client-side.
    fn knowledge_file_op(
        &self,
        knowledge_id: &str,
        file_id: &str,
        op: &str,
    ) -> Result<ApiOutcome<Knowledge>> {
        validation::require_non_empty("knowledge_id", knowledge_id)?;
        validation::require_non_empty("file_id", file_id)?;
        info!(knowledge = knowledge_id, file = file_id, op, "updating knowledge file list");
        let raw = self.transport().post_json(
            &format!("/v1/knowledge/{}/file/{}", knowledge_id, op),
            &json!({ "file_id": file_id }),
        )?;
        self.record_outcome(raw, "knowledge")
    }
}
