//! Model catalog operations.

use serde_json::Value;
use tracing::info;

use super::core::Client;
use crate::decode;
use crate::types::Model;
use crate::Result;

impl Client {
    /// List the models available to the authenticated user.
    ///
    /// Unlike the other list endpoints, the catalog nests its array under a
    /// `data` key; a missing key reads as an empty catalog.
    pub fn list_models(&self) -> Result<Vec<Model>> {
        info!("fetching available models");
        let raw = self.transport().get("/models")?;
        let body = self.ensure_success(raw)?;
        let data = body
            .get("data")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        let models = decode::list_from_value("model", data)?;
        info!(count = models.len(), "retrieved models");
        Ok(models)
    }
}
