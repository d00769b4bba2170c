//! User directory operations.

use tracing::info;

use super::core::Client;
use crate::decode;
use crate::types::User;
use crate::Result;

impl Client {
    /// List all users. Requires an admin API key on most deployments.
    pub fn list_users(&self) -> Result<Vec<User>> {
        info!("fetching all users");
        let raw = self.transport().get("/v1/users/")?;
        let body = self.ensure_success(raw)?;
        let users = decode::list_from_value("user", body)?;
        info!(count = users.len(), "retrieved users");
        Ok(users)
    }
}
