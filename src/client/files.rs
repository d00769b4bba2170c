//! File storage operations.

use std::path::Path;

use reqwest::blocking::multipart::Form;
use reqwest::StatusCode;
use serde_json::json;
use tracing::{info, warn};

use super::core::Client;
use super::validation;
use crate::decode;
use crate::types::{ApiOutcome, File, ValidationErrorItem};
use crate::Result;

impl Client {
    /// List every stored file visible to the authenticated user.
    pub fn list_files(&self) -> Result<Vec<File>> {
        info!("fetching all files");
        let raw = self.transport().get("/v1/files")?;
        let body = self.ensure_success(raw)?;
        let files = decode::list_from_value("file", body)?;
        info!(count = files.len(), "retrieved files");
        Ok(files)
    }

    /// Fetch a single file by id.
    pub fn get_file(&self, id: &str) -> Result<File> {
        validation::require_non_empty("id", id)?;
        let raw = self.transport().get(&format!("/v1/files/{}", id))?;
        let body = self.ensure_success(raw)?;
        decode::from_value("file", body)
    }

    /// Delete a file by id.
    pub fn delete_file(&self, id: &str) -> Result<ValidationErrorItem> {
        validation::require_non_empty("id", id)?;
        info!(file = id, "deleting file");
        let raw = self.transport().delete(&format!("/v1/files/{}", id))?;
        let item = self.mutation_outcome(raw, "delete result")?;
        if !item.success {
            warn!(
                file = id,
                message = item.message.as_deref().unwrap_or(""),
                "file delete failed"
            );
        }
        Ok(item)
    }

    /// Replace the extracted content of a file. An empty string is a valid
    /// replacement.
    pub fn update_file_content(&self, id: &str, content: &str) -> Result<ValidationErrorItem> {
        validation::require_non_empty("id", id)?;
        info!(file = id, "updating file content");
        let raw = self.transport().post_json(
            &format!("/v1/files/{}/data/content/update", id),
            &json!({ "content": content }),
        )?;
        let item = self.mutation_outcome(raw, "update result")?;
        if !item.success {
            warn!(
                file = id,
                message = item.message.as_deref().unwrap_or(""),
                "file content update failed"
            );
        }
        Ok(item)
    }

    /// Upload a local file.
    ///
    /// The file handle is held only for the duration of the request. On
    /// HTTP 200 the decoded record's `success` flag is forced `true` since
    /// the server does not always include one.
    pub fn upload_file(&self, path: impl AsRef<Path>) -> Result<ApiOutcome<File>> {
        let path = path.as_ref();
        validation::require_local_file("file", path)?;
        info!(path = %path.display(), "uploading file");

        let form = Form::new().file("file", path)?;
        let raw = self.transport().post_multipart("/v1/files/", form)?;

        if raw.status == StatusCode::OK {
            let mut file: File = decode::from_value("file", raw.body)?;
            file.success = true;
            info!(file = %file.id, "uploaded file");
            Ok(ApiOutcome::Success(file))
        } else {
            let mut item: ValidationErrorItem = decode::from_value("validation error", raw.body)?;
            item.mark_failure();
            warn!(
                path = %path.display(),
                message = item.message.as_deref().unwrap_or(""),
                "file upload failed"
            );
            Ok(ApiOutcome::Failure(item))
        }
    }
}
