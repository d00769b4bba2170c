//! Audio transcription operations.

use std::path::Path;

use reqwest::blocking::multipart::Form;
use tracing::info;

use super::core::Client;
use super::validation;
use crate::decode;
use crate::types::Transcription;
use crate::Result;

impl Client {
    /// Transcribe a local audio file.
    ///
    /// The file handle is held only for the duration of the request.
    pub fn transcribe_audio(&self, path: impl AsRef<Path>) -> Result<Transcription> {
        let path = path.as_ref();
        validation::require_local_file("audio file", path)?;
        info!(path = %path.display(), "transcribing audio file");

        let form = Form::new().file("file", path)?;
        let raw = self
            .transport()
            .post_multipart("/audio/api/v1/transcriptions", form)?;
        let body = self.ensure_success(raw)?;
        decode::from_value("transcription", body)
    }
}
