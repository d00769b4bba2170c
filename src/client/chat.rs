//! Chat completion operations.

use tracing::info;

use super::core::Client;
use super::validation;
use crate::decode;
use crate::types::{ChatCompletion, ChatRequest, Message};
use crate::Result;

impl Client {
    /// Request a completion for a single user prompt.
    pub fn chat_completion(&self, model_id: &str, prompt: &str) -> Result<ChatCompletion> {
        validation::require_non_empty("model_id", model_id)?;
        validation::require_non_empty("prompt", prompt)?;
        info!(model = model_id, "requesting chat completion");
        self.send_chat(ChatRequest::new(model_id, vec![Message::user(prompt)]))
    }

    /// Request a completion for a caller-built conversation.
    pub fn chat_completion_with_messages(
        &self,
        model_id: &str,
        messages: Vec<Message>,
    ) -> Result<ChatCompletion> {
        validation::require_non_empty("model_id", model_id)?;
        validation::require_messages(&messages)?;
        info!(
            model = model_id,
            count = messages.len(),
            "requesting chat completion with messages"
        );
        self.send_chat(ChatRequest::new(model_id, messages))
    }

    /// Request a completion grounded in a previously uploaded file.
    pub fn chat_with_file(
        &self,
        model_id: &str,
        prompt: &str,
        file_id: &str,
    ) -> Result<ChatCompletion> {
        validation::require_non_empty("model_id", model_id)?;
        validation::require_non_empty("prompt", prompt)?;
        validation::require_non_empty("file_id", file_id)?;
        info!(model = model_id, file = file_id, "requesting chat completion with file");
        self.send_chat(ChatRequest::new(model_id, vec![Message::user(prompt)]).with_file(file_id))
    }

    fn send_chat(&self, request: ChatRequest) -> Result<ChatCompletion> {
        let raw = self.transport().post_json("/chat/completions", &request)?;
        let body = self.ensure_success(raw)?;
        decode::from_value("chat completion", body)
    }
}
