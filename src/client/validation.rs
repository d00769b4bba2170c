//! Argument validation: fail fast before any network call.

use std::path::Path;

use crate::types::Message;
use crate::{Error, ErrorContext, Result};

pub(crate) fn require_non_empty(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument_with_context(
            format!("{} cannot be empty", name),
            ErrorContext::new()
                .with_field_path(name)
                .with_source("argument_validator"),
        ));
    }
    Ok(())
}

pub(crate) fn require_messages(messages: &[Message]) -> Result<()> {
    if messages.is_empty() {
        return Err(Error::invalid_argument_with_context(
            "messages must be a non-empty list",
            ErrorContext::new()
                .with_field_path("messages")
                .with_source("argument_validator"),
        ));
    }
    Ok(())
}

pub(crate) fn require_local_file(name: &'static str, path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found: {}", name, path.display()),
        )));
    }
    Ok(())
}
