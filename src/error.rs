use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or argument name that caused the error (e.g., "model_id", "choices[0].message")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "argument_validator", "decoder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the client.
///
/// Remote business failures are not represented here: endpoints that answer
/// with a structured error body return a [`crate::types::ValidationErrorItem`]
/// (or [`crate::types::ApiOutcome::Failure`]) as a normal value instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {message}{}", format_context(.context))]
    InvalidArgument {
        message: String,
        context: ErrorContext,
    },

    #[error("Decode error: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new invalid-argument error with structured context
    pub fn invalid_argument_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidArgument {
            message: msg.into(),
            context,
        }
    }

    /// Create a new decode error with structured context
    pub fn decode_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Decode {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidArgument { context, .. } | Error::Decode { context, .. } => Some(context),
            _ => None,
        }
    }
}
