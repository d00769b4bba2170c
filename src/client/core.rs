use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;
use url::Url;

use crate::decode;
use crate::transport::{HttpTransport, RawResponse, TransportError};
use crate::types::{ApiOutcome, ValidationErrorItem};
use crate::{Error, ErrorContext, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the remote API.
///
/// Holds only immutable configuration (base URL, bearer token, HTTP client),
/// so a single instance is safe to share across threads; each operation is
/// one independent request/response cycle.
#[derive(Debug)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    /// Create a client from a base URL and API key with default settings.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The normalized base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub(crate) fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Read endpoints: a non-success status has no recoverable payload and is
    /// surfaced as a transport failure.
    pub(crate) fn ensure_success(&self, raw: RawResponse) -> Result<Value> {
        if raw.status.is_success() {
            Ok(raw.body)
        } else {
            let detail = raw
                .body
                .get("detail")
                .and_then(|d| d.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| raw.body.to_string());
            Err(Error::Transport(TransportError::Status {
                status: raw.status.as_u16(),
                detail,
            }))
        }
    }

    /// Mutation endpoints: HTTP 200 means success (the flag is forced even
    /// when the body lacks one); any other status is a structured failure
    /// with `message` populated from the payload's `detail` field.
    pub(crate) fn mutation_outcome(
        &self,
        raw: RawResponse,
        what: &'static str,
    ) -> Result<ValidationErrorItem> {
        let mut item: ValidationErrorItem = decode::from_value(what, raw.body)?;
        if raw.status == StatusCode::OK {
            item.success = true;
        } else {
            item.mark_failure();
        }
        Ok(item)
    }

    /// Endpoints that answer either with the full record (HTTP 200) or a
    /// structured error body.
    pub(crate) fn record_outcome<T: DeserializeOwned>(
        &self,
        raw: RawResponse,
        what: &'static str,
    ) -> Result<ApiOutcome<T>> {
        if raw.status == StatusCode::OK {
            Ok(ApiOutcome::Success(decode::from_value(what, raw.body)?))
        } else {
            let mut item: ValidationErrorItem = decode::from_value("validation error", raw.body)?;
            item.mark_failure();
            Ok(ApiOutcome::Failure(item))
        }
    }
}

/// Builder for creating clients with custom configuration.
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Base URL of the server, e.g. `http://localhost:3000/api`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bearer token sent on every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Per-request timeout enforced by the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = self.base_url.unwrap_or_default();
        let api_key = self.api_key.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(Error::invalid_argument_with_context(
                "base_url cannot be empty",
                ErrorContext::new().with_field_path("base_url"),
            ));
        }
        if api_key.trim().is_empty() {
            return Err(Error::invalid_argument_with_context(
                "api_key cannot be empty",
                ErrorContext::new().with_field_path("api_key"),
            ));
        }

        Url::parse(&base_url).map_err(|e| {
            Error::invalid_argument_with_context(
                format!("base_url is not a valid URL: {}", e),
                ErrorContext::new().with_field_path("base_url"),
            )
        })?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let transport = HttpTransport::new(base_url, api_key, self.timeout)?;
        info!(base_url = %transport.base_url(), "initialized client");
        Ok(Client { transport })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = Client::new("http://test.example/", "test-key").unwrap();
        assert_eq!(client.base_url(), "http://test.example");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = Client::new("", "test-key").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.context().unwrap().field_path.as_deref(), Some("base_url"));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = Client::new("http://test.example", "").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let err = Client::new("not a url", "test-key").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }
}
