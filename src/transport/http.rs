use std::time::Duration;

use reqwest::blocking::multipart::Form;
use reqwest::blocking::RequestBuilder;
use reqwest::header::ACCEPT;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;

/// Blocking HTTP transport: owns the connection configuration and issues one
/// request per call. Responses are returned raw so the caller can apply the
/// per-operation success/error decode rules.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

/// Status and JSON body of a completed exchange, before typed decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.execute(self.request(Method::GET, path))
    }

    pub fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<RawResponse, TransportError> {
        self.execute(self.request(Method::POST, path).json(body))
    }

    pub fn delete(&self, path: &str) -> Result<RawResponse, TransportError> {
        self.execute(self.request(Method::DELETE, path))
    }

    pub fn post_multipart(&self, path: &str, form: Form) -> Result<RawResponse, TransportError> {
        self.execute(self.request(Method::POST, path).multipart(form))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
    }

    fn execute(&self, request: RequestBuilder) -> Result<RawResponse, TransportError> {
        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;

        // Some endpoints answer 200 with an empty body; treat that as an
        // empty object so the decode layer sees a uniform shape.
        let body = if text.trim().is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(&text).map_err(|_| TransportError::UnexpectedBody {
                status: status.as_u16(),
                snippet: snippet(&text),
            })?
        };

        Ok(RawResponse { status, body })
    }
}

const SNIPPET_MAX: usize = 200;

fn snippet(text: &str) -> String {
    let mut s: String = text.chars().take(SNIPPET_MAX).collect();
    if text.chars().count() > SNIPPET_MAX {
        s.push_str("...");
    }
    s
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("unexpected response body (HTTP {status}): {snippet}")]
    UnexpectedBody { status: u16, snippet: String },
}
