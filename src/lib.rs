//! # openwebui-client
//!
//! Typed Rust client for the Open WebUI HTTP API: models, chat completions,
//! file storage, knowledge bases, users and audio transcription.
//!
//! ## Overview
//!
//! The crate does one thing: build an HTTP request from typed inputs, call
//! the remote endpoint, and decode the JSON response into typed records,
//! surfacing errors as typed failures. The remote schema evolves
//! independently of this client, so every record keeps the keys it does not
//! recognize in an `extra` map instead of dropping them (see [`decode`]).
//!
//! ## Design
//!
//! - **Permissive in, lossless out**: unknown fields never fail a decode and
//!   survive re-encoding; missing optional fields read as absent.
//! - **Success/error duality**: endpoints that answer business failures with
//!   a structured body return [`types::ValidationErrorItem`] (or
//!   [`types::ApiOutcome::Failure`]) as a normal value. Only invalid
//!   arguments and transport failures raise [`Error`].
//! - **Blocking and stateless**: one synchronous request per operation, no
//!   retries, no caches; the client itself is just immutable configuration.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openwebui_client::{Client, Result};
//!
//! fn main() -> Result<()> {
//!     let client = Client::new("http://localhost:3000/api", "sk-...")?;
//!
//!     for model in client.list_models()? {
//!         println!("{}", model.id);
//!     }
//!
//!     let completion = client.chat_completion("llama3.2:latest", "Hello!")?;
//!     if let Some(content) = completion.content() {
//!         println!("{}", content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The [`Client`] and one method per remote operation |
//! | [`types`] | Typed records exchanged with the API |
//! | [`decode`] | Generic typed decoding of raw JSON payloads |
//! | [`transport`] | Blocking HTTP transport |
//! | [`error`] | Error types |

pub mod client;
pub mod decode;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{Client, ClientBuilder};
pub use types::{
    ApiOutcome, ChatCompletion, File, Knowledge, Message, Model, Transcription, User,
    ValidationErrorItem,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
