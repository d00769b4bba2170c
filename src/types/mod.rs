//! Typed records exchanged with the remote API.
//!
//! Every record in this module follows the same decode contract (see
//! [`crate::decode`]): required fields are plain, optional fields are
//! `Option`, sequences default to empty, and keys the schema does not
//! recognize are captured in the record's `extra` map instead of being
//! dropped.

pub mod audio;
pub mod chat;
pub mod file;
pub mod knowledge;
pub mod model;
pub mod outcome;
pub mod user;

pub use audio::Transcription;
pub use chat::{ChatCompletion, ChatRequest, Choice, FileRef, Message};
pub use file::{File, FileData, FileMeta};
pub use knowledge::Knowledge;
pub use model::{
    AccessControl, Action, Architecture, Model, ModelInfo, ModelMeta, OllamaDetails,
    OllamaMetadata, OpenAiMetadata, Pipe, Pricing, TopProvider,
};
pub use outcome::{ApiOutcome, ValidationErrorItem};
pub use user::User;
