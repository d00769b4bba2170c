//! Typed client for the remote API.
//!
//! Developer-friendly goal: keep the public surface small and predictable —
//! one method per remote operation, each validating its inputs before the
//! network call. Implementation details are split into submodules under
//! `src/client/`.

pub mod core;

mod audio;
mod chat;
mod files;
mod knowledge;
mod models;
mod users;
mod validation;

pub use self::core::{Client, ClientBuilder};
