//! Blocking HTTP transport for the remote API.
//!
//! The transport knows nothing about entity schemas: it issues exactly one
//! request per call and hands back the raw status plus JSON body.

pub mod http;

pub use http::{HttpTransport, RawResponse, TransportError};
