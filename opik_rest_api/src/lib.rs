//! Typed client core for the Opik REST API.
//!
//! JSON bodies are validated against static schemas and decoded into
//! immutable records ([`Frozen`]); non-success responses are classified
//! into [`ApiError`]. [`Client`] wires both around HTTP GETs.

mod classify;
mod client;
mod config;
mod errors;
mod model;
mod presence;
pub mod schema;
pub mod types;
pub use self::classify::{classify, kind_for_status};
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::errors::{
    ApiError, ApiErrorKind, Error, ErrorBody, ImmutabilityViolationError, SchemaValidationError,
};
pub use self::model::{decode, decode_str, Frozen, Model};
pub use self::presence::Presence;
