//! Error types for the API client.

use std::fmt;

use crate::model::Frozen;
use crate::types::ErrorMessage;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, timeout, bad URL).
    #[error("Request failed")]
    RequestFailed,
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The API answered with a success status but the body did not match the record schema.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
}

/// A JSON value could not be decoded into a record.
///
/// `field` is the path from the top-level record (`experiment_items[1].trace_id`);
/// `record` is the innermost record type that declares it.
#[derive(thiserror::Error, Debug)]
pub enum SchemaValidationError {
    #[error("{record}: missing required field `{field}`")]
    MissingField { record: &'static str, field: String },

    #[error("{record}: field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        record: &'static str,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{record}: field `{field}` has unknown value {raw:?} (allowed: {allowed:?})")]
    InvalidEnum {
        record: &'static str,
        field: String,
        raw: String,
        allowed: &'static [&'static str],
    },

    #[error("{record}: field `{field}` has malformed date-time {raw:?}")]
    InvalidDateTime {
        record: &'static str,
        field: String,
        raw: String,
    },

    #[error("{record}: expected a JSON object at `{path}`, found {found}")]
    NotAnObject {
        record: &'static str,
        path: String,
        found: &'static str,
    },

    /// The validated value could not be mapped onto the Rust type for `record`.
    #[error("{record}: {message}")]
    Incompatible { record: &'static str, message: String },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaValidationError {
    /// Path of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::InvalidEnum { field, .. }
            | Self::InvalidDateTime { field, .. } => Some(field.as_str()),
            Self::NotAnObject { path, .. } if !path.is_empty() => Some(path.as_str()),
            _ => None,
        }
    }

    /// Record type the error was raised for, when known.
    pub fn record(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { record, .. }
            | Self::TypeMismatch { record, .. }
            | Self::InvalidEnum { record, .. }
            | Self::InvalidDateTime { record, .. }
            | Self::NotAnObject { record, .. }
            | Self::Incompatible { record, .. } => Some(*record),
            Self::Json(_) => None,
        }
    }
}

/// A field-name based mutation was attempted on a finalized record.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{record} is immutable: cannot assign field `{field}`")]
pub struct ImmutabilityViolationError {
    pub record: &'static str,
    pub field: String,
}

/// Which classified failure an [`ApiError`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    UnprocessableEntity,
    TooManyRequests,
    NotImplemented,
    /// Any 5xx without a dedicated variant.
    Server,
    /// A status outside the fixed mapping.
    UnknownStatus,
    /// A mapped status whose body was not an `ErrorMessage`.
    Undecodable,
}

impl ApiErrorKind {
    /// The status code this variant is bound to, if it is bound to exactly one.
    pub fn status_code(self) -> Option<u16> {
        match self {
            ApiErrorKind::BadRequest => Some(400),
            ApiErrorKind::Unauthorized => Some(401),
            ApiErrorKind::PaymentRequired => Some(402),
            ApiErrorKind::Forbidden => Some(403),
            ApiErrorKind::NotFound => Some(404),
            ApiErrorKind::MethodNotAllowed => Some(405),
            ApiErrorKind::Conflict => Some(409),
            ApiErrorKind::UnprocessableEntity => Some(422),
            ApiErrorKind::TooManyRequests => Some(429),
            ApiErrorKind::NotImplemented => Some(501),
            ApiErrorKind::Server
            | ApiErrorKind::UnknownStatus
            | ApiErrorKind::Undecodable => None,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ApiErrorKind::BadRequest => "bad request",
                ApiErrorKind::Unauthorized => "unauthorized",
                ApiErrorKind::PaymentRequired => "payment required",
                ApiErrorKind::Forbidden => "forbidden",
                ApiErrorKind::NotFound => "not found",
                ApiErrorKind::MethodNotAllowed => "method not allowed",
                ApiErrorKind::Conflict => "conflict",
                ApiErrorKind::UnprocessableEntity => "unprocessable entity",
                ApiErrorKind::TooManyRequests => "too many requests",
                ApiErrorKind::NotImplemented => "not implemented",
                ApiErrorKind::Server => "server error",
                ApiErrorKind::UnknownStatus => "unknown status",
                ApiErrorKind::Undecodable => "undecodable error body",
            }
        )
    }
}

/// Body attached to an [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// The body decoded as an [`ErrorMessage`].
    Message(Frozen<ErrorMessage>),
    /// The body as received. `decode_failed` is set when a decode was
    /// attempted and rejected; it is false when none was attempted.
    Raw { text: String, decode_failed: bool },
}

impl ErrorBody {
    /// Human-readable message, if the body decoded.
    pub fn message(&self) -> Option<&str> {
        match self {
            ErrorBody::Message(message) => Some(message.message.as_str()),
            ErrorBody::Raw { .. } => None,
        }
    }
}

/// A classified non-success API response.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("API returned {kind} (HTTP {status})")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub body: ErrorBody,
}

impl ApiError {
    /// Message from the decoded body, if any.
    pub fn message(&self) -> Option<&str> {
        self.body.message()
    }

    /// True when the body was expected to be an `ErrorMessage` but was not.
    pub fn body_decode_failed(&self) -> bool {
        matches!(
            self.body,
            ErrorBody::Raw {
                decode_failed: true,
                ..
            }
        )
    }
}
