//! Mapping of non-success HTTP responses to [`ApiError`].

use crate::errors::{ApiError, ApiErrorKind, ErrorBody};
use crate::model::decode_str;
use crate::types::ErrorMessage;

/// Variant for `status` under the fixed mapping.
pub fn kind_for_status(status: u16) -> ApiErrorKind {
    match status {
        400 => ApiErrorKind::BadRequest,
        401 => ApiErrorKind::Unauthorized,
        402 => ApiErrorKind::PaymentRequired,
        403 => ApiErrorKind::Forbidden,
        404 => ApiErrorKind::NotFound,
        405 => ApiErrorKind::MethodNotAllowed,
        409 => ApiErrorKind::Conflict,
        422 => ApiErrorKind::UnprocessableEntity,
        429 => ApiErrorKind::TooManyRequests,
        501 => ApiErrorKind::NotImplemented,
        500..=599 => ApiErrorKind::Server,
        _ => ApiErrorKind::UnknownStatus,
    }
}

/// Classifies a response into exactly one [`ApiError`]. Never fails.
///
/// Mapped statuses get their body decoded as an [`ErrorMessage`]; if that
/// fails the result is [`ApiErrorKind::Undecodable`] with the raw text kept
/// and flagged. Unmapped statuses keep the raw body without attempting a
/// decode.
pub fn classify(status: u16, body: &str) -> ApiError {
    let kind = kind_for_status(status);
    if kind == ApiErrorKind::UnknownStatus {
        return ApiError {
            kind,
            status,
            body: ErrorBody::Raw {
                text: body.to_string(),
                decode_failed: false,
            },
        };
    }
    match decode_str::<ErrorMessage>(body) {
        Ok(message) => ApiError {
            kind,
            status,
            body: ErrorBody::Message(message),
        },
        Err(e) => {
            tracing::warn!("Error body for HTTP {} is not an ErrorMessage: {}", status, e);
            ApiError {
                kind: ApiErrorKind::Undecodable,
                status,
                body: ErrorBody::Raw {
                    text: body.to_string(),
                    decode_failed: true,
                },
            }
        }
    }
}
