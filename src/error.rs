use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::PersonDecodeError;

/// ApiError
///
/// The failure modes a handler can surface to the client. Every variant is a
/// client-input problem, so the whole enum maps to a single 400 response with
/// a structured JSON body; genuinely unexpected failures are not modeled here
/// (they are caught by the panic layer and answered with a bare 500).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required query parameter was absent from the request.
    #[error("missing required query parameter `{0}`")]
    MissingParam(&'static str),
    /// A query parameter was present but failed type conversion.
    #[error("query parameter `{0}` is not valid: {1}")]
    InvalidParam(&'static str, String),
    /// A predicate check on an otherwise well-typed value did not hold.
    /// Renders as the check's own message, e.g. "'to' has to be after 'from'".
    #[error("{0}")]
    FailedCheck(&'static str),
    /// The request body could not be parsed as JSON at all.
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),
    /// The request body parsed as JSON but did not decode as a person.
    #[error(transparent)]
    Decode(#[from] PersonDecodeError),
}

impl ApiError {
    /// Short machine-readable code carried in the `error` field of the body.
    fn code(&self) -> &'static str {
        match self {
            ApiError::MissingParam(_) => "missing_parameter",
            ApiError::InvalidParam(..) => "invalid_parameter",
            ApiError::FailedCheck(_) => "failed_check",
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::Decode(_) => "invalid_person",
        }
    }
}

/// ErrorBody
///
/// The JSON envelope every [`ApiError`] response carries: a stable machine
/// code plus a human-readable message naming the offending parameter, field,
/// or check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. "missing_parameter".
    pub error: String,
    /// Human-readable description of what failed.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
