//! Mapping of service outcomes onto HTTP error responses.

use crate::task::services::TaskServiceError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers.
///
/// Only [`ApiError::BadRequest`] carries a body; not-found and internal
/// failures respond with an empty body so no internal detail leaks.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The addressed task does not exist.
    #[error("not found")]
    NotFound,
    /// An unexpected failure occurred while serving the request.
    #[error("internal server error")]
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(reason) => Self::BadRequest(reason.to_string()),
            TaskServiceError::NotFound(_) => Self::NotFound,
            TaskServiceError::Repository(source) => {
                error!(error = %source, "task repository failure");
                Self::Internal
            }
        }
    }
}

/// Message for a JSON body that parsed but does not fit the expected shape.
const INVALID_BODY_MESSAGE: &str =
    "request body has missing, mistyped, or unknown field values";
/// Message for a body that is not syntactically valid JSON.
const MALFORMED_JSON_MESSAGE: &str = "request body is not valid JSON";
/// Message for a body sent without a JSON content type.
const MISSING_CONTENT_TYPE_MESSAGE: &str =
    "expected request with `Content-Type: application/json`";
/// Message for a non-integer task identifier.
const INVALID_ID_MESSAGE: &str = "task id must be an integer";
/// Message for an unparseable query string.
const INVALID_QUERY_MESSAGE: &str = "invalid query string";

// Rejection text from axum and serde can include parser positions, so each
// kind of rejection gets a fixed message instead.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(_) => INVALID_BODY_MESSAGE,
            JsonRejection::JsonSyntaxError(_) => MALFORMED_JSON_MESSAGE,
            JsonRejection::MissingJsonContentType(_) => MISSING_CONTENT_TYPE_MESSAGE,
            _ => "failed to read request body",
        };
        Self::BadRequest(message.to_owned())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        Self::BadRequest(INVALID_ID_MESSAGE.to_owned())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(_: QueryRejection) -> Self {
        Self::BadRequest(INVALID_QUERY_MESSAGE.to_owned())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
