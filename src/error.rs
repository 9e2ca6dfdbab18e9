//! Error codes and the JSON error body returned by HTTP routes.
//!
//! Every domain error enum implements [`ErrorCode`] so handlers can shape a
//! consistent `{ code, message, retryable }` reply without matching on
//! variants themselves.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Grepable error code plus retry hint, shared by all error enums.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// JSON body of a failed API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub retryable: bool,
}

/// An HTTP status paired with an [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    /// Build from a domain error, using its `Display` text as the message.
    pub fn from_error(status: StatusCode, err: &(impl ErrorCode + ?Sized)) -> Self {
        Self::with_message(status, err, err.to_string())
    }

    /// Build from a domain error but replace the message shown to the caller.
    pub fn with_message(status: StatusCode, err: &(impl ErrorCode + ?Sized), message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody { code: err.error_code(), message: message.into(), retryable: err.retryable() },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
