/******************************************************************************
   Author: KnuVerse
   Email: support@knuverse.com
   Date: 16/10/26
******************************************************************************/

//! Error types for the KnuVerse client
//!
//! Every failure surfaces as an [`AppError`]. HTTP failures are mapped from the
//! response status by [`AppError::from_status`]; the raw response text is kept
//! as the error message so callers can inspect what the server said.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// HTTP 400
    BadRequest(String),
    /// HTTP 401
    Unauthorized(String),
    /// HTTP 403
    Forbidden(String),
    /// HTTP 404, also used when a client name does not resolve to an id
    NotFound(String),
    /// HTTP 429
    RateLimited(String),
    /// Any 5xx status, or a 4xx status without a dedicated variant
    InternalServerError(String),
    /// A non-error status that differs from the one the operation expects
    UnexpectedResponseCode(StatusCode, String),
    /// Invalid caller input, rejected before any request is sent
    Request(String),
    /// Transport-level failure (connection, TLS, timeout)
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// Local I/O failure, e.g. reading an audio file for upload
    Io(std::io::Error),
    /// The response was accepted but lacked an expected field or header
    Deserialization(String),
}

impl AppError {
    /// Maps a status code that did not match the expected one to an error kind
    ///
    /// # Arguments
    /// * `status` - Status code returned by the server
    /// * `text` - Raw response body, kept as the error message
    pub fn from_status(status: StatusCode, text: String) -> Self {
        match status.as_u16() {
            code if code < 400 => AppError::UnexpectedResponseCode(status, text),
            400 => AppError::BadRequest(text),
            401 => AppError::Unauthorized(text),
            403 => AppError::Forbidden(text),
            404 => AppError::NotFound(text),
            429 => AppError::RateLimited(text),
            _ => AppError::InternalServerError(text),
        }
    }

    /// Returns `true` for errors that came from an HTTP status of 400 or above
    #[must_use]
    pub fn is_http_error(&self) -> bool {
        matches!(
            self,
            AppError::BadRequest(_)
                | AppError::Unauthorized(_)
                | AppError::Forbidden(_)
                | AppError::NotFound(_)
                | AppError::RateLimited(_)
                | AppError::InternalServerError(_)
        )
    }

    /// Status code associated with this error, when it has a fixed one
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            AppError::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            AppError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            AppError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            AppError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            AppError::RateLimited(_) => Some(StatusCode::TOO_MANY_REQUESTS),
            AppError::UnexpectedResponseCode(status, _) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "unauthorized: {msg}"),
            AppError::Forbidden(msg) => write!(f, "forbidden: {msg}"),
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
            AppError::RateLimited(msg) => write!(f, "rate limited: {msg}"),
            AppError::InternalServerError(msg) => write!(f, "internal server error: {msg}"),
            AppError::UnexpectedResponseCode(status, msg) => {
                write!(f, "unexpected response code {status}: {msg}")
            }
            AppError::Request(msg) => write!(f, "invalid request: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
