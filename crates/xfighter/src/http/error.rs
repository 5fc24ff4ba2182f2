/*
[INPUT]:  Error sources (transport, JSON body, service verdict, status code)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Xfighter client
#[derive(Error, Debug)]
pub enum XfighterError {
    /// Request never produced a response (DNS, TLS, refused, body read)
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Response body was not JSON
    #[error("invalid JSON in response body: {body}")]
    InvalidJson { body: String },

    /// Service answered `"ok": false`
    #[error("request error: {message}")]
    Request { status: StatusCode, message: String },

    /// Status code or payload shape the operation does not expect
    #[error("unhandled API response (status {status}): {body}")]
    UnhandledApiResponse { status: StatusCode, body: String },

    /// Order type outside limit, market, fill-or-kill, immediate-or-cancel
    #[error("invalid order type: {0:?}")]
    InvalidOrderType(String),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Plain tag for an [`XfighterError`], convenient for matching in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    InvalidJson,
    Request,
    UnhandledApiResponse,
    InvalidOrderType,
    Config,
}

impl XfighterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            XfighterError::Connection(_) => ErrorKind::Connection,
            XfighterError::InvalidJson { .. } => ErrorKind::InvalidJson,
            XfighterError::Request { .. } => ErrorKind::Request,
            XfighterError::UnhandledApiResponse { .. } => ErrorKind::UnhandledApiResponse,
            XfighterError::InvalidOrderType(_) => ErrorKind::InvalidOrderType,
            XfighterError::UrlParse(_) | XfighterError::Config(_) => ErrorKind::Config,
        }
    }

    /// Service-supplied message for `ok: false` responses
    pub fn service_message(&self) -> Option<&str> {
        match self {
            XfighterError::Request { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status when the error came from a received response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            XfighterError::Request { status, .. }
            | XfighterError::UnhandledApiResponse { status, .. } => Some(*status),
            XfighterError::Connection(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type alias for Xfighter operations
pub type Result<T> = std::result::Result<T, XfighterError>;
