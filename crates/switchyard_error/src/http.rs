//! HTTP error types.

use derive_more::{Display, Error};

/// Specific HTTP failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum HttpErrorKind {
    /// The remote service answered with a non-success status.
    #[display("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, verbatim
        body: String,
    },
    /// The request never produced a response (connect failure, timeout).
    #[display("Transport failure: {_0}")]
    Transport(String),
    /// The response body could not be decoded.
    #[display("Response decoding failed: {_0}")]
    Decode(String),
}

/// HTTP error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// The specific error kind.
    pub kind: HttpErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl HttpError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Non-success status with the response body.
    #[track_caller]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Status {
            status,
            body: body.into(),
        })
    }

    /// Transport-level failure.
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Transport(message.into()))
    }

    /// Body decoding failure.
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::Decode(message.into()))
    }

    /// Returns the HTTP status code when the failure came from the remote service.
    pub fn status_code(&self) -> Option<u16> {
        match &self.kind {
            HttpErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
