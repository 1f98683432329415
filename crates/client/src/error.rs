//! Record service error types.

use thiserror::Error;

/// Result type for record service calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the remote record service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("form rejected: {0}")]
    Form(#[from] scp_core::FormError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl ClientError {
    /// True when the request never got an HTTP answer (DNS, refused connection, timeout).
    pub fn is_connection(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_connect() || e.is_timeout())
    }
}
