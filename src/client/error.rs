//! Client Error Types

use thiserror::Error;

/// Errors that can occur when talking to the clinic backend
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Clinic backend unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClinicError {
    /// Classify a transport-level failure
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClinicError::Timeout
        } else if e.is_connect() {
            ClinicError::Unavailable
        } else {
            ClinicError::Request(e)
        }
    }
}

/// Result type for clinic operations
pub type ClinicResult<T> = Result<T, ClinicError>;
