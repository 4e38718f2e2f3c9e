//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the todo does not exist" from "the server rejected the request." When the
//! server explains itself with a `{"message": ...}` body the message is
//! surfaced as `Server`; any other unexpected status lands in `HttpError`
//! with the raw body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned an error status with a message envelope.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    /// The server returned an unexpected status without a message envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Status code carried by the error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Server { status, .. } | ApiError::HttpError { status, .. } => Some(*status),
            ApiError::DeserializationError(_) | ApiError::SerializationError(_) => None,
        }
    }
}
