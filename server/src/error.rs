//! Error types for the todo server.
//!
//! # Design
//! `StoreError` is what the store reports. `ApiError` is the only error a
//! handler returns; its `IntoResponse` impl is the one place errors become
//! wire responses. Not-found is a bare 404. A body that cannot be decoded
//! sets no status of its own, so it goes out as 500 with a
//! `{"message": ...}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo not found: {0}")]
    NotFound(String),

    /// The request body could not be decoded into the expected shape.
    #[error("{0}")]
    Decode(String),
}

/// JSON body of every error response except 404.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound(_) => status.into_response(),
            ApiError::Decode(message) => (status, Json(ErrorBody { message })).into_response(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;
