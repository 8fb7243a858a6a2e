//! The single recovery boundary between storage faults and HTTP responses.

use crate::domain::validate::ValidationError;
use crate::storage::DatabaseError;
use crate::transport::http::types::ApiResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// `context` reads as the tail of "Something went wrong while ...".
    #[error("storage failure while {context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: DatabaseError,
    },

    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.0)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::Validation(format!("Invalid JSON body: {}", err.body_text()))
    }
}

/// Attaches the operation being performed to a storage fault.
pub trait StorageContext<T> {
    fn while_(self, context: &'static str) -> Result<T, ApiError>;
}

impl<T> StorageContext<T> for Result<T, DatabaseError> {
    fn while_(self, context: &'static str) -> Result<T, ApiError> {
        self.map_err(|source| ApiError::Storage { context, source })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Storage { context, source } => {
                tracing::error!(error = %source, "error while {}", context);
                format!("Something went wrong while {}. Try again later!", context)
            }
            ApiError::Encode(e) => {
                tracing::error!(error = %e, "failed to encode response body");
                "Something went wrong. Try again later!".to_string()
            }
        };
        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
