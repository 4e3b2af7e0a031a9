//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.
//! Every error body has the shape `{"error": "<message>"}`.

use crate::repositories::RepositoryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use patient_records_shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

pub const DB_CONNECTION_MESSAGE: &str = "Error de conexión a la base de datos";
pub const INTERNAL_MESSAGE: &str = "Error interno del servidor";
pub const NOT_FOUND_ROUTE_MESSAGE: &str = "Endpoint no encontrado";

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate resource, reported as 400 to match the public contract
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Repository failure; `context` is the only text the client sees
    #[error("Database error: {context}")]
    Database {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },

    /// Non-database failure inside an endpoint, reported with its generic message
    #[error("Internal error: {context}")]
    Internal {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Wrap a repository failure with the generic message for this endpoint
    pub fn database(context: &'static str) -> impl FnOnce(RepositoryError) -> ApiError {
        move |source| ApiError::Database { context, source }
    }

    /// Wrap an infrastructure failure with the generic message for this endpoint
    pub fn internal(context: &'static str) -> impl FnOnce(anyhow::Error) -> ApiError {
        move |source| ApiError::Internal { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database { context, source } => {
                error!(context, "Database error: {:?}", source);
                let message = if source.is_connection() {
                    DB_CONNECTION_MESSAGE
                } else {
                    context
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            ApiError::Internal { context, source } => {
                error!(context, "Internal error: {:?}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
