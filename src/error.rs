// Dispatch error types
use thiserror::Error;

use crate::auth::AuthError;
use crate::database::DatabaseError;
use crate::handlers::Response;

/// Failure inside the dispatch boundary, carrying only client-safe text.
///
/// Conversions from lower layers log the real cause and keep a generic
/// message, so nothing raised by a handler reaches the caller verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    // 401 Unauthorized
    #[error("{0}")]
    Unauthorized(String),

    // 404 Not Found
    #[error("not found")]
    NotFound,

    // 500 Internal Server Error
    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound => 404,
            ApiError::InternalServerError(_) => 500,
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(message) => Response::unauthorized(&message),
            ApiError::NotFound => Response::not_found(),
            ApiError::InternalServerError(message) => Response::internal_error(&message),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Unauthorized(err.message().to_string())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotConnected | DatabaseError::PoolExhausted | DatabaseError::Configuration(_) => {
                tracing::error!("Database unavailable: {}", err);
                ApiError::internal_server_error("Database temporarily unavailable")
            }
            _ => {
                // Log the real error but return generic message
                tracing::error!("Database error: {}", err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {}", err);
        ApiError::internal_server_error("Failed to format response")
    }
}
