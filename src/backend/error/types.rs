/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Unknown room id (404)
 * - Duplicate room id on create (400)
 * - Invalid request bodies (400, or the extractor's own 415/422)
 *
 * ## Storage Errors
 *
 * Storage errors come from the SQLite note store and its migrations and are
 * reported as 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
///
/// Each variant can be converted to an HTTP response with a status code and
/// a JSON body, see `conversion.rs`.
///
/// # Usage
///
/// ```rust
/// use roomnotes::backend::error::BackendError;
///
/// let err = BackendError::not_found("Note not found");
/// let err = BackendError::duplicate_room("k3j9x0ab");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code, e.g. a rejected request body
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The requested note does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// A note already exists for this room id
    #[error("Note with this room ID already exists")]
    DuplicateRoom {
        /// The conflicting room id
        room_id: String,
    },

    /// Shared error (validation, serialization, protocol)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Note store failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// Invalid server configuration
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a duplicate-room error
    pub fn duplicate_room(room_id: impl Into<String>) -> Self {
        Self::DuplicateRoom {
            room_id: room_id.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `NotFound` - 404 Not Found
    /// - `DuplicateRoom` - 400 Bad Request
    /// - `SharedError` - 400 for validation and protocol errors, 500 otherwise
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::DuplicateRoom { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::ProtocolError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::DatabaseError(_) | Self::MigrationError(_) | Self::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error message returned to clients
    ///
    /// Validation errors report only their message; storage errors are not
    /// echoed verbatim.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::DatabaseError(_) | Self::MigrationError(_) => "Database error".to_string(),
            other => other.to_string(),
        }
    }
}
