//! # HTTP API Errors
//!
//! Every variant carries its own status code and body. The list endpoint
//! answers with JSON bodies; the lookup endpoint answers in plain text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // List endpoint (JSON)
    // ==================
    /// `table` parameter absent or empty
    #[error("Table name is required")]
    TableRequired,

    /// Statement failed against the named table
    #[error("No Such Class Exists")]
    NoSuchClass,

    /// A row did not decode into a record
    #[error("Failed to scan row")]
    ScanFailed,

    /// The blocking query task did not complete
    #[error("Internal error")]
    Internal,

    // ==================
    // Lookup endpoint (plain text)
    // ==================
    /// `table` or `secondary_id` absent or empty
    #[error("Both table and prn parameters are required")]
    LookupParamsRequired,

    /// No row matched the lookup value
    #[error("Not Found")]
    NotFound,

    /// Any other lookup failure; detail is logged, not returned
    #[error("Database error")]
    Database,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::TableRequired => StatusCode::BAD_REQUEST,
            ApiError::LookupParamsRequired => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::NoSuchClass => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ScanFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the body is a JSON object rather than plain text
    fn is_json(&self) -> bool {
        matches!(
            self,
            ApiError::TableRequired
                | ApiError::NoSuchClass
                | ApiError::ScanFailed
                | ApiError::Internal
        )
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_json() {
            (status, Json(ErrorResponse::from(&self))).into_response()
        } else {
            (status, self.to_string()).into_response()
        }
    }
}
