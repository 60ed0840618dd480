//! API Error Types
//!
//! Defines error types for the HTTP layer and implements conversion
//! to HTML responses with appropriate status codes.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::html::escape;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown page, action or form
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Multipart body could not be read
    #[error("Upload error: {message}")]
    Upload { status: StatusCode, message: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Upload {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Upload { status, .. } => (*status, "UPLOAD_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        };

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Predictraforge - {status}</title></head>
<body style="background:#020617; color:#fff; font-family:sans-serif; padding:40px;">
    <h1>{status}</h1>
    <p>{message}</p>
    <p style="color:#94a3b8; font-family:monospace;">{code} · request {request_id}</p>
    <p><a href="/" style="color:#22d3ee;">Back to dashboard</a></p>
</body>
</html>"#,
            message = escape(&self.to_string()),
        );

        (status, Html(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = ApiError::NotFound("page 'admin'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::Upload {
            status: StatusCode::BAD_REQUEST,
            message: "bad boundary".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let response = ApiError::from(io_err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
