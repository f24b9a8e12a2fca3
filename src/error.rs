//! Error types for the Candado server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pdf::PdfError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Missing multipart field: {0}")]
    MissingField(&'static str),

    #[error("Unreadable upload: {0}")]
    UnreadableUpload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PdfError> for AppError {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::Malformed(msg) => AppError::MalformedDocument(msg),
            PdfError::InvalidPassword => AppError::InvalidPassword,
            PdfError::Unsupported(msg) => AppError::Internal(msg),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::MalformedDocument(msg) => (
                StatusCode::BAD_REQUEST,
                "malformed_document",
                format!("Could not parse the uploaded file as a PDF: {}", msg),
            ),
            AppError::InvalidPassword => (
                StatusCode::BAD_REQUEST,
                "invalid_password",
                "Invalid password. Could not decrypt the PDF.".to_string(),
            ),
            AppError::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                "missing_field",
                format!("No '{}' field found in multipart upload", field),
            ),
            AppError::UnreadableUpload(msg) => (
                StatusCode::BAD_REQUEST,
                "unreadable_upload",
                format!("Failed to read upload: {}", msg),
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error during PDF processing: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
