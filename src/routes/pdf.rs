//! PDF API endpoints
//!
//! - POST /decrypt-pdf - remove password protection, return content as base64
//! - POST /check-encryption - report encryption status without a password

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart},
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::pdf;

/// Response for a decryption request
#[derive(Serialize)]
pub struct DecryptResponse {
    pub success: bool,
    pub decrypted_base64: String,
    pub page_count: usize,
    /// Byte length of the content carried in `decrypted_base64`.
    pub file_size: usize,
    /// Byte length of the upload, reported only when protection was removed
    /// and the content was therefore re-serialized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_file_size: Option<usize>,
    pub was_encrypted: bool,
    pub message: String,
}

/// Response for an encryption check
#[derive(Serialize)]
pub struct CheckEncryptionResponse {
    pub is_encrypted: bool,
    pub page_count: Option<usize>,
    pub file_size: usize,
    pub filename: String,
}

/// An uploaded document drained from a multipart form
struct Upload {
    filename: String,
    data: Bytes,
    password: Option<String>,
}

/// Create the PDF router
pub fn router(max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/decrypt-pdf", post(decrypt_pdf))
        .route("/check-encryption", post(check_encryption))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /decrypt-pdf
///
/// Remove password protection from an uploaded PDF and return the decrypted
/// content as base64. Already-unencrypted uploads are echoed back untouched
/// so the output stays byte-identical to the input.
async fn decrypt_pdf(multipart: Multipart) -> Result<Json<DecryptResponse>> {
    let upload = read_upload(multipart).await?;
    let password = upload.password.unwrap_or_default();

    tracing::info!(
        filename = %upload.filename,
        size = upload.data.len(),
        password_provided = !password.is_empty(),
        "Received PDF decryption request"
    );

    let unlocked = pdf::decrypt(&upload.data, &password)?;

    let message = if unlocked.was_encrypted {
        tracing::info!(
            filename = %upload.filename,
            original_size = upload.data.len(),
            decrypted_size = unlocked.bytes.len(),
            pages = unlocked.page_count,
            "PDF decrypted successfully"
        );
        "PDF decrypted successfully"
    } else {
        tracing::info!(
            filename = %upload.filename,
            "PDF is not encrypted, returning original content"
        );
        "PDF was not encrypted"
    };

    Ok(Json(DecryptResponse {
        success: true,
        decrypted_base64: BASE64.encode(&unlocked.bytes),
        page_count: unlocked.page_count,
        file_size: unlocked.bytes.len(),
        original_file_size: unlocked.was_encrypted.then(|| upload.data.len()),
        was_encrypted: unlocked.was_encrypted,
        message: message.to_string(),
    }))
}

/// POST /check-encryption
///
/// Report whether an uploaded PDF is password-protected, without attempting
/// to decrypt it. Page count is null for locked documents.
async fn check_encryption(multipart: Multipart) -> Result<Json<CheckEncryptionResponse>> {
    let upload = read_upload(multipart).await?;

    tracing::info!(
        filename = %upload.filename,
        size = upload.data.len(),
        "Checking encryption status"
    );

    let report = pdf::inspect(&upload.data)?;

    tracing::info!(
        filename = %upload.filename,
        is_encrypted = report.encrypted,
        "Encryption check complete"
    );

    Ok(Json(CheckEncryptionResponse {
        is_encrypted: report.encrypted,
        page_count: report.page_count,
        file_size: upload.data.len(),
        filename: upload.filename,
    }))
}

/// Drain a multipart form, collecting the uploaded file and the optional
/// password field.
async fn read_upload(mut multipart: Multipart) -> Result<Upload> {
    let mut filename = None;
    let mut data = None;
    let mut password = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::UnreadableUpload(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" | "pdf" => {
                filename = field.file_name().map(|s| s.to_string());
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::UnreadableUpload(e.to_string()))?,
                );
            }
            "password" => {
                password = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::UnreadableUpload(e.to_string()))?,
                );
            }
            other => {
                tracing::debug!(field = %other, "Ignoring unknown multipart field");
            }
        }
    }

    let data = data.ok_or(AppError::MissingField("file"))?;

    Ok(Upload {
        filename: filename.unwrap_or_else(|| "unknown.pdf".to_string()),
        data,
        password,
    })
}
