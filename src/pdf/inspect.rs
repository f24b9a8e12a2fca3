//! Encryption-status inspection

use lopdf::Document;

use super::types::{InspectionReport, PdfError};

/// Open the document without a password and report its encryption status.
///
/// "Encrypted" here means the content cannot be read without a password:
/// documents protected by a real user password parse, but their objects stay
/// locked and `is_encrypted` remains set after load. Documents encrypted
/// with the empty password unlock during load and are reported as
/// unprotected.
pub fn inspect(bytes: &[u8]) -> Result<InspectionReport, PdfError> {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        // Some protected files refuse to open at all without credentials;
        // that is still "encrypted", not "malformed".
        Err(lopdf::Error::InvalidPassword) => {
            return Ok(InspectionReport {
                encrypted: true,
                page_count: None,
            })
        }
        Err(err) => return Err(PdfError::Malformed(err.to_string())),
    };

    if doc.is_encrypted() {
        // Page count is unavailable: walking the page tree would need the
        // decryption key we do not have.
        return Ok(InspectionReport {
            encrypted: true,
            page_count: None,
        });
    }

    Ok(InspectionReport {
        encrypted: false,
        page_count: Some(doc.get_pages().len()),
    })
}
