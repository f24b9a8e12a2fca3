//! Password removal

use lopdf::Document;

use super::types::{PdfError, UnlockedPdf};

/// Open the document with the supplied password and strip its encryption.
///
/// Input that never carried an encryption dictionary is passed through
/// untouched, so the output stays byte-identical to the upload;
/// re-serialization only happens when protection was actually removed.
pub fn decrypt(bytes: &[u8], password: &str) -> Result<UnlockedPdf, PdfError> {
    // Probe without a password first so never-encrypted input can be handed
    // back untouched. Protected files that refuse to open at all without
    // credentials fall through to the password path below.
    match Document::load_mem(bytes) {
        Ok(probe) if !probe.is_encrypted() && probe.encryption_state.is_none() => {
            return Ok(UnlockedPdf {
                page_count: probe.get_pages().len(),
                bytes: bytes.to_vec(),
                was_encrypted: false,
            });
        }
        Ok(_) | Err(lopdf::Error::InvalidPassword) => {}
        Err(err) => return Err(PdfError::Malformed(err.to_string())),
    }

    // The file carries an encryption dictionary. Open with the password so
    // every string and stream is decrypted.
    let mut doc = match Document::load_mem_with_password(bytes, password) {
        Ok(doc) => doc,
        Err(lopdf::Error::InvalidPassword) => return Err(PdfError::InvalidPassword),
        // The probe established this is a PDF, so whatever failed here is a
        // decryption defect (e.g. an unsupported scheme), not bad input.
        Err(err) => return Err(PdfError::Unsupported(err.to_string())),
    };

    let page_count = doc.get_pages().len();

    // Saving a document that still carries an encryption state writes it
    // back encrypted. Drop the state and the trailer entry so the output is
    // serialized in the clear.
    doc.encryption_state = None;
    doc.trailer.remove(b"Encrypt");

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|err| PdfError::Unsupported(err.to_string()))?;

    Ok(UnlockedPdf {
        bytes: out,
        page_count,
        was_encrypted: true,
    })
}
