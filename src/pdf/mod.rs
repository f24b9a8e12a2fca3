//! PDF inspection and password removal
//!
//! Thin wrapper around lopdf: open with or without a password, report
//! encryption status, strip the encryption dictionary, re-serialize.
//! All PDF-format knowledge lives in lopdf; this module only translates
//! its failure modes into the application's error taxonomy.

mod decrypt;
mod inspect;
mod types;

pub use decrypt::decrypt;
pub use inspect::inspect;
pub use types::{InspectionReport, PdfError, UnlockedPdf};

#[cfg(test)]
mod tests {
    use lopdf::{dictionary, Document, Object, Stream};

    use super::*;

    /// Build a minimal one-page document in memory.
    fn sample_pdf() -> Document {
        let mut doc = Document::with_version("1.5");

        // Encryption requires a file ID in the trailer.
        doc.trailer.set(
            "ID",
            Object::Array(vec![
                Object::String(vec![1u8; 16], lopdf::StringFormat::Literal),
                Object::String(vec![2u8; 16], lopdf::StringFormat::Literal),
            ]),
        );

        let pages_id = doc.new_object_id();
        let page_id = doc.new_object_id();
        let content_id = doc.new_object_id();

        let catalog_id = doc.add_object(lopdf::dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", Object::Reference(catalog_id));

        doc.objects.insert(
            pages_id,
            Object::Dictionary(lopdf::dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );

        doc.objects.insert(
            page_id,
            Object::Dictionary(lopdf::dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
                "Contents" => Object::Reference(content_id),
            }),
        );

        let content = b"BT\n/F1 12 Tf\n100 700 Td\n(Locked away) Tj\nET\n";
        doc.objects.insert(
            content_id,
            Object::Stream(Stream::new(lopdf::dictionary! {}, content.to_vec())),
        );

        doc
    }

    fn to_bytes(doc: &mut Document) -> Vec<u8> {
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    fn plain_pdf_bytes() -> Vec<u8> {
        to_bytes(&mut sample_pdf())
    }

    fn encrypted_pdf_bytes(user_password: &str) -> Vec<u8> {
        let mut doc = sample_pdf();
        let version = lopdf::EncryptionVersion::V2 {
            document: &doc,
            owner_password: "owner-secret",
            user_password,
            key_length: 128,
            permissions: lopdf::Permissions::all(),
        };
        let state = lopdf::EncryptionState::try_from(version).unwrap();
        doc.encrypt(&state).unwrap();
        to_bytes(&mut doc)
    }

    #[test]
    fn inspect_reports_unencrypted_with_page_count() {
        let report = inspect(&plain_pdf_bytes()).unwrap();
        assert_eq!(
            report,
            InspectionReport {
                encrypted: false,
                page_count: Some(1),
            }
        );
    }

    #[test]
    fn inspect_reports_locked_document_without_page_count() {
        let report = inspect(&encrypted_pdf_bytes("secret123")).unwrap();
        assert!(report.encrypted);
        assert_eq!(report.page_count, None);
    }

    #[test]
    fn inspect_treats_empty_password_encryption_as_unprotected() {
        // An empty user password unlocks on open; nothing is required from
        // the caller, so the document does not count as password-protected.
        let report = inspect(&encrypted_pdf_bytes("")).unwrap();
        assert!(!report.encrypted);
        assert_eq!(report.page_count, Some(1));
    }

    #[test]
    fn inspect_rejects_garbage() {
        let err = inspect(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Malformed(_)));
    }

    #[test]
    fn decrypt_passes_unencrypted_input_through_unchanged() {
        let original = plain_pdf_bytes();
        let unlocked = decrypt(&original, "ignored").unwrap();

        assert!(!unlocked.was_encrypted);
        assert_eq!(unlocked.page_count, 1);
        assert_eq!(unlocked.bytes, original);
    }

    #[test]
    fn decrypt_strips_encryption_with_correct_password() {
        let encrypted = encrypted_pdf_bytes("secret123");
        let unlocked = decrypt(&encrypted, "secret123").unwrap();

        assert!(unlocked.was_encrypted);
        assert_eq!(unlocked.page_count, 1);

        // The output must open without any password and carry no trace of
        // the encryption dictionary.
        let reopened = Document::load_mem(&unlocked.bytes).unwrap();
        assert!(!reopened.is_encrypted());
        assert!(reopened.encryption_state.is_none());
        assert!(reopened.trailer.get(b"Encrypt").is_err());
        assert_eq!(reopened.get_pages().len(), 1);
    }

    #[test]
    fn decrypt_strips_empty_password_encryption() {
        let encrypted = encrypted_pdf_bytes("");
        let unlocked = decrypt(&encrypted, "").unwrap();

        assert!(unlocked.was_encrypted);
        let reopened = Document::load_mem(&unlocked.bytes).unwrap();
        assert!(!reopened.is_encrypted());
        assert!(reopened.encryption_state.is_none());
    }

    #[test]
    fn decrypt_is_idempotent_on_its_own_output() {
        let encrypted = encrypted_pdf_bytes("secret123");
        let first = decrypt(&encrypted, "secret123").unwrap();
        let second = decrypt(&first.bytes, "").unwrap();

        assert!(!second.was_encrypted);
        assert_eq!(second.bytes, first.bytes);
    }

    #[test]
    fn decrypt_rejects_wrong_password() {
        let encrypted = encrypted_pdf_bytes("secret123");
        let err = decrypt(&encrypted, "wrong").unwrap_err();
        assert!(matches!(err, PdfError::InvalidPassword));
    }

    #[test]
    fn decrypt_rejects_garbage() {
        let err = decrypt(b"%PDF-oops", "pw").unwrap_err();
        assert!(matches!(err, PdfError::Malformed(_)));
    }
}
