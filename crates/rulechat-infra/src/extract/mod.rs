//! Document text extraction.
//!
//! Turns a set of uploaded documents into the single corpus text the
//! context assembler embeds in every request. Each supported document's
//! extracted text is followed by a blank-line separator, in input order.
//! Unsupported MIME types are silently skipped.

mod pdf;
mod txt;

use std::path::{Path, PathBuf};

use tracing::debug;

use rulechat_types::document::{APPLICATION_PDF, TEXT_PLAIN, UploadedDocument};
use rulechat_types::error::ExtractionError;

/// Declared MIME type for a file path, from its extension.
///
/// Anything that is not a PDF or a plain-text file gets a generic type and
/// is later skipped by [`extract_corpus`].
pub fn declared_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "pdf" => APPLICATION_PDF,
        "txt" | "text" => TEXT_PLAIN,
        _ => "application/octet-stream",
    }
}

/// Read files from disk into uploaded documents with declared MIME types.
pub async fn load_documents(paths: &[PathBuf]) -> Result<Vec<UploadedDocument>, ExtractionError> {
    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        docs.push(UploadedDocument::new(filename, declared_mime(path), bytes));
    }
    Ok(docs)
}

/// Extract and concatenate the corpus text from a set of uploads.
///
/// Output is each document's text followed by a blank line, in input
/// order. PDF pages are concatenated in page order with no separator
/// between pages. Failures propagate; nothing is caught here.
pub fn extract_corpus(docs: &[UploadedDocument]) -> Result<String, ExtractionError> {
    let mut combined = String::new();
    for doc in docs {
        match doc.mime_type.as_str() {
            APPLICATION_PDF => {
                combined.push_str(&pdf::extract_pdf(&doc.bytes, &doc.filename)?);
                combined.push_str("\n\n");
            }
            TEXT_PLAIN => {
                combined.push_str(&txt::extract_txt(&doc.bytes, &doc.filename)?);
                combined.push_str("\n\n");
            }
            other => {
                debug!(filename = %doc.filename, mime = other, "Skipping unsupported document");
            }
        }
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    fn text_doc(name: &str, content: &str) -> UploadedDocument {
        UploadedDocument::new(name, TEXT_PLAIN, content.as_bytes().to_vec())
    }

    /// Build a minimal one-page PDF containing the given text.
    fn pdf_bytes(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_declared_mime() {
        assert_eq!(declared_mime(Path::new("rules.pdf")), APPLICATION_PDF);
        assert_eq!(declared_mime(Path::new("RULES.PDF")), APPLICATION_PDF);
        assert_eq!(declared_mime(Path::new("rules.txt")), TEXT_PLAIN);
        assert_eq!(declared_mime(Path::new("notes.text")), TEXT_PLAIN);
        assert_eq!(
            declared_mime(Path::new("photo.png")),
            "application/octet-stream"
        );
        assert_eq!(
            declared_mime(Path::new("no_extension")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_corpus_concatenates_in_order_with_blank_lines() {
        let docs = vec![
            text_doc("a.txt", "first document"),
            text_doc("b.txt", "second document"),
        ];
        let corpus = extract_corpus(&docs).unwrap();
        assert_eq!(corpus, "first document\n\nsecond document\n\n");
    }

    #[test]
    fn test_unsupported_mime_is_silently_skipped() {
        let docs = vec![
            text_doc("a.txt", "kept"),
            UploadedDocument::new("photo.png", "image/png", vec![0xff, 0xd8]),
            text_doc("b.txt", "also kept"),
        ];
        let corpus = extract_corpus(&docs).unwrap();
        assert_eq!(corpus, "kept\n\nalso kept\n\n");
    }

    #[test]
    fn test_invalid_utf8_propagates() {
        let docs = vec![UploadedDocument::new(
            "bad.txt",
            TEXT_PLAIN,
            vec![0xff, 0xfe, 0x00],
        )];
        let err = extract_corpus(&docs).unwrap_err();
        assert!(matches!(err, ExtractionError::Decode { .. }));
        assert!(err.to_string().contains("bad.txt"));
    }

    #[test]
    fn test_malformed_pdf_propagates() {
        let docs = vec![UploadedDocument::new(
            "broken.pdf",
            APPLICATION_PDF,
            b"not a pdf at all".to_vec(),
        )];
        let err = extract_corpus(&docs).unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf { .. }));
    }

    #[test]
    fn test_pdf_text_is_extracted() {
        let docs = vec![UploadedDocument::new(
            "rules.pdf",
            APPLICATION_PDF,
            pdf_bytes("Quiet hours start at 10pm"),
        )];
        let corpus = extract_corpus(&docs).unwrap();
        assert!(corpus.contains("Quiet hours start at 10pm"));
        assert!(corpus.ends_with("\n\n"));
    }

    #[tokio::test]
    async fn test_load_documents_declares_mime_from_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("house-rules.txt");
        tokio::fs::write(&path, "No grilling on balconies.")
            .await
            .unwrap();

        let docs = load_documents(&[path]).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].filename, "house-rules.txt");
        assert_eq!(docs[0].mime_type, TEXT_PLAIN);
        assert_eq!(docs[0].bytes, b"No grilling on balconies.");
    }

    #[tokio::test]
    async fn test_load_documents_missing_file_errors() {
        let err = load_documents(&[PathBuf::from("/no/such/file.txt")])
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }

    /// End-to-end: an uploaded sentence must reach the completion request.
    #[tokio::test]
    async fn test_uploaded_sentence_reaches_completion_request() {
        use std::sync::{Arc, Mutex};

        use futures_util::stream;
        use rulechat_core::engine::ChatEngine;
        use rulechat_core::llm::{CompletionProvider, EventStream};
        use rulechat_core::session::Session;
        use rulechat_types::llm::{CompletionRequest, StreamEvent};

        struct CapturingProvider {
            requests: Arc<Mutex<Vec<CompletionRequest>>>,
        }

        impl CompletionProvider for CapturingProvider {
            fn name(&self) -> &str {
                "capturing"
            }
            fn stream(&self, request: CompletionRequest) -> EventStream {
                self.requests.lock().unwrap().push(request);
                Box::pin(stream::iter(vec![
                    Ok(StreamEvent::TextDelta {
                        text: "No, pets are not allowed there.".to_string(),
                    }),
                    Ok(StreamEvent::Done),
                ]))
            }
        }

        let docs = vec![text_doc(
            "rules.txt",
            "Pets are not allowed on the 3rd floor.",
        )];
        let mut session = Session::new();
        session.replace_corpus(extract_corpus(&docs).unwrap());

        let requests = Arc::new(Mutex::new(Vec::new()));
        let engine = ChatEngine::new(Box::new(CapturingProvider {
            requests: requests.clone(),
        }));

        let outcome = engine
            .run_turn(
                &mut session,
                "Are pets allowed on the third floor?".to_string(),
                |_| {},
            )
            .await;

        assert!(outcome.error.is_none());
        let requests = requests.lock().unwrap();
        assert!(
            requests[0].messages[0]
                .content
                .contains("Pets are not allowed on the 3rd floor.")
        );
    }
}
