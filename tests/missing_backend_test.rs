//! Behavior of a build without the DOCX backend (`--no-default-features`).
#![cfg(not(feature = "docx"))]

use samdoc::{capability, generate, render, DocxOptions, Document, Error};

#[test]
fn test_generate_reports_missing_capability() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(samdoc::OUTPUT_NAME);

    let err = generate(&path).unwrap_err();

    assert!(matches!(
        err,
        Error::MissingCapability {
            capability: capability::DOCX,
            ..
        }
    ));
    assert!(err.to_string().contains("docx"));
    assert!(!path.exists());
}

#[test]
fn test_to_docx_reports_missing_capability() {
    let result = render::to_docx(&Document::new(), &DocxOptions::default());
    assert!(matches!(result, Err(Error::MissingCapability { .. })));
}

#[test]
fn test_previews_still_work() {
    let doc = samdoc::build_document(&samdoc::GenerateOptions::default());
    let markdown = render::to_markdown(&doc, &samdoc::RenderOptions::default()).unwrap();
    assert!(markdown.starts_with("# Segment Anything Model"));
}
