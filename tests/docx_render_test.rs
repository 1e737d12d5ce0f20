//! Paragraph formatting in the DOCX output.
#![cfg(feature = "docx")]

mod common;

use std::fs;

use common::{parse_paragraphs, read_paragraphs};
use samdoc::render::to_docx;
use samdoc::{Alignment, DocumentBuilder, DocxOptions};

#[test]
fn test_alignment_and_bold_reach_the_package() {
    let mut builder = DocumentBuilder::new();
    builder
        .add_paragraph("Centered and bold", true, false, Some(Alignment::Center))
        .add_paragraph_aligned("Right aligned", false, true, Some("RIGHT"))
        .add_text("Plain");
    let doc = builder.build();

    let bytes = to_docx(&doc, &DocxOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("formatting.docx");
    fs::write(&path, &bytes).unwrap();

    let paragraphs = read_paragraphs(&path);
    assert_eq!(paragraphs.len(), 3);

    assert_eq!(paragraphs[0].text, "Centered and bold");
    assert_eq!(paragraphs[0].alignment.as_deref(), Some("center"));
    assert!(paragraphs[0].bold);
    assert!(!paragraphs[0].italic);

    assert_eq!(paragraphs[1].text, "Right aligned");
    assert_eq!(paragraphs[1].alignment.as_deref(), Some("right"));
    assert!(paragraphs[1].italic);
    assert!(!paragraphs[1].bold);

    assert_eq!(paragraphs[2].alignment, None);
    assert!(!paragraphs[2].bold);
}

#[test]
fn test_empty_paragraph_is_kept_in_order() {
    let xml = r#"<w:document><w:body>
        <w:p><w:r><w:t>first</w:t></w:r></w:p>
        <w:p/>
        <w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>third</w:t></w:r></w:p>
    </w:body></w:document>"#;

    let paragraphs = parse_paragraphs(xml);

    let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "", "third"]);
    assert_eq!(paragraphs[2].alignment.as_deref(), Some("center"));
    assert_eq!(paragraphs[1].alignment, None);
}
