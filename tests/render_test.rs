//! Integration tests for the preview renderers.

use samdoc::content::SECTION_HEADINGS;
use samdoc::render::{from_json, to_json, to_markdown, to_text};
use samdoc::{parse_timestamp, Document, GenerateOptions, JsonFormat, RenderOptions};

fn sam_doc() -> Document {
    let at = parse_timestamp("2024-04-05 16:20").unwrap();
    samdoc::build_document(&GenerateOptions::new().with_generated_at(at))
}

#[test]
fn test_markdown_outline() {
    let markdown = to_markdown(&sam_doc(), &RenderOptions::default()).unwrap();

    assert!(markdown.starts_with("# Segment Anything Model (SAM) - Project Documentation\n"));
    assert!(markdown.contains("*Generated: 2024-04-05 16:20*"));
    assert_eq!(markdown.matches("\n## ").count(), SECTION_HEADINGS.len());
    assert!(markdown.contains("\n## 2. Scope & Objectives\n\n- Integrate SAM core components"));
    assert!(markdown.contains("\n1. Python package (`segment\\_anything/`)"));
    assert!(markdown.contains("> pip install -e ."));
}

#[test]
fn test_markdown_frontmatter() {
    let options = RenderOptions::new().with_frontmatter(true);
    let markdown = to_markdown(&sam_doc(), &options).unwrap();

    assert!(markdown.starts_with("---\n"));
    assert!(markdown.contains("audience: \"Project Manager, Software Engineer\""));
    assert!(markdown.contains("generated: \"2024-04-05 16:20\""));
}

#[test]
fn test_text_outline() {
    let text = to_text(&sam_doc(), &RenderOptions::default()).unwrap();

    assert!(text.contains("8. Data Flow\n------------\n"));
    assert!(text.contains("- Prompt encoding (points/boxes/masks)"));
    assert!(text.contains("    python scripts/amg.py --input <image_or_folder> --output output_dir/"));
}

#[test]
fn test_json_round_trip_and_determinism() {
    let doc = sam_doc();
    let first = to_json(&doc, JsonFormat::Compact).unwrap();
    let second = to_json(&sam_doc(), JsonFormat::Compact).unwrap();
    assert_eq!(first, second);

    let back = from_json(&first).unwrap();
    assert_eq!(back, doc);
}
