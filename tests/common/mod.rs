//! Helpers for inspecting written DOCX packages.
#![allow(dead_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A paragraph read back from `word/document.xml`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocxParagraph {
    pub style: Option<String>,
    /// Value of `w:jc`; `None` when the paragraph is left aligned by default
    pub alignment: Option<String>,
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Read every body paragraph of a DOCX file, in order.
pub fn read_paragraphs(path: &Path) -> Vec<DocxParagraph> {
    let file = File::open(path).expect("open docx");
    let mut archive = zip::ZipArchive::new(file).expect("docx is a zip archive");

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .expect("word/document.xml present")
        .read_to_string(&mut xml)
        .expect("read document.xml");

    parse_paragraphs(&xml)
}

/// List the entry names of the package.
pub fn entry_names(path: &Path) -> Vec<String> {
    let file = File::open(path).expect("open docx");
    let archive = zip::ZipArchive::new(file).expect("docx is a zip archive");
    archive.file_names().map(str::to_string).collect()
}

/// Parse the body paragraphs of a `word/document.xml` part.
pub fn parse_paragraphs(xml: &str) -> Vec<DocxParagraph> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<DocxParagraph> = None;
    let mut in_text = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:p" => current = Some(DocxParagraph::default()),
                b"w:t" => in_text = true,
                _ => apply_property(e, current.as_mut()),
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(DocxParagraph::default()),
                _ => apply_property(e, current.as_mut()),
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(p) = current.take() {
                        paragraphs.push(p);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let (Some(p), Ok(text)) = (current.as_mut(), e.unescape()) {
                        p.text.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parse error: {}", e),
            _ => {}
        }
        buf.clear();
    }

    paragraphs
}

fn apply_property(e: &BytesStart, paragraph: Option<&mut DocxParagraph>) {
    let Some(p) = paragraph else {
        return;
    };
    match e.name().as_ref() {
        b"w:pStyle" => p.style = attribute(e, "w:val"),
        b"w:jc" => p.alignment = attribute(e, "w:val"),
        b"w:b" => p.bold = true,
        b"w:i" => p.italic = true,
        _ => {}
    }
}

fn attribute(e: &BytesStart, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}
