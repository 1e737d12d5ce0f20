//! DOCX rendering backed by `docx-rs`.

mod numbering;
mod styles;

use std::io::Cursor;

use chrono::{Local, NaiveDateTime, TimeZone, Utc};
use docx_rs::{
    AlignmentType, Docx, IndentLevel, NumberingId, Paragraph as DocxParagraph, Run, RunFonts,
};
use log::debug;

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Document, Paragraph, TextRun};

use super::DocxOptions;
use numbering::DocxNumbering;

/// Renders a [`Document`] into an Office Open XML word-processing package.
pub struct DocxRenderer {
    options: DocxOptions,
    numbering: DocxNumbering,
}

impl DocxRenderer {
    /// Create a new DOCX renderer.
    pub fn new(options: DocxOptions) -> Self {
        Self {
            options,
            numbering: DocxNumbering::new(),
        }
    }

    /// Render a document and pack it into bytes.
    pub fn render(mut self, doc: &Document) -> Result<Vec<u8>> {
        let mut docx = self.create_docx(doc);

        for block in &doc.blocks {
            docx = self.render_block(docx, block);
        }

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::Package(e.to_string()))?;

        debug!(
            "packed {} blocks into {} bytes",
            doc.block_count(),
            buffer.len()
        );
        Ok(buffer)
    }

    fn create_docx(&self, doc: &Document) -> Docx {
        let (width, height) = self.options.page_size.twips();
        let family = self.options.font_family.as_str();
        let fonts = RunFonts::new()
            .ascii(family)
            .hi_ansi(family)
            .east_asia(family)
            .cs(family);

        let mut docx = Docx::new()
            .page_size(width, height)
            .default_fonts(fonts)
            .default_size(self.options.font_size);

        if let Some(generated) = doc.metadata.generated_at {
            let stamp = core_timestamp(generated);
            docx = docx.created_at(&stamp).updated_at(&stamp);
        }

        styles::initialize_styles(docx)
    }

    fn render_block(&mut self, docx: Docx, block: &Block) -> Docx {
        match block {
            Block::Heading { text, level } => {
                let para = DocxParagraph::new()
                    .style(&styles::heading_style_id(*level))
                    .add_run(Run::new().add_text(text.as_str()));
                docx.add_paragraph(para)
            }
            Block::Paragraph(p) => docx.add_paragraph(build_paragraph(p)),
            Block::BulletList { items } => {
                let (docx, num_id) = self.numbering.create_bullet_numbering(docx);
                add_list_items(docx, items, styles::LIST_BULLET, num_id)
            }
            Block::NumberedList { items } => {
                let (docx, num_id) = self.numbering.create_decimal_numbering(docx);
                add_list_items(docx, items, styles::LIST_NUMBER, num_id)
            }
            Block::Styled { text, style } => {
                let para = DocxParagraph::new()
                    .style(style.style_id())
                    .add_run(Run::new().add_text(text.as_str()));
                docx.add_paragraph(para)
            }
        }
    }
}

/// W3CDTF timestamp in UTC for the core properties.
///
/// The cover time is local; a time that does not exist locally (DST gap) is
/// taken as UTC.
fn core_timestamp(local: NaiveDateTime) -> String {
    let utc = Local
        .from_local_datetime(&local)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&local));
    utc.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn build_paragraph(para: &Paragraph) -> DocxParagraph {
    let mut out = DocxParagraph::new();
    for run in &para.runs {
        out = out.add_run(build_run(run));
    }
    match para.alignment {
        Alignment::Left => out,
        Alignment::Center => out.align(AlignmentType::Center),
        Alignment::Right => out.align(AlignmentType::Right),
    }
}

fn build_run(run: &TextRun) -> Run {
    let mut out = Run::new().add_text(run.text.as_str());
    if run.style.bold {
        out = out.bold();
    }
    if run.style.italic {
        out = out.italic();
    }
    out
}

fn add_list_items(mut docx: Docx, items: &[String], style: &str, num_id: usize) -> Docx {
    for item in items {
        let para = DocxParagraph::new()
            .style(style)
            .numbering(NumberingId::new(num_id), IndentLevel::new(0))
            .add_run(Run::new().add_text(item.as_str()));
        docx = docx.add_paragraph(para);
    }
    docx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockStyle;

    #[test]
    fn test_render_produces_zip_package() {
        let mut doc = Document::new();
        doc.push(Block::heading("Title", 0));
        doc.push(Block::bullets(["a", "b"]));
        doc.push(Block::styled("make", BlockStyle::IntenseQuote));

        let bytes = DocxRenderer::new(DocxOptions::default())
            .render(&doc)
            .unwrap();
        assert!(crate::detect::is_docx_bytes(&bytes));
    }

    #[test]
    fn test_core_timestamp_is_utc() {
        let local = crate::parse_timestamp("2024-01-15 12:30").unwrap();
        let stamp = core_timestamp(local);

        assert!(stamp.ends_with('Z'));
        let back = chrono::DateTime::parse_from_rfc3339(&stamp)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(back, local);
    }

    #[test]
    fn test_render_empty_document() {
        let bytes = DocxRenderer::new(DocxOptions::default())
            .render(&Document::new())
            .unwrap();
        assert!(!bytes.is_empty());
    }
}
