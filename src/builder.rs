//! Append-only document builder.

use log::debug;

use crate::model::{Alignment, Block, BlockStyle, Document, Metadata, Paragraph, TextRun};

/// Builds a [`Document`] by appending blocks in order.
///
/// Every `add_*` method appends exactly one block and returns the builder so
/// calls can be chained.
///
/// # Example
///
/// ```
/// use samdoc::{Alignment, BlockStyle, DocumentBuilder};
///
/// let mut builder = DocumentBuilder::new();
/// builder
///     .add_heading("Release Notes", 0)
///     .add_paragraph("Internal", false, true, Some(Alignment::Center))
///     .add_bullets(["Faster startup", "Smaller binary"])
///     .add_styled_block("cargo install samdoc-cli", BlockStyle::IntenseQuote);
/// let doc = builder.build();
/// assert_eq!(doc.block_count(), 4);
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a builder for a new, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given metadata.
    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            document: Document {
                metadata,
                blocks: Vec::new(),
            },
        }
    }

    /// Append a heading. Level 0 is the document title.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &mut Self {
        let block = Block::heading(text, level);
        debug!("heading (level {:?})", block.heading_level());
        self.push(block)
    }

    /// Append a single-run paragraph.
    ///
    /// `alignment` of `None` means left aligned.
    pub fn add_paragraph(
        &mut self,
        text: impl Into<String>,
        bold: bool,
        italic: bool,
        alignment: Option<Alignment>,
    ) -> &mut Self {
        let mut para = Paragraph::new().aligned(alignment.unwrap_or_default());
        para.add_run(TextRun::styled(text, bold, italic));
        self.push(Block::Paragraph(para))
    }

    /// Append a paragraph whose alignment is given by name.
    ///
    /// Unrecognized names are treated as left alignment.
    pub fn add_paragraph_aligned(
        &mut self,
        text: impl Into<String>,
        bold: bool,
        italic: bool,
        alignment: Option<&str>,
    ) -> &mut Self {
        self.add_paragraph(text, bold, italic, Some(Alignment::from(alignment)))
    }

    /// Append a plain, left-aligned paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_paragraph(text, false, false, None)
    }

    /// Append an italic, left-aligned paragraph.
    pub fn add_italic(&mut self, text: impl Into<String>) -> &mut Self {
        self.add_paragraph(text, false, true, None)
    }

    /// Append a bulleted list, one item per element in input order.
    pub fn add_bullets<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::bullets(items))
    }

    /// Append a numbered list, one item per element in input order.
    pub fn add_numbered<I, S>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(Block::numbered(items))
    }

    /// Append a block rendered with a preset style.
    pub fn add_styled_block(&mut self, text: impl Into<String>, style: BlockStyle) -> &mut Self {
        self.push(Block::styled(text, style))
    }

    /// Peek at the document built so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Finish building.
    pub fn build(self) -> Document {
        self.document
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.document.push(block);
        self
    }
}
