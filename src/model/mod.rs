//! Document model types.
//!
//! A document is an ordered list of content blocks. The model is
//! format-agnostic; the renderers turn it into DOCX, Markdown, text or JSON.

mod block;
mod document;
mod paragraph;

pub use block::{Block, BlockStyle, MAX_HEADING_LEVEL};
pub use document::{Document, Metadata, TIMESTAMP_FORMAT};
pub use paragraph::{Alignment, Paragraph, TextRun, TextStyle};
