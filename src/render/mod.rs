//! Rendering module for converting documents to output formats.

#[cfg(feature = "docx")]
mod docx;
mod json;
mod markdown;
mod options;
mod stats;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{DocxOptions, PageSize, RenderOptions};
pub use stats::DocumentStats;
pub use text::to_text;

#[cfg(feature = "docx")]
pub use docx::DocxRenderer;

use crate::error::Result;
use crate::model::Document;

/// Render a document to a DOCX package.
///
/// Fails with [`Error::MissingCapability`](crate::Error::MissingCapability)
/// when the `docx` feature is disabled.
pub fn to_docx(doc: &Document, options: &DocxOptions) -> Result<Vec<u8>> {
    crate::capability::ensure_docx()?;
    render_docx(doc, options)
}

#[cfg(feature = "docx")]
fn render_docx(doc: &Document, options: &DocxOptions) -> Result<Vec<u8>> {
    DocxRenderer::new(options.clone()).render(doc)
}

#[cfg(not(feature = "docx"))]
fn render_docx(_doc: &Document, _options: &DocxOptions) -> Result<Vec<u8>> {
    Err(crate::capability::missing_docx())
}
