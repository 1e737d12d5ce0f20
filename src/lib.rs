//! # samdoc
//!
//! Generates the Segment Anything Model (SAM) project documentation as an
//! Office Open XML word-processing document (`.docx`).
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> samdoc::Result<()> {
//!     let path = samdoc::generate("SAM_Project_Documentation.docx")?;
//!     println!("Wrote documentation to: {}", path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Block model**: headings, paragraphs, bulleted/numbered lists, styled quote blocks
//! - **DOCX output** via `docx-rs` (cargo feature `docx`, on by default)
//! - **Previews**: Markdown, plain text and JSON renderings of the same document
//! - **Safe writes**: output is renamed into place, never left half-written

pub mod builder;
pub mod capability;
pub mod content;
pub mod detect;
pub mod error;
pub mod model;
pub mod output;
pub mod render;

pub use builder::DocumentBuilder;
pub use detect::{detect_docx, is_docx, is_docx_bytes};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, BlockStyle, Document, Metadata, Paragraph, TextRun, TextStyle,
};
pub use render::{DocumentStats, DocxOptions, JsonFormat, PageSize, RenderOptions};

use chrono::{Local, NaiveDateTime, Timelike};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// File name written when no output path is given.
pub const OUTPUT_NAME: &str = "SAM_Project_Documentation.docx";

/// Options for [`generate_with_options`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Timestamp shown on the cover; `None` means the current local time
    pub generated_at: Option<NaiveDateTime>,

    /// DOCX layout options
    pub docx: DocxOptions,

    /// Create missing parent directories of the output path
    pub create_dirs: bool,
}

impl GenerateOptions {
    /// Create new generation options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the cover timestamp, making the output reproducible.
    pub fn with_generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Set DOCX layout options.
    pub fn with_docx_options(mut self, docx: DocxOptions) -> Self {
        self.docx = docx;
        self
    }

    /// Create missing parent directories instead of failing.
    pub fn with_create_dirs(mut self, create: bool) -> Self {
        self.create_dirs = create;
        self
    }

    /// The cover timestamp to use, truncated to whole minutes.
    pub fn timestamp(&self) -> NaiveDateTime {
        let at = self
            .generated_at
            .unwrap_or_else(|| Local::now().naive_local());
        truncate_to_minute(at)
    }
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp.
///
/// # Example
///
/// ```
/// let at = samdoc::parse_timestamp("2024-05-01 08:15").unwrap();
/// assert_eq!(at.to_string(), "2024-05-01 08:15:00");
/// assert!(samdoc::parse_timestamp("May 1st").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), model::TIMESTAMP_FORMAT)
        .map_err(|_| Error::InvalidTimestamp(value.to_string()))
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

/// Default output path: [`OUTPUT_NAME`] next to the running executable,
/// or in the current directory when the executable location is unknown.
pub fn default_output_path() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(OUTPUT_NAME)
}

/// Build the SAM documentation for the given options.
pub fn build_document(options: &GenerateOptions) -> Document {
    content::sam_project_documentation(options.timestamp())
}

/// Generate the SAM documentation and write it to `output_path`.
///
/// Any existing file is overwritten. Returns the absolute path written.
///
/// # Errors
///
/// - [`Error::MissingCapability`] if the DOCX backend is not compiled in;
///   nothing is written in that case.
/// - [`Error::Io`] if the file cannot be written.
pub fn generate<P: AsRef<Path>>(output_path: P) -> Result<PathBuf> {
    generate_with_options(output_path, &GenerateOptions::default())
}

/// Generate the SAM documentation with custom options.
///
/// # Example
///
/// ```no_run
/// use samdoc::{generate_with_options, parse_timestamp, GenerateOptions};
///
/// let options = GenerateOptions::new()
///     .with_generated_at(parse_timestamp("2024-01-01 00:00")?)
///     .with_create_dirs(true);
/// generate_with_options("docs/SAM.docx", &options)?;
/// # Ok::<(), samdoc::Error>(())
/// ```
pub fn generate_with_options<P: AsRef<Path>>(
    output_path: P,
    options: &GenerateOptions,
) -> Result<PathBuf> {
    capability::ensure_docx()?;

    let doc = build_document(options);
    save_document(&doc, output_path, options)
}

/// Render an already built document as DOCX and write it to `output_path`.
///
/// Uses the layout and directory settings of `options`; its timestamp is
/// ignored since `doc` already carries one. Returns the absolute path written.
pub fn save_document<P: AsRef<Path>>(
    doc: &Document,
    output_path: P,
    options: &GenerateOptions,
) -> Result<PathBuf> {
    let path = output_path.as_ref();
    let bytes = render::to_docx(doc, &options.docx)?;
    output::write_atomic(path, &bytes, options.create_dirs)?;

    let written = fs::canonicalize(path)?;
    info!("wrote documentation to {}", written.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let at = parse_timestamp(" 2023-11-30 23:59 ").unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2023-11-30 23:59");

        assert!(matches!(
            parse_timestamp("2023-11-30"),
            Err(Error::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_timestamp_truncated_to_minute() {
        let at = parse_timestamp("2023-11-30 10:15")
            .unwrap()
            .with_second(42)
            .unwrap();
        let options = GenerateOptions::new().with_generated_at(at);
        assert_eq!(options.timestamp().second(), 0);
        assert_eq!(options.timestamp().minute(), 15);
    }

    #[test]
    fn test_generate_options_builder() {
        let options = GenerateOptions::new()
            .with_create_dirs(true)
            .with_docx_options(DocxOptions::new().with_page_size(PageSize::A4));
        assert!(options.create_dirs);
        assert_eq!(options.docx.page_size, PageSize::A4);
        assert!(options.generated_at.is_none());
    }

    #[test]
    fn test_default_output_path_file_name() {
        let path = default_output_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(OUTPUT_NAME)
        );
    }

    #[test]
    fn test_build_document_uses_pinned_time() {
        let at = parse_timestamp("2022-02-02 02:02").unwrap();
        let doc = build_document(&GenerateOptions::new().with_generated_at(at));
        assert_eq!(doc.metadata.generated_at, Some(at));
        assert_eq!(doc.blocks[1].plain_text(), "Generated: 2022-02-02 02:02");
    }

    #[cfg(not(feature = "docx"))]
    #[test]
    fn test_generate_without_backend_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_NAME);

        let result = generate(&path);
        assert!(matches!(result, Err(Error::MissingCapability { .. })));
        assert!(!path.exists());
    }
}
