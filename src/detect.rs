//! DOCX package detection.
//!
//! A DOCX file is a ZIP archive; this only checks the local file header
//! signature, not the package contents.

use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header signature: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Check if bytes start like a DOCX (ZIP) package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Read the header of a file and check whether it is a DOCX package.
///
/// Returns `Ok(false)` for files too short to hold the signature.
pub fn detect_docx<P: AsRef<Path>>(path: P) -> Result<bool> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(ZIP_MAGIC.len());
    BufReader::new(file)
        .take(ZIP_MAGIC.len() as u64)
        .read_to_end(&mut header)?;
    Ok(is_docx_bytes(&header))
}

/// Check if a file is a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_docx(path).unwrap_or(false)
}
