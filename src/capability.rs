//! Startup check for the document-authoring backend.
//!
//! The DOCX backend is the optional `docx` cargo feature. Callers check it
//! once before generating anything and abort when it is absent.

use crate::error::{Error, Result};

/// Name of the DOCX authoring capability.
pub const DOCX: &str = "docx";

const DOCX_HINT: &str = "Rebuild with the `docx` feature enabled: cargo build --features docx";

/// Whether the DOCX backend was compiled into this build.
pub fn has_docx() -> bool {
    cfg!(feature = "docx")
}

/// Fail with [`Error::MissingCapability`] unless the DOCX backend is available.
pub fn ensure_docx() -> Result<()> {
    if has_docx() {
        Ok(())
    } else {
        Err(missing_docx())
    }
}

pub(crate) fn missing_docx() -> Error {
    Error::MissingCapability {
        capability: DOCX,
        hint: DOCX_HINT,
    }
}
