//! JSON dump of the document model.
//!
//! Blocks are internally tagged by a `"type"` field:
//!
//! ```json
//! {"type":"heading","text":"1. Introduction","level":1}
//! {"type":"bullet_list","items":["a","b"]}
//! {"type":"styled","text":"pip install -e .","style":"intense_quote"}
//! ```
//!
//! Paragraph blocks carry their runs and alignment inline. The output is
//! stable for a pinned timestamp and reads back with [`from_json`].

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Indented, one field per line
    #[default]
    Pretty,
    /// Single line
    Compact,
}

/// Serialize a document.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };
    json.map_err(|e| Error::Render(format!("cannot serialize document model: {}", e)))
}

/// Read a document back from either JSON layout.
pub fn from_json(json: &str) -> Result<Document> {
    serde_json::from_str(json)
        .map_err(|e| Error::Render(format!("invalid document model JSON: {}", e)))
}
