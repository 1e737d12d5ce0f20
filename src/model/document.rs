//! Document-level types.

use super::Block;
use crate::render::DocumentStats;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for the "Generated" line and frontmatter timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// An ordered sequence of content blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Content blocks in display order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over `(level, text)` for every heading in order.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { text, level } => Some((*level, text.as_str())),
            _ => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Count headings, paragraphs, list items and styled blocks.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(self)
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Subject line
    pub subject: Option<String>,

    /// Intended readers
    pub audience: Option<String>,

    /// Generation timestamp (local time)
    pub generated_at: Option<NaiveDateTime>,
}

impl Metadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(ref audience) = self.audience {
            lines.push(format!("audience: \"{}\"", escape_yaml(audience)));
        }
        if let Some(ref generated) = self.generated_at {
            lines.push(format!("generated: \"{}\"", generated.format(TIMESTAMP_FORMAT)));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
