//! Content blocks.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// Deepest heading level a word-processing document supports.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// A content block appended to a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading; level 0 is the document title
    Heading {
        /// Heading text
        text: String,
        /// Nesting level (0 = title)
        level: u8,
    },

    /// A paragraph of body text
    Paragraph(Paragraph),

    /// A bulleted list, one entry per item
    BulletList {
        /// List items in display order
        items: Vec<String>,
    },

    /// A numbered list, one entry per item
    NumberedList {
        /// List items in display order
        items: Vec<String>,
    },

    /// A paragraph rendered with a named preset style
    Styled {
        /// Block text
        text: String,
        /// Preset style
        style: BlockStyle,
    },
}

impl Block {
    /// Create a heading block. Levels deeper than [`MAX_HEADING_LEVEL`] are clamped.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level: level.min(MAX_HEADING_LEVEL),
        }
    }

    /// Create a bulleted list block.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::BulletList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a numbered list block.
    pub fn numbered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::NumberedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a styled block.
    pub fn styled(text: impl Into<String>, style: BlockStyle) -> Self {
        Block::Styled {
            text: text.into(),
            style,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Get the heading level, if this block is a heading.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// List items, if this block is a list.
    pub fn list_items(&self) -> Option<&[String]> {
        match self {
            Block::BulletList { items } | Block::NumberedList { items } => Some(items),
            _ => None,
        }
    }

    /// Get plain text content of the block; list items are joined by newlines.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::Styled { text, .. } => text.clone(),
            Block::Paragraph(p) => p.plain_text(),
            Block::BulletList { items } | Block::NumberedList { items } => items.join("\n"),
        }
    }
}

/// Named preset styles for [`Block::Styled`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStyle {
    /// Indented, emphasized quote used for shell-command excerpts
    #[default]
    IntenseQuote,
    /// Plain quotation
    Quote,
}

impl BlockStyle {
    /// Style identifier as stored in the DOCX styles part.
    pub fn style_id(&self) -> &'static str {
        match self {
            BlockStyle::IntenseQuote => "IntenseQuote",
            BlockStyle::Quote => "Quote",
        }
    }

    /// Human-readable style name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockStyle::IntenseQuote => "Intense Quote",
            BlockStyle::Quote => "Quote",
        }
    }
}
