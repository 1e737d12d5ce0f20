//! Block statistics.

use crate::model::{Block, Document};
use serde::{Deserialize, Serialize};

/// Counts of the content blocks in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of headings, including the title
    pub heading_count: u32,

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of list items across all lists
    pub list_item_count: u32,

    /// Number of styled (preset) blocks
    pub styled_block_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a whole document.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in &doc.blocks {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { .. } => self.heading_count += 1,
            Block::Paragraph(_) => self.paragraph_count += 1,
            Block::BulletList { items } | Block::NumberedList { items } => {
                self.list_item_count += items.len() as u32;
            }
            Block::Styled { .. } => self.styled_block_count += 1,
        }
        self.count_text(&block.plain_text());
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Total number of paragraphs a word processor will show.
    pub fn rendered_paragraphs(&self) -> u32 {
        self.heading_count + self.paragraph_count + self.list_item_count + self.styled_block_count
    }
}
