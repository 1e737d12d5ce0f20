//! Plain text outline rendering.

use crate::error::Result;
use crate::model::{Block, Document};

use super::RenderOptions;

/// Convert a document to a plain text outline.
///
/// The title is underlined with `=`, level-1 headings with `-`; styled
/// blocks are indented by four spaces.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    for block in &doc.blocks {
        match block {
            Block::Heading { text, level } => {
                output.push_str(text);
                output.push('\n');
                match level {
                    0 => output.push_str(&"=".repeat(text.chars().count())),
                    1 => output.push_str(&"-".repeat(text.chars().count())),
                    _ => {}
                }
                output.push_str("\n\n");
            }
            Block::Paragraph(p) => {
                output.push_str(&p.plain_text());
                output.push_str("\n\n");
            }
            Block::BulletList { items } => {
                for item in items {
                    output.push(options.list_marker);
                    output.push(' ');
                    output.push_str(item);
                    output.push('\n');
                }
                output.push('\n');
            }
            Block::NumberedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    output.push_str(&format!("{}. {}\n", i + 1, item));
                }
                output.push('\n');
            }
            Block::Styled { text, .. } => {
                output.push_str("    ");
                output.push_str(text);
                output.push_str("\n\n");
            }
        }
    }

    Ok(output.trim().to_string())
}
