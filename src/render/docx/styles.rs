//! Paragraph styles registered in the DOCX styles part.

use docx_rs::*;

use crate::model::{BlockStyle, MAX_HEADING_LEVEL};

/// Style id of the document title (heading level 0).
pub const TITLE: &str = "Title";
/// Style id of bulleted list items.
pub const LIST_BULLET: &str = "ListBullet";
/// Style id of numbered list items.
pub const LIST_NUMBER: &str = "ListNumber";

/// Heading font sizes in half-points, indexed by level - 1.
const HEADING_SIZES: [usize; MAX_HEADING_LEVEL as usize] = [32, 26, 24, 22, 22, 22, 22, 22, 22];

const ACCENT: &str = "365F91";

/// Style id for a heading level. Level 0 is the title.
pub fn heading_style_id(level: u8) -> String {
    match level {
        0 => TITLE.to_string(),
        n => format!("Heading{}", n.min(MAX_HEADING_LEVEL)),
    }
}

fn heading_style(level: u8) -> Style {
    let size = HEADING_SIZES[(level - 1) as usize];
    Style::new(heading_style_id(level), StyleType::Paragraph)
        .name(format!("Heading {}", level))
        .size(size)
        .color(ACCENT)
        .bold()
}

fn block_style(style: BlockStyle) -> Style {
    let base = Style::new(style.style_id(), StyleType::Paragraph).name(style.display_name());
    match style {
        BlockStyle::IntenseQuote => base
            .indent(Some(864), None, Some(864), None)
            .color("4F81BD")
            .bold()
            .italic(),
        BlockStyle::Quote => base.indent(Some(720), None, None, None).italic(),
    }
}

/// Register every style the renderer may reference.
pub fn initialize_styles(docx: Docx) -> Docx {
    let title = Style::new(TITLE, StyleType::Paragraph)
        .name("Title")
        .size(56)
        .color("17365D");

    let list_bullet = Style::new(LIST_BULLET, StyleType::Paragraph).name("List Bullet");
    let list_number = Style::new(LIST_NUMBER, StyleType::Paragraph).name("List Number");

    let mut docx = docx
        .add_style(title)
        .add_style(list_bullet)
        .add_style(list_number)
        .add_style(block_style(BlockStyle::IntenseQuote))
        .add_style(block_style(BlockStyle::Quote));

    for level in 1..=MAX_HEADING_LEVEL {
        docx = docx.add_style(heading_style(level));
    }

    docx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_style_ids() {
        assert_eq!(heading_style_id(0), "Title");
        assert_eq!(heading_style_id(1), "Heading1");
        assert_eq!(heading_style_id(9), "Heading9");
        assert_eq!(heading_style_id(12), "Heading9");
    }
}
