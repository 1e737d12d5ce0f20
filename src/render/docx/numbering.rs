//! List numbering definitions.

use docx_rs::*;

/// Allocates numbering definitions for lists.
///
/// Every list gets its own abstract numbering, so numbered lists restart at 1.
#[derive(Clone, Debug)]
pub struct DocxNumbering {
    next_id: usize,
}

impl DocxNumbering {
    /// Create a new numbering allocator.
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    fn create_level(format: &str, text: &str, hanging: i32) -> Level {
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new(format),
            LevelText::new(text),
            LevelJc::new("left"),
        )
        .indent(Some(720), Some(SpecialIndentType::Hanging(hanging)), None, None)
    }

    fn add(&mut self, docx: Docx, level: Level) -> (Docx, usize) {
        let id = self.next_id;
        self.next_id += 1;

        let docx = docx
            .add_abstract_numbering(AbstractNumbering::new(id).add_level(level))
            .add_numbering(Numbering::new(id, id));
        (docx, id)
    }

    /// Register a bulleted list and return its numbering id.
    pub fn create_bullet_numbering(&mut self, docx: Docx) -> (Docx, usize) {
        self.add(docx, Self::create_level("bullet", "•", 360))
    }

    /// Register a decimal numbered list and return its numbering id.
    pub fn create_decimal_numbering(&mut self, docx: Docx) -> (Docx, usize) {
        self.add(docx, Self::create_level("decimal", "%1.", 420))
    }
}

impl Default for DocxNumbering {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let mut numbering = DocxNumbering::new();
        let (docx, first) = numbering.create_bullet_numbering(Docx::new());
        let (_, second) = numbering.create_decimal_numbering(docx);
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }
}
