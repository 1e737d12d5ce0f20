//! Markdown rendering.

use crate::error::Result;
use crate::model::{Block, Document, Paragraph, TextRun, TextStyle};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
///
/// The title becomes `#`, level-n headings `#` repeated n + 1 times (capped
/// at six), and styled blocks are rendered as block quotes.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter());
        }

        for block in &doc.blocks {
            self.render_block(&mut output, block);
        }

        Ok(output.trim().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { text, level } => {
                let depth = (*level as usize + 1).min(6);
                output.push_str(&"#".repeat(depth));
                output.push(' ');
                output.push_str(&self.escape(text));
                output.push_str("\n\n");
            }
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::BulletList { items } => {
                for item in items {
                    output.push(self.options.list_marker);
                    output.push(' ');
                    output.push_str(&self.escape(item));
                    output.push('\n');
                }
                output.push('\n');
            }
            Block::NumberedList { items } => {
                for (i, item) in items.iter().enumerate() {
                    output.push_str(&format!("{}. {}\n", i + 1, self.escape(item)));
                }
                output.push('\n');
            }
            Block::Styled { text, .. } => {
                for line in text.lines() {
                    output.push_str("> ");
                    output.push_str(&self.escape(line));
                    output.push('\n');
                }
                output.push('\n');
            }
        }
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        if para.is_empty() {
            return;
        }
        for run in &para.runs {
            self.render_text_run(output, run);
        }
        output.push_str("\n\n");
    }

    fn render_text_run(&self, output: &mut String, run: &TextRun) {
        let text = self.escape(&run.text);
        output.push_str(&apply_text_style(&text, &run.style));
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

fn apply_text_style(text: &str, style: &TextStyle) -> String {
    let mut result = text.to_string();

    if style.italic {
        result = format!("*{}*", result);
    }
    if style.bold {
        result = format!("**{}**", result);
    }

    result
}

/// Escape special Markdown characters.
///
/// Backticks are left alone: the document uses them for inline code.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '*' | '_' | '[' | ']' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockStyle;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("output_dir/"), "output\\_dir/");
        assert_eq!(escape_markdown("`notebooks/`"), "`notebooks/`");
    }

    #[test]
    fn test_render_headings() {
        let mut doc = Document::new();
        doc.push(Block::heading("Title", 0));
        doc.push(Block::heading("Section", 1));

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result, "# Title\n\n## Section");
    }

    #[test]
    fn test_render_lists_and_quotes() {
        let mut doc = Document::new();
        doc.push(Block::bullets(["one", "two"]));
        doc.push(Block::numbered(["first", "second"]));
        doc.push(Block::styled("npm ci", BlockStyle::IntenseQuote));

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert!(result.contains("- one\n- two\n"));
        assert!(result.contains("1. first\n2. second\n"));
        assert!(result.ends_with("> npm ci"));
    }

    #[test]
    fn test_render_italic_paragraph() {
        let mut doc = Document::new();
        let mut para = Paragraph::new();
        para.add_run(TextRun::italic("Audience: PM"));
        doc.push(Block::Paragraph(para));

        let result = to_markdown(&doc, &RenderOptions::new()).unwrap();
        assert_eq!(result, "*Audience: PM*");
    }

    #[test]
    fn test_render_with_frontmatter() {
        let mut doc = Document::new();
        doc.metadata.title = Some("Test Doc".to_string());
        doc.push(Block::heading("Test Doc", 0));

        let options = RenderOptions::new().with_frontmatter(true);
        let result = to_markdown(&doc, &options).unwrap();
        assert!(result.starts_with("---\ntitle: \"Test Doc\"\n---"));
        assert!(result.ends_with("# Test Doc"));
    }
}
