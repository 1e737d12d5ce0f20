//! Rendering options and configuration.

/// Options for the text-based renderers (Markdown, plain text).
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata
    pub include_frontmatter: bool,

    /// Character to use for unordered list markers
    pub list_marker: char,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            list_marker: '-',
            escape_special_chars: true,
        }
    }
}

/// Page size of the generated DOCX.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    /// 8.5 x 11 inches
    #[default]
    Letter,
    /// 210 x 297 mm
    A4,
}

impl PageSize {
    /// Width and height in twentieths of a point.
    pub fn twips(&self) -> (u32, u32) {
        match self {
            PageSize::Letter => (12240, 15840), // 8.5 * 1440, 11 * 1440
            PageSize::A4 => (11906, 16838),
        }
    }
}

/// Options for the DOCX renderer.
#[derive(Debug, Clone)]
pub struct DocxOptions {
    /// Body font family
    pub font_family: String,

    /// Body font size in half-points (22 = 11pt)
    pub font_size: usize,

    /// Page size
    pub page_size: PageSize,
}

impl DocxOptions {
    /// Create new DOCX options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body font family.
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size_pt(mut self, points: usize) -> Self {
        self.font_size = points.max(1) * 2;
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size: 22,
            page_size: PageSize::Letter,
        }
    }
}
