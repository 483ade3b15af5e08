//! Text node with monospace metrics

use scene_layout::prelude::Size;

/// Text size variants
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TextSize {
    /// 6x10 cell
    Small,
    /// 10x20 cell
    #[default]
    Normal,
    /// 16x32 cell
    Large,
}

impl TextSize {
    /// Advance of one glyph in pixels.
    pub const fn char_width(self) -> f32 {
        match self {
            TextSize::Small => 6.0,
            TextSize::Normal => 10.0,
            TextSize::Large => 16.0,
        }
    }

    /// Height of one line in pixels.
    pub const fn line_height(self) -> f32 {
        match self {
            TextSize::Small => 10.0,
            TextSize::Normal => 20.0,
            TextSize::Large => 32.0,
        }
    }
}

/// Multi-line text measured on a fixed character grid
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    content: String,
    size: TextSize,
}

impl Text {
    /// Create a new text node with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: TextSize::Normal,
        }
    }

    /// Set text size
    #[must_use]
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// The displayed string.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The glyph grid in use.
    pub const fn text_size(&self) -> TextSize {
        self.size
    }

    /// Replaces the content. Returns `true` when it differs.
    pub fn set_content(&mut self, content: &str) -> bool {
        if self.content == content {
            return false;
        }
        content.clone_into(&mut self.content);
        true
    }

    /// Longest line in characters × glyph advance, line count × line height.
    ///
    /// Empty text still occupies one line.
    pub fn dimensions(&self) -> Size {
        let (columns, lines) = self
            .content
            .lines()
            .fold((0_usize, 0_usize), |(columns, lines), line| {
                (columns.max(line.chars().count()), lines + 1)
            });

        // Glyph counts are far below f32's exact integer range.
        #[allow(clippy::cast_precision_loss)]
        Size::new(
            columns as f32 * self.size.char_width(),
            lines.max(1) as f32 * self.size.line_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_dimensions() {
        let text = Text::new("Test");
        let dims = text.dimensions();
        assert_eq!(dims.width, 4.0 * 10.0); // 4 chars * 10px
        assert_eq!(dims.height, 20.0);
    }

    #[test]
    fn test_multiline_uses_longest_line() {
        let text = Text::new("Now playing\nSide A").size(TextSize::Small);
        assert_eq!(text.dimensions(), Size::new(11.0 * 6.0, 2.0 * 10.0));
    }

    #[test]
    fn test_empty_text_keeps_one_line() {
        assert_eq!(Text::new("").dimensions(), Size::new(0.0, 20.0));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(Text::new("ñandú").dimensions().width, 50.0);
    }

    #[test]
    fn test_set_content_reports_change() {
        let mut text = Text::new("a");
        assert!(!text.set_content("a"));
        assert!(text.set_content("ab"));
        assert_eq!(text.content(), "ab");
    }

    #[test]
    fn test_text_sizes() {
        assert_eq!(TextSize::Small.line_height(), 10.0);
        assert_eq!(TextSize::Normal.line_height(), 20.0);
        assert_eq!(TextSize::Large.char_width(), 16.0);
        assert_eq!(TextSize::default(), TextSize::Normal);
    }
}
