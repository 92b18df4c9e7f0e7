//! Rendering a string as glyph rows

use std::iter::repeat_n;

use crate::font::Font;

/// A string laid out as glyph rows in a given [`Font`].
///
/// Each line is the horizontal concatenation of the glyph rows of the
/// string's characters; a literal space contributes the font's space width
/// in blank columns instead. Every line has the same length, provided the
/// font's glyphs have rows of consistent length (font-data discipline, not
/// re-checked here).
#[derive(Debug)]
pub struct StyledText {
    lines: Vec<String>,
    length: usize,
}

impl StyledText {
    /// Renders `text` in `font`.
    ///
    /// An empty string yields `font.height()` empty lines.
    #[must_use]
    pub fn new(text: &str, font: &Font) -> Self {
        let lines: Vec<String> = (0..font.height())
            .map(|row| Self::build_row(text, font, row))
            .collect();
        let length = lines.first().map_or(0, String::len);
        Self { lines, length }
    }

    fn build_row(text: &str, font: &Font, row: usize) -> String {
        let mut line = String::new();
        for character in text.chars() {
            if character == ' ' {
                line.extend(repeat_n(' ', font.space_width()));
            } else {
                line.push_str(font.glyph(character).row(row));
            }
        }
        line
    }

    /// The rendered lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The column count of a rendered line.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The number of rendered lines, ie the font height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::StyledText;
    use crate::font::{Font, tests::TINY};

    fn tiny() -> Font {
        Font::parse(TINY, 1).unwrap()
    }

    #[test]
    fn concatenates_glyph_rows() {
        let text = StyledText::new("A B", &tiny());
        assert_eq!(text.lines(), ["# ##"]);
        assert_eq!(text.length(), 4);
    }

    #[test]
    fn empty_string_renders_empty_rows() {
        let font = Font::parse("3 1\nA 1\n#\n#\n#\n", 2).unwrap();
        let text = StyledText::new("", &font);
        assert_eq!(text.lines(), ["", "", ""]);
        assert_eq!(text.length(), 0);
        assert_eq!(text.height(), 3);
    }

    #[test]
    fn space_occupies_space_width_columns() {
        let font = Font::parse(TINY, 3).unwrap();
        let text = StyledText::new(" ", &font);
        assert_eq!(text.lines(), ["   "]);
    }

    #[test]
    fn unknown_characters_render_the_fallback_glyph() {
        let text = StyledText::new("?B", &tiny());
        assert_eq!(text.lines(), ["###"]);
    }

    #[test]
    fn trailing_glyph_spaces_survive() {
        let font = Font::parse("1 1\nA 3\n # \n", 1).unwrap();
        let text = StyledText::new("AA", &font);
        assert_eq!(text.lines(), [" #  # "]);
        assert_eq!(text.length(), 6);
    }

    #[test]
    fn lines_have_equal_length() {
        let font = Font::parse("2 2\nH 3\nH.H\nH.H\nI 1\n|\n|\n", 2).unwrap();
        let text = StyledText::new("HI HI", &font);
        assert_eq!(text.height(), 2);
        for line in text.lines() {
            assert_eq!(line.len(), text.length());
        }
    }
}
