//! Name tag composition

use std::iter::repeat_n;

use crate::font::{FontId, FontTable, LoadError};
use crate::render::StyledText;

/// The symbol the tag frame is drawn with.
pub const BORDER_SYMBOL: char = '8';
/// Thickness of the frame, in columns.
pub const BORDER_WIDTH: usize = 2;
/// Blank columns between the frame and the widest text line.
pub const BORDER_PADDING: usize = 2;

/// Font the name line is set in.
pub const NAME_FONT: FontId = FontId::Roman;
/// Font the status line is set in.
pub const STATUS_FONT: FontId = FontId::Medium;

/// A bordered name tag, ready for printing.
///
/// The lines are ordered top to bottom: top border, name rows, status rows,
/// bottom border. Every line is exactly the tag length.
#[derive(Debug)]
pub struct NameTag {
    lines: Vec<String>,
}

impl NameTag {
    /// Composes the tag for `"{first_name} {last_name}"` over `status`,
    /// loading the two fonts through `fonts`.
    ///
    /// # Errors
    /// Returns `Err` if either font fails to load; see [`LoadError`].
    pub fn compose(
        first_name: &str,
        last_name: &str,
        status: &str,
        fonts: &mut FontTable,
    ) -> Result<Self, LoadError> {
        let name = StyledText::new(&format!("{first_name} {last_name}"), fonts.get(NAME_FONT)?);
        let status = StyledText::new(status, fonts.get(STATUS_FONT)?);
        Ok(Self::from_texts(&name, &status))
    }

    fn from_texts(name: &StyledText, status: &StyledText) -> Self {
        let tag_length = name.length().max(status.length()) + 2 * (BORDER_WIDTH + BORDER_PADDING);
        let line_count = name.height() + status.height() + 2;
        let lines = (0..line_count)
            .map(|index| Self::build_line(index, tag_length, name, status))
            .collect();
        Self { lines }
    }

    fn build_line(
        index: usize,
        tag_length: usize,
        name: &StyledText,
        status: &StyledText,
    ) -> String {
        let name_height = name.height();
        let last = name_height + status.height() + 1;
        match index {
            0 => Self::border(tag_length),
            _ if index <= name_height => Self::content_line(tag_length, &name.lines()[index - 1]),
            _ if index < last => {
                Self::content_line(tag_length, &status.lines()[index - 1 - name_height])
            }
            _ if index == last => Self::border(tag_length),
            _ => unreachable!("tag line {index} out of range"),
        }
    }

    fn border(tag_length: usize) -> String {
        repeat_n(BORDER_SYMBOL, tag_length).collect()
    }

    /// A bordered blank template with `text_row` overwritten at the centered
    /// offset `(tag_length - text_row.len()) / 2`, left-biased when the
    /// difference is odd. A row wider than the interior overwrites border
    /// columns rather than being clipped.
    fn content_line(tag_length: usize, text_row: &str) -> String {
        let mut line: String = repeat_n(BORDER_SYMBOL, BORDER_WIDTH)
            .chain(repeat_n(' ', tag_length - 2 * BORDER_WIDTH))
            .chain(repeat_n(BORDER_SYMBOL, BORDER_WIDTH))
            .collect();
        let start = (line.len() - text_row.len()) / 2;
        line.replace_range(start..start + text_row.len(), text_row);
        line
    }

    /// The printable lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
