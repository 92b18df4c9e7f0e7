//! Bitmap fonts
//!
//! Font types and the logic for decoding font definition files.
//!
//! A font definition is plain text: a header line with the glyph height (rows
//! per glyph) and the number of glyphs, followed by one block per glyph — a
//! header line with the glyph's character and declared width, then exactly
//! `height` literal rows. Rows are kept verbatim; trailing and interior
//! spaces are part of the glyph.

mod table;

use std::collections::HashMap;

use itertools::Itertools as _;
use thiserror::Error;

#[cfg(feature = "fonts")]
pub use nametag_fonts::FontFile;

pub use table::{FontId, FontTable, LoadError};

/// A bitmap font: a collection of [`Glyph`]s sharing a fixed line height.
#[derive(Debug)]
pub struct Font {
    height: usize,
    space_width: usize,
    glyphs: HashMap<char, Glyph>,
    fallback: char,
}

impl Font {
    /// Decodes the contents of a font definition file.
    ///
    /// `space_width` is the number of blank columns a literal space occupies
    /// when rendering; it is renderer configuration tied to the font, not
    /// part of the file format.
    ///
    /// This is a convenience wrapper around [`Font::parse_with_warnings`],
    /// ignoring the warnings.
    ///
    /// # Errors
    /// Returns `Err` on a fatal decoding error; see [`FontError`] for details.
    pub fn parse(source: &str, space_width: usize) -> Result<Self, FontError> {
        Self::parse_with_warnings(source, space_width).map(|(font, _)| font)
    }

    /// Decodes a font definition and also returns any non-fatal issues found
    /// while decoding.
    ///
    /// See [`FontWarning`] for details on these warnings. Notably, a glyph
    /// whose declared width disagrees with its row data is only a warning:
    /// the declared width is informational and the rows are used as-is.
    ///
    /// # Errors
    /// Returns `Err` on a fatal decoding error; see [`FontError`] for details.
    pub fn parse_with_warnings(
        source: &str,
        space_width: usize,
    ) -> Result<(Self, Vec<FontWarning>), FontError> {
        let mut warnings = Vec::new();
        let mut lines = source.lines();
        let Some(header_line) = lines.next() else {
            return Err(FontError::BadHeader(HeaderError::Missing));
        };
        let (height, glyph_count) = Self::decode_header(header_line)?;

        let mut glyphs = HashMap::new();
        let mut fallback = None;
        let mut decoded = 0;
        for mut rows in &lines
            .by_ref()
            .take(glyph_count * (height + 1))
            .chunks(height + 1)
        {
            let glyph_header = rows.next().expect("chunk size >= 1");
            let (character, width) = Self::decode_glyph_header(glyph_header)?;
            let glyph = Glyph::decode(character, width, rows, height, &mut warnings)?;
            _ = fallback.get_or_insert(character);
            // A character defined twice keeps the later definition.
            if glyphs.insert(character, glyph).is_some() {
                warnings.push(FontWarning::DuplicateGlyph(character));
            }
            decoded += 1;
        }
        if decoded < glyph_count {
            return Err(FontError::MissingGlyphs {
                found: decoded,
                expected: glyph_count,
            });
        }
        if let Some(line) = lines.next() {
            warnings.push(FontWarning::AfterGlyphs(line.to_owned()));
        }
        let Some(fallback) = fallback else {
            return Err(FontError::Empty);
        };

        Ok((
            Self {
                height,
                space_width,
                glyphs,
                fallback,
            },
            warnings,
        ))
    }

    fn decode_header(header_line: &str) -> Result<(usize, usize), HeaderError> {
        let mut parameters = header_line
            .split(' ')
            .filter(|parameter| !parameter.is_empty());
        let Some([height, glyph_count]) = parameters.next_array() else {
            return Err(HeaderError::NotEnoughParameters(header_line.to_owned()));
        };
        let height = IntParameter::Height.decode(height)?;
        if height == 0 {
            return Err(HeaderError::ZeroHeight);
        }
        let glyph_count = IntParameter::GlyphCount.decode(glyph_count)?;
        Ok((height, glyph_count))
    }

    fn decode_glyph_header(line: &str) -> Result<(char, usize), FontError> {
        let mut parameters = line.split(' ').filter(|parameter| !parameter.is_empty());
        let Some([character, width]) = parameters.next_array() else {
            return Err(FontError::BadGlyphHeader(line.to_owned()));
        };
        let Ok(character) = character.chars().exactly_one() else {
            return Err(FontError::BadGlyphHeader(line.to_owned()));
        };
        let Ok(width) = width.parse() else {
            return Err(FontError::BadGlyphHeader(line.to_owned()));
        };
        Ok((character, width))
    }

    /// The number of rows in every glyph of this font.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The number of blank columns a literal space occupies.
    #[must_use]
    pub const fn space_width(&self) -> usize {
        self.space_width
    }

    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns the glyph for `character`.
    ///
    /// Lookup is total: a character with no glyph in this font resolves to
    /// the first glyph in load order. Callers must accept this as defined
    /// behavior, not an error.
    #[must_use]
    pub fn glyph(&self, character: char) -> &Glyph {
        self.glyphs
            .get(&character)
            .unwrap_or_else(|| &self.glyphs[&self.fallback])
    }
}

/// The multi-line rendering of one character in a [`Font`].
#[derive(Debug)]
pub struct Glyph {
    character: char,
    width: usize,
    rows: Vec<String>,
}

impl Glyph {
    fn decode<'a>(
        character: char,
        width: usize,
        rows: impl Iterator<Item = &'a str>,
        height: usize,
        warnings: &mut Vec<FontWarning>,
    ) -> Result<Self, FontError> {
        let rows: Vec<String> = rows.map(str::to_owned).collect();
        if rows.len() != height {
            return Err(FontError::MissingRows {
                character,
                found: rows.len(),
                expected: height,
            });
        }
        let actual = match rows.iter().map(String::len).unique().exactly_one() {
            Ok(actual) => actual,
            Err(widths) => {
                warnings.push(FontWarning::InconsistentWidth(character));
                widths.max().expect("height is non-zero")
            }
        };
        if actual != width {
            warnings.push(FontWarning::DeclaredWidthMismatch {
                character,
                declared: width,
                actual,
            });
        }
        Ok(Self {
            character,
            width,
            rows,
        })
    }

    /// The character this glyph represents.
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// The width declared in the font file. Informational only; the row data
    /// is authoritative.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// One row of the glyph, verbatim from the font file.
    ///
    /// # Panics
    /// Panics if `index` is not less than the font height.
    #[must_use]
    pub fn row(&self, index: usize) -> &str {
        &self.rows[index]
    }
}

#[derive(Debug, Clone, Copy)]
enum IntParameter {
    Height,
    GlyphCount,
}

impl IntParameter {
    fn decode(self, text: &str) -> Result<usize, HeaderError> {
        text.parse()
            .map_err(|_| HeaderError::Parse(self.name(), text.to_owned()))
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Height => "Height",
            Self::GlyphCount => "Glyph_Count",
        }
    }
}

/// An error in decoding a font definition
#[derive(Debug, Error)]
pub enum FontError {
    /// An error in decoding the header
    #[error("bad header: {0}")]
    BadHeader(#[from] HeaderError),
    /// A glyph header line that is not a single character followed by a width
    #[error(r#""{0}" is not a glyph header"#)]
    BadGlyphHeader(String),
    /// A glyph whose rows run short of the font height
    #[error("glyph '{character}' has {found} of {expected} rows")]
    MissingRows {
        character: char,
        found: usize,
        expected: usize,
    },
    /// Fewer glyph blocks than the header declared
    #[error("expected {expected} glyphs but found {found}")]
    MissingGlyphs { found: usize, expected: usize },
    /// A font that declares no glyphs at all; lookup could never resolve
    #[error("font defines no glyphs")]
    Empty,
}

/// An error in decoding a font definition header
#[derive(Debug, Error)]
pub enum HeaderError {
    /// There is no header, ie the source is empty.
    #[error("missing header")]
    Missing,
    /// The header has fewer than two parameters.
    #[error(r#""{0}" does not include enough parameters"#)]
    NotEnoughParameters(String),
    /// One of the integer parameters cannot be parsed.
    #[error(r#""{1}" cannot be parsed as the parameter `{0}`"#)]
    Parse(&'static str, String),
    /// The height parameter is 0.
    #[error("height parameter is 0")]
    ZeroHeight,
}

/// A non-fatal issue with a font definition found while decoding
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum FontWarning {
    /// A glyph's rows do not all have the same length. Rendered text stays
    /// aligned only when every glyph has rows of consistent length.
    #[error("glyph '{0}' has rows of inconsistent length")]
    InconsistentWidth(char),
    /// A glyph's declared width differs from its actual row length.
    #[error("glyph '{character}' declares width {declared} but its rows are {actual} columns")]
    DeclaredWidthMismatch {
        character: char,
        declared: usize,
        actual: usize,
    },
    /// The same character is defined more than once; the last definition wins.
    #[error("glyph '{0}' is defined more than once")]
    DuplicateGlyph(char),
    /// The source contains data after the declared number of glyphs.
    #[error("unexpected content after glyphs: {0}")]
    AfterGlyphs(String),
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{Font, FontError, FontWarning, HeaderError};

    /// Height 1, glyphs `A` = `#` and `B` = `##`.
    pub(crate) const TINY: &str = "1 2\nA 1\n#\nB 2\n##\n";

    fn tiny() -> Font {
        Font::parse(TINY, 1).unwrap()
    }

    #[test]
    fn parse_tiny() {
        let (font, warnings) = Font::parse_with_warnings(TINY, 1).unwrap();
        assert_eq!(warnings, []);
        assert_eq!(font.height(), 1);
        assert_eq!(font.space_width(), 1);
        assert_eq!(font.glyph_count(), 2);
        assert_eq!(font.glyph('A').row(0), "#");
        assert_eq!(font.glyph('B').row(0), "##");
    }

    #[test]
    fn rows_are_read_verbatim() {
        let font = Font::parse("2 1\n! 4\n !! \n !  \n", 1).unwrap();
        let glyph = font.glyph('!');
        assert_eq!(glyph.row(0), " !! ");
        assert_eq!(glyph.row(1), " !  ");
        assert_eq!(glyph.width(), 4);
    }

    #[test]
    fn lookup_miss_falls_back_to_first_glyph() {
        let font = tiny();
        assert_eq!(font.glyph('Z').character(), 'A');
        assert_eq!(font.glyph(' ').character(), 'A');
        assert_eq!(font.glyph('B').character(), 'B');
    }

    #[test]
    fn missing_header() {
        assert!(matches!(
            Font::parse("", 1),
            Err(FontError::BadHeader(HeaderError::Missing))
        ));
    }

    #[test]
    fn header_with_one_parameter() {
        assert!(matches!(
            Font::parse("3\n", 1),
            Err(FontError::BadHeader(HeaderError::NotEnoughParameters(_)))
        ));
    }

    #[test]
    fn unparseable_height() {
        assert!(matches!(
            Font::parse("x 2\n", 1),
            Err(FontError::BadHeader(HeaderError::Parse("Height", _)))
        ));
    }

    #[test]
    fn zero_height() {
        assert!(matches!(
            Font::parse("0 1\nA 1\n", 1),
            Err(FontError::BadHeader(HeaderError::ZeroHeight))
        ));
    }

    #[test]
    fn bad_glyph_header() {
        assert!(matches!(
            Font::parse("1 1\nAB 2\n#\n", 1),
            Err(FontError::BadGlyphHeader(_))
        ));
        assert!(matches!(
            Font::parse("1 1\nA x\n#\n", 1),
            Err(FontError::BadGlyphHeader(_))
        ));
    }

    #[test]
    fn truncated_glyph_rows() {
        assert!(matches!(
            Font::parse("2 1\nA 1\n#\n", 1),
            Err(FontError::MissingRows {
                character: 'A',
                found: 1,
                expected: 2,
            })
        ));
    }

    #[test]
    fn missing_glyphs() {
        assert!(matches!(
            Font::parse("1 2\nA 1\n#\n", 1),
            Err(FontError::MissingGlyphs {
                found: 1,
                expected: 2,
            })
        ));
    }

    #[test]
    fn empty_font() {
        assert!(matches!(Font::parse("1 0\n", 1), Err(FontError::Empty)));
    }

    #[test]
    fn declared_width_is_not_enforced() {
        let (font, warnings) = Font::parse_with_warnings("1 1\nA 3\n#\n", 1).unwrap();
        assert_eq!(font.glyph('A').row(0), "#");
        assert_eq!(font.glyph('A').width(), 3);
        assert_eq!(
            warnings,
            [FontWarning::DeclaredWidthMismatch {
                character: 'A',
                declared: 3,
                actual: 1,
            }]
        );
    }

    #[test]
    fn inconsistent_rows_warn() {
        let (_, warnings) = Font::parse_with_warnings("2 1\nA 2\n##\n#\n", 1).unwrap();
        assert_eq!(warnings, [FontWarning::InconsistentWidth('A')]);
    }

    #[test]
    fn duplicate_glyph_keeps_last_definition() {
        let (font, warnings) = Font::parse_with_warnings("1 2\nA 1\n#\nA 1\n@\n", 1).unwrap();
        assert_eq!(warnings, [FontWarning::DuplicateGlyph('A')]);
        assert_eq!(font.glyph('A').row(0), "@");
        // The fallback resolves by character, so it sees the surviving glyph.
        assert_eq!(font.glyph('Z').row(0), "@");
    }

    #[test]
    fn trailing_content_warns() {
        let (_, warnings) = Font::parse_with_warnings("1 1\nA 1\n#\nextra\n", 1).unwrap();
        assert_eq!(warnings, [FontWarning::AfterGlyphs("extra".to_owned())]);
    }

    #[cfg(feature = "fonts")]
    #[test]
    fn decode_all_bundled() {
        use super::FontFile;

        for file in FontFile::ALL {
            let (font, warnings) = Font::parse_with_warnings(file.as_str(), 1)
                .unwrap_or_else(|e| panic!("failed to decode {}: {e}", file.name()));
            assert_eq!(warnings, [], "warnings decoding {}", file.name());
            assert!(font.glyph_count() > 0);
        }
    }
}
