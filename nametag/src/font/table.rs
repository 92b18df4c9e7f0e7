//! Font identifiers and the process-wide font table
//!
//! Fonts are addressed by [`FontId`] and loaded at most once per
//! [`FontTable`]; the decoded [`Font`] is reused for every later lookup.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use thiserror::Error;

use super::{Font, FontError};

#[cfg(feature = "fonts")]
use nametag_fonts::FontFile;

/// Identifier of one of the fonts the tag is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// The large face used for the name line.
    Roman,
    /// The smaller face used for the status line.
    Medium,
}

impl FontId {
    /// An array containing all the variants
    pub const ALL: [Self; 2] = [Self::Roman, Self::Medium];

    /// The resource file name, relative to the font directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Roman => "roman.txt",
            Self::Medium => "medium.txt",
        }
    }

    /// The number of blank columns a literal space occupies in this font.
    #[must_use]
    pub const fn space_width(self) -> usize {
        match self {
            Self::Roman => 10,
            Self::Medium => 5,
        }
    }

    #[cfg(feature = "fonts")]
    const fn built_in(self) -> FontFile {
        match self {
            Self::Roman => FontFile::Roman,
            Self::Medium => FontFile::Medium,
        }
    }
}

/// A cache of decoded fonts, keyed by [`FontId`].
///
/// Fonts are loaded lazily on first [`get`](FontTable::get) and never
/// reloaded for the lifetime of the table.
#[derive(Debug)]
pub struct FontTable {
    source: Source,
    loaded: HashMap<FontId, Font>,
}

#[derive(Debug, Clone)]
enum Source {
    #[cfg(feature = "fonts")]
    BuiltIn,
    Directory(PathBuf),
}

impl FontTable {
    /// A table over the fonts bundled in the `nametag-fonts` crate.
    ///
    /// Only available with the `fonts` feature.
    #[cfg(feature = "fonts")]
    #[must_use]
    pub fn built_in() -> Self {
        Self {
            source: Source::BuiltIn,
            loaded: HashMap::new(),
        }
    }

    /// A table over font resources addressed by file name relative to
    /// `directory`.
    #[must_use]
    pub fn from_dir(directory: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(directory.into()),
            loaded: HashMap::new(),
        }
    }

    /// Returns the font for `id`, loading it on first use.
    ///
    /// # Errors
    /// Returns `Err` if the font resource is missing, unreadable, or
    /// malformed; see [`LoadError`] for details.
    pub fn get(&mut self, id: FontId) -> Result<&Font, LoadError> {
        if !self.loaded.contains_key(&id) {
            let font = self.load(id)?;
            drop(self.loaded.insert(id, font));
        }
        Ok(&self.loaded[&id])
    }

    fn load(&self, id: FontId) -> Result<Font, LoadError> {
        let (font, warnings) = match &self.source {
            #[cfg(feature = "fonts")]
            Source::BuiltIn => Font::parse_with_warnings(id.built_in().as_str(), id.space_width())
                .map_err(|source| LoadError::Format {
                    name: id.file_name().to_owned(),
                    source,
                })?,
            Source::Directory(directory) => {
                let path = directory.join(id.file_name());
                let text = fs::read_to_string(&path).map_err(|source| LoadError::Resource {
                    path: path.clone(),
                    source,
                })?;
                Font::parse_with_warnings(&text, id.space_width()).map_err(|source| {
                    LoadError::Format {
                        name: path.display().to_string(),
                        source,
                    }
                })?
            }
        };
        for warning in &warnings {
            warn!("{}: {warning}", id.file_name());
        }
        debug!("loaded {} with {} glyphs", id.file_name(), font.glyph_count());
        Ok(font)
    }
}

/// An error in loading a font resource
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource is missing or unreadable.
    #[error("could not read font resource {}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The resource was read but could not be decoded.
    #[error("could not decode font {name}")]
    Format {
        name: String,
        #[source]
        source: FontError,
    },
}
