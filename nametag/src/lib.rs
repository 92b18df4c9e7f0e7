//! A crate for rendering a person's name and status as a bordered ASCII-art
//! name tag, using glyphs from bitmap font definition files.
//!
//! # Example
//!
//! ```
//! use nametag::font::FontTable;
//! use nametag::tag::NameTag;
//!
//! let mut fonts = FontTable::built_in();
//! let tag = NameTag::compose("Ada", "Lovelace", "Analyst", &mut fonts)?;
//! for line in tag.lines() {
//!     println!("{line}");
//! }
//! # Ok::<(), nametag::font::LoadError>(())
//! ```
//!
//! ## Feature flags
//!
//! - `fonts` (default): bundles the "Roman" and "Medium" font definitions
//!   from the `nametag-fonts` package (via a dependency), made available
//!   through [`FontTable::built_in()`](crate::font::FontTable::built_in)

pub mod font;
pub mod render;
pub mod tag;
