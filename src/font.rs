//! The font side of the conversion boundary.

use std::fs;
use std::path::Path;

use skrifa::{
    outline::{DrawError, DrawSettings},
    prelude::{LocationRef, Size},
    raw::FontRef,
    string::StringId,
    MetadataProvider,
};

use crate::error::CxfError;
use crate::path::{CommandPen, PathCommand};

/// Supplies glyph outlines and the character map they hang off.
///
/// The pipeline is written against this trait so that tests can drive it
/// with synthetic glyphs; [`TtfFont`] is the real implementation.
pub trait GlyphSource {
    /// The font's family name, if it records one.
    fn family_name(&self) -> Option<String>;

    /// Character codes present in the font's character map, in whatever
    /// order the font enumerates them.
    fn charcodes(&self) -> Vec<u32>;

    /// The outline commands for the glyph mapped to `codepoint`, in font
    /// design units. The first command of a non-empty outline is always a
    /// MoveTo.
    fn outline(&self, codepoint: u32) -> Result<Vec<PathCommand>, CxfError>;
}

/// A TrueType/OpenType font file, read through skrifa.
pub struct TtfFont {
    data: Vec<u8>,
}

impl TtfFont {
    /// Read a font file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CxfError> {
        Self::new(fs::read(path)?)
    }

    /// Wrap already-loaded font bytes.
    pub fn new(data: Vec<u8>) -> Result<Self, CxfError> {
        // Parse the table directory up front so a bad file fails here, once,
        // rather than per glyph.
        FontRef::new(&data)?;
        Ok(Self { data })
    }

    fn font(&self) -> Result<FontRef<'_>, CxfError> {
        Ok(FontRef::new(&self.data)?)
    }
}

impl GlyphSource for TtfFont {
    fn family_name(&self) -> Option<String> {
        let font = self.font().ok()?;
        font.localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|name| name.to_string())
    }

    fn charcodes(&self) -> Vec<u32> {
        self.font()
            .map(|font| font.charmap().mappings().map(|(code, _)| code).collect())
            .unwrap_or_default()
    }

    fn outline(&self, codepoint: u32) -> Result<Vec<PathCommand>, CxfError> {
        let font = self.font()?;
        let glyph_id = font
            .charmap()
            .map(codepoint)
            .ok_or(CxfError::NoSuchGlyph { codepoint })?;
        let glyph = font.outline_glyphs().get(glyph_id).ok_or(CxfError::Draw {
            codepoint,
            source: DrawError::GlyphNotFound(glyph_id),
        })?;
        let mut pen = CommandPen::new();
        glyph
            .draw(
                DrawSettings::unhinted(Size::unscaled(), LocationRef::default()),
                &mut pen,
            )
            .map_err(|source| CxfError::Draw { codepoint, source })?;
        Ok(pen.into_commands())
    }
}
