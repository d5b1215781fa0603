//! Text serialization of the CXF (QCad 2) stroke-font format.
//!
//! One header block, then one record per glyph: a `[#XXXX]` charcode line
//! followed by one `L` line per chord. Floats are written with six decimal
//! places.

use std::io::Write;

use kurbo::Line;

use crate::error::CxfError;

/// The fixed-order CXF header fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Font family name
    pub name: String,
    /// Spacing between letters
    pub letter_spacing: f64,
    /// Spacing between words
    pub word_spacing: f64,
    /// Multiplier on the natural line height
    pub line_spacing_factor: f64,
    /// Author of the font, preferably full name and e-mail address
    pub author: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            letter_spacing: 3.0,
            word_spacing: 6.75,
            line_spacing_factor: 1.0,
            author: "Unknown".to_string(),
        }
    }
}

pub(crate) fn write_header(output: &mut impl Write, header: &Header) -> Result<(), CxfError> {
    writeln!(output, "# Format:            QCad 2 Font")?;
    writeln!(output, "# Creator:           ttf2cxf")?;
    writeln!(output, "# Version:           1")?;
    writeln!(output, "# Name:              {}", header.name)?;
    writeln!(output, "# LetterSpacing:     {:.6}", header.letter_spacing)?;
    writeln!(output, "# WordSpacing:       {:.6}", header.word_spacing)?;
    writeln!(
        output,
        "# LineSpacingFactor: {:.6}",
        header.line_spacing_factor
    )?;
    writeln!(output, "# Author:            {}", header.author)?;
    writeln!(output)?;
    Ok(())
}

pub(crate) fn write_glyph(
    output: &mut impl Write,
    charcode: u32,
    chords: &[Line],
) -> Result<(), CxfError> {
    writeln!(output, "\n[#{charcode:04X}]")?;
    for chord in chords {
        // The trailing space is part of the format as consumed by CAM tools.
        writeln!(
            output,
            "L {:.6},{:.6},{:.6},{:.6} ",
            chord.p0.x, chord.p0.y, chord.p1.x, chord.p1.y
        )?;
    }
    Ok(())
}
