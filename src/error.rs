use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CxfError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    #[error("Error reading font: {0}")]
    FontRead(#[from] skrifa::raw::ReadError),

    #[error("No glyph for character code U+{codepoint:04X}")]
    NoSuchGlyph { codepoint: u32 },

    #[error("Error decomposing glyph for U+{codepoint:04X}: {source}")]
    Draw {
        codepoint: u32,
        source: skrifa::outline::DrawError,
    },

    #[error("Ill-formed outline: drawing command before any MoveTo")]
    MissingMoveTo,

    #[error("Cannot calibrate scale factor: {0}")]
    Calibration(String),
}
