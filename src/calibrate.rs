//! Derives the run-wide scale factor from a reference glyph.

use crate::error::CxfError;
use crate::font::GlyphSource;
use crate::tracer::{TraceMode, Tracer};

/// Nominal cap height of the CXF format, in output units.
pub const CAP_HEIGHT: f64 = 9.0;

/// The glyph whose extent defines the font's cap height. Capital A spans
/// the full cap height in virtually every font.
pub const REFERENCE_CHAR: char = 'A';

/// Compute the factor mapping font design units to output units, such that
/// the reference glyph is exactly [`CAP_HEIGHT`] units tall.
///
/// Every coordinate written later is multiplied by this factor, so any
/// failure here is fatal to the whole run.
pub fn calibrate(source: &impl GlyphSource, tolerance_degrees: f64) -> Result<f64, CxfError> {
    let commands = source
        .outline(REFERENCE_CHAR as u32)
        .map_err(|error| CxfError::Calibration(format!("tracing reference glyph: {error}")))?;
    let trace = Tracer::new(tolerance_degrees, TraceMode::Measure)
        .trace(&commands)
        .map_err(|error| CxfError::Calibration(format!("tracing reference glyph: {error}")))?;
    if trace.max_y <= 0.0 {
        return Err(CxfError::Calibration(
            "reference glyph has no vertical extent".to_string(),
        ));
    }
    Ok(CAP_HEIGHT / trace.max_y)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::path::PathCommand;
    use kurbo::Point;

    struct OneGlyph {
        charcode: u32,
        commands: Vec<PathCommand>,
    }

    impl GlyphSource for OneGlyph {
        fn family_name(&self) -> Option<String> {
            None
        }

        fn charcodes(&self) -> Vec<u32> {
            vec![self.charcode]
        }

        fn outline(&self, codepoint: u32) -> Result<Vec<PathCommand>, CxfError> {
            if codepoint == self.charcode {
                Ok(self.commands.clone())
            } else {
                Err(CxfError::NoSuchGlyph { codepoint })
            }
        }
    }

    fn reference(height: f64) -> OneGlyph {
        OneGlyph {
            charcode: 'A' as u32,
            commands: vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(250.0, height)),
                PathCommand::LineTo(Point::new(500.0, 0.0)),
            ],
        }
    }

    #[test]
    fn factor_maps_reference_height_to_cap_height() {
        let factor = calibrate(&reference(900.0), 45.0).unwrap();
        assert!((900.0 * factor - CAP_HEIGHT).abs() < 1e-12);
    }

    #[test]
    fn missing_reference_glyph_is_fatal() {
        let font = OneGlyph {
            charcode: 'B' as u32,
            commands: vec![],
        };
        assert!(matches!(
            calibrate(&font, 45.0),
            Err(CxfError::Calibration(_))
        ));
    }

    #[test]
    fn flat_reference_glyph_is_fatal() {
        assert!(matches!(
            calibrate(&reference(0.0), 45.0),
            Err(CxfError::Calibration(_))
        ));
    }
}
