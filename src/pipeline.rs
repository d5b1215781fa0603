//! Full-run driver: calibrate, then trace and emit every included glyph.

use std::io::Write;

use crate::calibrate::calibrate;
use crate::cxf::{self, Header};
use crate::error::CxfError;
use crate::font::GlyphSource;
use crate::tracer::{TraceMode, Tracer};

/// Highest character code included without the extended flag.
const BASIC_RANGE_MAX: u32 = 255;

/// Run-wide configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum angle, in degrees, subtended by one chord of a flattened arc
    pub tolerance_degrees: f64,
    /// Include character codes above 255
    pub extended: bool,
    /// Header fields for the output file
    pub header: Header,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tolerance_degrees: 50.0,
            extended: false,
            header: Header::default(),
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Glyph records written
    pub written: usize,
    /// Glyphs above the basic range skipped because extended mode was off
    pub skipped_extended: usize,
    /// Glyphs dropped because their outline failed to decompose or trace
    pub failed: usize,
}

/// Convert every included glyph of `source` into CXF records on `output`.
///
/// Calibration runs first and its failure is fatal; a failure in any single
/// glyph is logged and that glyph is skipped. The scale factor is fixed
/// before the first record is written and never changes afterwards.
pub fn convert(
    source: &impl GlyphSource,
    options: &Options,
    output: &mut impl Write,
) -> Result<Summary, CxfError> {
    let factor = calibrate(source, options.tolerance_degrees)?;
    log::info!("Scale factor: {factor}");

    cxf::write_header(output, &options.header)?;

    let tracer = Tracer::new(options.tolerance_degrees, TraceMode::Emit { factor });
    let mut summary = Summary::default();
    for charcode in source.charcodes() {
        if charcode > BASIC_RANGE_MAX && !options.extended {
            summary.skipped_extended += 1;
            continue;
        }
        let trace = source
            .outline(charcode)
            .and_then(|commands| tracer.trace(&commands));
        match trace {
            Ok(trace) => {
                cxf::write_glyph(output, charcode, &trace.chords)?;
                summary.written += 1;
            }
            Err(error) => {
                log::warn!("Skipping U+{charcode:04X}: {error}");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::path::PathCommand;
    use kurbo::Point;
    use pretty_assertions::assert_eq;

    struct TestFont {
        glyphs: Vec<(u32, Vec<PathCommand>)>,
    }

    impl TestFont {
        fn with_charcodes(charcodes: &[u32]) -> Self {
            // Every glyph is the same 900-unit-tall triangle, so the scale
            // factor is 9/900 = 0.01.
            let outline = vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(250.0, 900.0)),
                PathCommand::LineTo(Point::new(500.0, 0.0)),
            ];
            Self {
                glyphs: charcodes
                    .iter()
                    .map(|&code| (code, outline.clone()))
                    .collect(),
            }
        }
    }

    impl GlyphSource for TestFont {
        fn family_name(&self) -> Option<String> {
            Some("Synthetic".to_string())
        }

        fn charcodes(&self) -> Vec<u32> {
            self.glyphs.iter().map(|(code, _)| *code).collect()
        }

        fn outline(&self, codepoint: u32) -> Result<Vec<PathCommand>, CxfError> {
            self.glyphs
                .iter()
                .find(|(code, _)| *code == codepoint)
                .map(|(_, commands)| commands.clone())
                .ok_or(CxfError::NoSuchGlyph { codepoint })
        }
    }

    fn run(font: &TestFont, extended: bool) -> (Summary, String) {
        let options = Options {
            extended,
            ..Options::default()
        };
        let mut out = Vec::new();
        let summary = convert(font, &options, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn basic_range_only_without_extended_flag() {
        let font = TestFont::with_charcodes(&[65, 200, 300]);
        let (summary, text) = run(&font, false);
        assert_eq!(
            summary,
            Summary {
                written: 2,
                skipped_extended: 1,
                failed: 0
            }
        );
        assert!(text.contains("[#0041]"));
        assert!(text.contains("[#00C8]"));
        assert!(!text.contains("[#012C]"));
    }

    #[test]
    fn extended_flag_includes_high_charcodes() {
        let font = TestFont::with_charcodes(&[65, 200, 300]);
        let (summary, text) = run(&font, true);
        assert_eq!(
            summary,
            Summary {
                written: 3,
                skipped_extended: 0,
                failed: 0
            }
        );
        assert!(text.contains("[#012C]"));
    }

    #[test]
    fn coordinates_are_scaled_to_cap_height() {
        let font = TestFont::with_charcodes(&[65]);
        let (_, text) = run(&font, false);
        assert!(text.contains("L 0.000000,0.000000,2.500000,9.000000 "));
    }

    #[test]
    fn bad_glyph_is_skipped_not_fatal() {
        let mut font = TestFont::with_charcodes(&[65, 66, 67]);
        // Glyph B draws before establishing a cursor.
        font.glyphs[1].1 = vec![PathCommand::LineTo(Point::new(1.0, 1.0))];
        let (summary, text) = run(&font, false);
        assert_eq!(
            summary,
            Summary {
                written: 2,
                skipped_extended: 0,
                failed: 1
            }
        );
        assert!(!text.contains("[#0042]"));
        assert!(text.contains("[#0043]"));
    }

    #[test]
    fn missing_reference_glyph_aborts_run() {
        let font = TestFont::with_charcodes(&[66]);
        let mut out = Vec::new();
        let result = convert(&font, &Options::default(), &mut out);
        assert!(matches!(result, Err(CxfError::Calibration(_))));
        // Nothing is written when calibration fails.
        assert!(out.is_empty());
    }
}
