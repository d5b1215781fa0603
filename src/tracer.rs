//! Replays one glyph's outline commands and collects straight-line chords.

use kurbo::{Line, Point};

use crate::error::CxfError;
use crate::flatten::flatten_quad;
use crate::path::PathCommand;

/// What a trace is for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceMode {
    /// Record the outline's maximum y endpoint; emit no chords. Used by the
    /// scale calibrator before the scale factor exists.
    Measure,
    /// Emit chords, each coordinate multiplied by `factor`.
    Emit { factor: f64 },
}

/// The result of tracing one glyph.
#[derive(Debug, Clone)]
pub struct Trace {
    /// Flattened chords, already scaled. Empty in measure mode.
    pub chords: Vec<Line>,
    /// Highest y endpoint seen, in font design units. Only meaningful in
    /// measure mode; starts at negative infinity for an empty outline.
    pub max_y: f64,
}

/// Drives the curve flattener over a glyph's command sequence.
///
/// One `trace` call handles exactly one glyph; the cursor is bound by the
/// glyph's first MoveTo and never survives beyond the call.
#[derive(Debug, Clone, Copy)]
pub struct Tracer {
    tolerance_degrees: f64,
    mode: TraceMode,
}

fn scaled(line: Line, factor: f64) -> Line {
    Line::new(
        Point::new(line.p0.x * factor, line.p0.y * factor),
        Point::new(line.p1.x * factor, line.p1.y * factor),
    )
}

impl Tracer {
    pub fn new(tolerance_degrees: f64, mode: TraceMode) -> Self {
        Self {
            tolerance_degrees,
            mode,
        }
    }

    /// Replay `commands`, producing the glyph's chords and extent.
    ///
    /// Fails with [`CxfError::MissingMoveTo`] if a drawing command arrives
    /// before the cursor has been established; a trace never inherits a
    /// cursor from a previous glyph.
    pub fn trace(&self, commands: &[PathCommand]) -> Result<Trace, CxfError> {
        let emit_factor = match self.mode {
            TraceMode::Measure => None,
            TraceMode::Emit { factor } => Some(factor),
        };
        let mut cursor: Option<Point> = None;
        let mut chords = Vec::new();
        let mut max_y = f64::NEG_INFINITY;
        // The extent is harvested from command endpoints only, matching the
        // calibration contract; intermediate flattened points don't count.
        let mut measure = |point: Point| {
            if emit_factor.is_none() && point.y > max_y {
                max_y = point.y;
            }
        };
        for command in commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    cursor = Some(point);
                }
                PathCommand::LineTo(point) => {
                    let from = cursor.ok_or(CxfError::MissingMoveTo)?;
                    if let Some(factor) = emit_factor {
                        chords.push(scaled(Line::new(from, point), factor));
                    }
                    measure(point);
                    cursor = Some(point);
                }
                PathCommand::QuadTo { control, end } => {
                    let from = cursor.ok_or(CxfError::MissingMoveTo)?;
                    if let Some(factor) = emit_factor {
                        flatten_quad(from, control, end, self.tolerance_degrees, &mut |line| {
                            chords.push(scaled(line, factor))
                        });
                    }
                    measure(end);
                    cursor = Some(end);
                }
                // Cubics collapse to a single chord to their end point;
                // the control points are ignored.
                PathCommand::CubicTo { end, .. } => {
                    let from = cursor.ok_or(CxfError::MissingMoveTo)?;
                    if let Some(factor) = emit_factor {
                        chords.push(scaled(Line::new(from, end), factor));
                    }
                    measure(end);
                    cursor = Some(end);
                }
            }
        }
        Ok(Trace { chords, max_y })
    }
}
