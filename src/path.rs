use kurbo::Point;
use skrifa::outline::OutlinePen;

/// One command of a glyph outline, in font design units.
///
/// A well-formed outline starts with a [`PathCommand::MoveTo`]; the tracer
/// rejects anything else as its first drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begin a new subpath at the point
    MoveTo(Point),
    /// A straight segment from the current point
    LineTo(Point),
    /// A quadratic Bézier from the current point
    QuadTo { control: Point, end: Point },
    /// A cubic Bézier from the current point
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
}

fn point(x: f32, y: f32) -> Point {
    Point::new(x as f64, y as f64)
}

/// A pen which records the commands it is given.
///
/// This turns skrifa's callback-driven outline replay into a plain command
/// sequence we can hand to the tracer.
#[derive(Debug, Clone, Default)]
pub struct CommandPen {
    commands: Vec<PathCommand>,
}

impl CommandPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pen and return the recorded commands
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }
}

impl OutlinePen for CommandPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(point(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(point(x, y)));
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo {
            control: point(cx0, cy0),
            end: point(x, y),
        });
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo {
            control1: point(cx0, cy0),
            control2: point(cx1, cy1),
            end: point(x, y),
        });
    }

    fn close(&mut self) {
        // CXF strokes are open polylines; closing a contour emits nothing.
        // The font's final on-curve point already coincides with the start
        // for closed TrueType contours.
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn pen_records_commands_in_order() {
        let mut pen = CommandPen::new();
        pen.move_to(0.0, 0.0);
        pen.line_to(10.0, 0.0);
        pen.quad_to(15.0, 5.0, 10.0, 10.0);
        pen.close();
        let commands = pen.into_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(commands[1], PathCommand::LineTo(Point::new(10.0, 0.0)));
        assert_eq!(
            commands[2],
            PathCommand::QuadTo {
                control: Point::new(15.0, 5.0),
                end: Point::new(10.0, 10.0)
            }
        );
    }
}
