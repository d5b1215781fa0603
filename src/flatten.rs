//! Adaptive flattening of quadratic Bézier segments.
//!
//! A quadratic is chopped into straight chords by bisecting the parameter
//! interval until the arc subtended by each chord falls under the angular
//! tolerance. The step size grows again after every accepted chord, so flat
//! stretches of a curve are covered quickly.

use kurbo::{Line, Point};

/// Squared-length threshold below which geometry is treated as flat.
const DEGENERATE_EPSILON: f64 = 1e-6;

/// Evaluate the quadratic Bézier `(p0, control, end)` at parameter `t`.
fn quad_point(p0: Point, control: Point, end: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * p0.x + 2.0 * t * mt * control.x + t * t * end.x,
        mt * mt * p0.y + 2.0 * t * mt * control.y + t * t * end.y,
    )
}

/// Angle subtended by the arc through `b1`, `mid`, `b2`, estimated from the
/// circle fitted to the chord `b1→b2` and the sagitta at `mid`.
///
/// Returns zero when either half-segment is degenerately short, so that
/// near-singular geometry never reaches the acceptance test.
fn chord_angle(b1: Point, mid: Point, b2: Point) -> f64 {
    if (mid - b1).hypot2() < DEGENERATE_EPSILON || (b2 - mid).hypot2() < DEGENERATE_EPSILON {
        return 0.0;
    }
    let chord = (b2 - b1).hypot();
    let sagitta = (mid - b1.midpoint(b2)).hypot();
    // s == 0 gives an infinite radius and therefore a zero angle.
    let radius = (chord * chord / 4.0 + sagitta * sagitta) / (2.0 * sagitta);
    2.0 * ((chord / 2.0) / radius).asin()
}

/// Flatten one quadratic Bézier segment into straight chords.
///
/// `emit` is called once per chord, in curve order. Each accepted chord
/// subtends no more than `tolerance_degrees` of arc; a quadratic whose
/// control point already lies on the start–end segment yields exactly one
/// chord.
pub fn flatten_quad(
    p0: Point,
    control: Point,
    end: Point,
    tolerance_degrees: f64,
    emit: &mut impl FnMut(Line),
) {
    flatten_quad_steps(p0, control, end, tolerance_degrees, &mut |line, _, _| {
        emit(line)
    });
}

/// As [`flatten_quad`], but also reporting each chord's parameter interval.
/// The adaptive loop never moves `t1` backwards and clamps the final `t2`
/// to exactly 1.0.
fn flatten_quad_steps(
    p0: Point,
    control: Point,
    end: Point,
    tolerance_degrees: f64,
    emit: &mut impl FnMut(Line, f64, f64),
) {
    // A control point sitting on the chord means the curve is a straight
    // line; emit it as one chord rather than subdividing.
    let span = end - p0;
    let span_len2 = span.hypot2();
    if span_len2 > DEGENERATE_EPSILON {
        let offset = control - p0;
        let t = span.dot(offset) / span_len2;
        let deviation2 = {
            let cross = span.cross(offset);
            cross * cross / span_len2
        };
        if deviation2 < DEGENERATE_EPSILON && (0.0..=1.0).contains(&t) {
            emit(Line::new(p0, end), 0.0, 1.0);
            return;
        }
    }

    let tolerance = tolerance_degrees.to_radians();
    let mut t1 = 0.0;
    let mut step = 0.25;
    let mut b1 = p0;
    while t1 < 1.0 {
        let mut t2 = t1 + step;
        if t2 >= 1.0 {
            t2 = 1.0;
        }
        let b2 = quad_point(p0, control, end, t2);
        let mid = quad_point(p0, control, end, (t1 + t2) / 2.0);
        if chord_angle(b1, mid, b2) > tolerance {
            // Too much curvature under this chord; retry the same t1 with
            // a finer interval.
            step /= 2.0;
        } else {
            emit(Line::new(b1, b2), t1, t2);
            step *= 2.0;
            t1 = t2;
            b1 = b2;
        }
    }
}
