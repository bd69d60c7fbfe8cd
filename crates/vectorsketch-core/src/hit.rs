//! Pointer hit testing shared by all shapes.

use crate::vec2;
use kurbo::Point;

/// Extra pick sensitivity around a stroke, in pixels.
pub const HIT_SLACK: f64 = 2.0;

/// How far from the ideal geometry a pointer may be and still hit a stroke.
pub fn tolerance(stroke_width: f64) -> f64 {
    stroke_width / 2.0 + HIT_SLACK
}

/// Whether `pos` hits the straight segment `a -> b`.
///
/// The projection parameter `t` is unnormalized (`1` is the far endpoint) but
/// its upper bound is the segment's length, not `1`. For segments longer than
/// one unit this accepts pointers beyond `b` along the line. Degenerate
/// segments never hit.
pub fn segment_hit(pos: Point, a: Point, b: Point, stroke_width: f64) -> bool {
    let Some(t) = vec2::project_onto_segment(pos, a, b) else {
        return false;
    };
    if t < 0.0 || t > vec2::distance(b, a) {
        return false;
    }
    let projected = vec2::point_on_segment(a, b, t);
    vec2::distance(projected, pos) <= tolerance(stroke_width)
}

/// Whether `pos` hits any segment of the connected polyline `points`.
pub fn polyline_hit(pos: Point, points: &[Point], stroke_width: f64) -> bool {
    points
        .windows(2)
        .any(|w| segment_hit(pos, w[0], w[1], stroke_width))
}

/// Whether `pos` hits the outline of a circle.
///
/// Only a ring of width `2 * tolerance` around the circumference counts, even
/// for filled circles.
pub fn annulus_hit(pos: Point, center: Point, radius: f64, stroke_width: f64) -> bool {
    let tol = tolerance(stroke_width);
    let d = vec2::distance(pos, center);
    d >= radius - tol && d <= radius + tol
}

/// Whether `pos` lies within `radius` (plus slack) of `center`.
pub fn disc_hit(pos: Point, center: Point, radius: f64, stroke_width: f64) -> bool {
    vec2::distance(pos, center) <= radius + tolerance(stroke_width)
}
