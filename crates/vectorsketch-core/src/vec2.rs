//! Point and vector arithmetic on top of kurbo.
//!
//! All functions are pure: operands are `Copy` values and are never mutated.

use kurbo::{Point, Vec2};

/// Component-wise sum of a point and a vector.
pub fn add(a: Point, b: Vec2) -> Point {
    Point::new(a.x + b.x, a.y + b.y)
}

/// Vector from `b` to `a`.
pub fn sub(a: Point, b: Point) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

/// Scale a vector by `k`.
pub fn scale(v: Vec2, k: f64) -> Vec2 {
    Vec2::new(v.x * k, v.y * k)
}

/// Euclidean length of a vector.
pub fn length(v: Vec2) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    length(sub(a, b))
}

/// Linear blend `(1 - t) * a + t * b`.
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y)
}

/// Project `p` onto the line through `a` and `b`.
///
/// Returns `t` such that the projection equals `a + t * (b - a)`. The value is
/// not clamped, so callers decide what range counts as "on the segment".
///
/// A degenerate segment (`a == b`) has no direction to project onto; `None` is
/// returned and callers are expected to treat that segment as a miss.
pub fn project_onto_segment(p: Point, a: Point, b: Point) -> Option<f64> {
    let ab = sub(b, a);
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return None;
    }
    let ap = sub(p, a);
    Some((ap.x * ab.x + ap.y * ab.y) / len_sq)
}

/// Point at parameter `t` along `a -> b`.
pub fn point_on_segment(a: Point, b: Point, t: f64) -> Point {
    add(a, scale(sub(b, a), t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_does_not_mutate() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        let d = sub(b, a);
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert_eq!(add(a, d), b);
        assert_eq!(scale(d, 2.0), Vec2::new(6.0, 8.0));
        assert!((length(d) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_projection_midpoint() {
        let t = project_onto_segment(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert_eq!(t, Some(0.5));
    }

    #[test]
    fn test_projection_outside_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(project_onto_segment(Point::new(-5.0, 1.0), a, b), Some(-0.5));
        assert_eq!(project_onto_segment(Point::new(20.0, 1.0), a, b), Some(2.0));
    }

    #[test]
    fn test_projection_degenerate() {
        let a = Point::new(3.0, 3.0);
        assert_eq!(project_onto_segment(Point::new(0.0, 0.0), a, a), None);
    }

    #[test]
    fn test_lerp() {
        let p = lerp(Point::new(0.0, 0.0), Point::new(10.0, 20.0), 0.25);
        assert_eq!(p, Point::new(2.5, 5.0));
    }
}
