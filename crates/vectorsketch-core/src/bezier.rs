//! Cubic Bézier subdivision (de Casteljau).
//!
//! A curve is flattened by repeatedly splitting its control polygon at a fixed
//! blend parameter `t`. Each split produces two control polygons that together
//! describe the same curve. Once a polygon is accepted as a leaf by the
//! [`Refinement`] strategy, its three legs are used as the flattened geometry.

use crate::vec2;
use kurbo::Point;

/// The four points defining one cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPolygon {
    pub points: [Point; 4],
}

/// Result of one de Casteljau step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    /// `(p0, a0, b0, c0)`.
    pub left: ControlPolygon,
    /// `(c0, b1, a2, p3)`.
    pub right: ControlPolygon,
    /// The split point `c0`; lies on the curve at parameter `t`.
    pub point: Point,
    /// `b0` and `b1`. The curve's tangent at `point` runs along them.
    pub tangent: (Point, Point),
}

impl ControlPolygon {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Build from `[x, y]` pairs.
    pub fn from_coords(coords: [[f64; 2]; 4]) -> Self {
        Self {
            points: coords.map(|[x, y]| Point::new(x, y)),
        }
    }

    /// The three straight legs `p0-p1`, `p1-p2`, `p2-p3`.
    pub fn legs(&self) -> [(Point, Point); 3] {
        let [p0, p1, p2, p3] = self.points;
        [(p0, p1), (p1, p2), (p2, p3)]
    }

    /// Closed-form evaluation of the cubic Bernstein polynomial at `t`.
    pub fn evaluate(&self, t: f64) -> Point {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        let w0 = mt * mt * mt;
        let w1 = 3.0 * mt * mt * t;
        let w2 = 3.0 * mt * t * t;
        let w3 = t * t * t;
        Point::new(
            w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
            w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
        )
    }

    /// One de Casteljau step at `t`. `t` outside `[0, 1]` extrapolates.
    pub fn split(&self, t: f64) -> Split {
        let [p0, p1, p2, p3] = self.points;

        let a0 = vec2::lerp(p0, p1, t);
        let a1 = vec2::lerp(p1, p2, t);
        let a2 = vec2::lerp(p2, p3, t);

        let b0 = vec2::lerp(a0, a1, t);
        let b1 = vec2::lerp(a1, a2, t);

        let c0 = vec2::lerp(b0, b1, t);

        Split {
            left: ControlPolygon::new(p0, a0, b0, c0),
            right: ControlPolygon::new(c0, b1, a2, p3),
            point: c0,
            tangent: (b0, b1),
        }
    }

    /// Largest turning angle, in degrees, between consecutive legs.
    ///
    /// Legs of zero length have no direction and contribute no turn.
    pub fn max_turn_degrees(&self) -> f64 {
        let [l0, l1, l2] = self.legs();
        let v0 = vec2::sub(l0.1, l0.0);
        let v1 = vec2::sub(l1.1, l1.0);
        let v2 = vec2::sub(l2.1, l2.0);
        turn_degrees(v0, v1).max(turn_degrees(v1, v2))
    }
}

impl Default for ControlPolygon {
    fn default() -> Self {
        Self::from_coords([[100.0, 100.0], [150.0, 50.0], [150.0, 150.0], [200.0, 100.0]])
    }
}

fn turn_degrees(a: kurbo::Vec2, b: kurbo::Vec2) -> f64 {
    let la = vec2::length(a);
    let lb = vec2::length(b);
    if la == 0.0 || lb == 0.0 {
        return 0.0;
    }
    let cos = ((a.x * b.x + a.y * b.y) / (la * lb)).abs().min(1.0);
    cos.acos().to_degrees()
}

/// When to stop subdividing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Refinement {
    /// Every branch recurses to exactly `steps` levels, regardless of curvature.
    /// Produces `2^steps` leaf polygons.
    FixedDepth { steps: u32 },
    /// A polygon is a leaf once no two consecutive legs turn by more than
    /// `max_angle_degrees`, or once `max_depth` is reached.
    Flatness { max_angle_degrees: f64, max_depth: u32 },
}

impl Refinement {
    /// Whether `polygon`, reached at `depth`, is emitted as-is.
    pub fn is_leaf(&self, polygon: &ControlPolygon, depth: u32) -> bool {
        match *self {
            Refinement::FixedDepth { steps } => depth >= steps,
            Refinement::Flatness {
                max_angle_degrees,
                max_depth,
            } => depth >= max_depth || polygon.max_turn_degrees() <= max_angle_degrees,
        }
    }
}

impl Default for Refinement {
    fn default() -> Self {
        Refinement::FixedDepth { steps: 5 }
    }
}

/// Callbacks invoked while walking the subdivision tree.
pub trait SubdivisionVisitor {
    /// Called with every polygon that is about to be split.
    fn control_polygon(&mut self, _polygon: &ControlPolygon, _depth: u32) {}

    /// Called after a polygon has been split, before its halves are visited.
    fn split(&mut self, _split: &Split, _depth: u32) {}

    /// Called for each polygon accepted by the refinement strategy, left to right.
    fn leaf(&mut self, polygon: &ControlPolygon, depth: u32);
}

/// Recursively subdivide `polygon` at `t`, reporting to `visitor`.
///
/// Both halves use the same termination test, so the walk is symmetric.
pub fn subdivide(
    polygon: &ControlPolygon,
    t: f64,
    refinement: Refinement,
    visitor: &mut dyn SubdivisionVisitor,
) {
    subdivide_at(polygon, t, refinement, 0, visitor);
}

fn subdivide_at(
    polygon: &ControlPolygon,
    t: f64,
    refinement: Refinement,
    depth: u32,
    visitor: &mut dyn SubdivisionVisitor,
) {
    if refinement.is_leaf(polygon, depth) {
        visitor.leaf(polygon, depth);
        return;
    }

    visitor.control_polygon(polygon, depth);
    let split = polygon.split(t);
    visitor.split(&split, depth);
    subdivide_at(&split.left, t, refinement, depth + 1, visitor);
    subdivide_at(&split.right, t, refinement, depth + 1, visitor);
}

struct LeafCollector(Vec<ControlPolygon>);

impl SubdivisionVisitor for LeafCollector {
    fn leaf(&mut self, polygon: &ControlPolygon, _depth: u32) {
        self.0.push(*polygon);
    }
}

/// Leaf polygons of the subdivision, left to right.
pub fn flatten(polygon: &ControlPolygon, t: f64, refinement: Refinement) -> Vec<ControlPolygon> {
    let mut collector = LeafCollector(Vec::new());
    subdivide(polygon, t, refinement, &mut collector);
    log::debug!(
        "Flattened cubic into {} leaf polygons ({:?})",
        collector.0.len(),
        refinement
    );
    collector.0
}

/// Join leaf polygons into one connected polyline.
///
/// Adjacent leaves share an endpoint, which is kept once.
pub fn polyline(leaves: &[ControlPolygon]) -> Vec<Point> {
    let mut points = Vec::with_capacity(leaves.len() * 3 + 1);
    for (i, leaf) in leaves.iter().enumerate() {
        let skip = if i == 0 { 0 } else { 1 };
        points.extend(leaf.points.iter().skip(skip));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ControlPolygon {
        ControlPolygon::from_coords([[100.0, 100.0], [150.0, 50.0], [150.0, 150.0], [200.0, 100.0]])
    }

    fn close(a: Point, b: Point, eps: f64) -> bool {
        (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
    }

    #[test]
    fn test_zero_steps_emits_original_polygon() {
        let polygon =
            ControlPolygon::from_coords([[0.0, 0.0], [3.0, 7.0], [-2.0, 5.0], [9.0, 1.0]]);
        let leaves = flatten(&polygon, 0.5, Refinement::FixedDepth { steps: 0 });
        assert_eq!(leaves, vec![polygon]);
        assert_eq!(leaves[0].legs().len(), 3);
    }

    #[test]
    fn test_leaf_segment_count() {
        for steps in 0..8 {
            let leaves = flatten(&sample(), 0.5, Refinement::FixedDepth { steps });
            let segments: usize = leaves.iter().map(|l| l.legs().len()).sum();
            assert_eq!(segments, 3 * 2usize.pow(steps));
        }
    }

    #[test]
    fn test_split_point_on_curve() {
        let polygons = [
            sample(),
            ControlPolygon::from_coords([[0.0, 0.0], [0.0, 100.0], [100.0, 100.0], [100.0, 0.0]]),
            ControlPolygon::from_coords([[-13.5, 2.25], [77.0, -41.0], [3.0, 19.5], [12.0, 88.0]]),
        ];
        for polygon in polygons {
            let split = polygon.split(0.5);
            assert!(close(split.point, polygon.evaluate(0.5), 1e-9));
        }
    }

    #[test]
    fn test_split_at_other_parameters() {
        let polygon = sample();
        for t in [0.1, 0.3, 0.77, 0.9] {
            assert!(close(polygon.split(t).point, polygon.evaluate(t), 1e-9));
        }
    }

    #[test]
    fn test_halves_describe_same_curve() {
        let polygon = sample();
        let split = polygon.split(0.5);
        // Left half covers [0, 0.5], right half covers [0.5, 1].
        assert!(close(split.left.evaluate(0.5), polygon.evaluate(0.25), 1e-9));
        assert!(close(split.right.evaluate(0.5), polygon.evaluate(0.75), 1e-9));
    }

    #[test]
    fn test_one_step_end_to_end() {
        let polygon = sample();
        let leaves = flatten(&polygon, 0.5, Refinement::FixedDepth { steps: 1 });
        assert_eq!(leaves.len(), 2);
        let segments: usize = leaves.iter().map(|l| l.legs().len()).sum();
        assert_eq!(segments, 6);

        let mid = polygon.evaluate(0.5);
        assert!(close(leaves[0].points[3], mid, 1e-9));
        assert!(close(leaves[1].points[0], mid, 1e-9));
        assert!(close(mid, Point::new(150.0, 100.0), 1e-9));
    }

    #[test]
    fn test_endpoints_preserved() {
        let polygon = sample();
        let leaves = flatten(&polygon, 0.5, Refinement::FixedDepth { steps: 4 });
        let line = polyline(&leaves);
        assert_eq!(line.first().copied(), Some(polygon.points[0]));
        assert_eq!(line.last().copied(), Some(polygon.points[3]));
        assert_eq!(line.len(), leaves.len() * 3 + 1);
    }

    #[test]
    fn test_out_of_range_t_is_accepted() {
        let polygon = sample();
        let split = polygon.split(1.5);
        assert!(close(split.point, polygon.evaluate(1.5), 1e-9));
    }

    #[test]
    fn test_flatness_stops_on_straight_polygon() {
        let straight =
            ControlPolygon::from_coords([[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        let refinement = Refinement::Flatness {
            max_angle_degrees: 1.0,
            max_depth: 10,
        };
        assert_eq!(flatten(&straight, 0.5, refinement).len(), 1);
    }

    #[test]
    fn test_flatness_refines_curved_polygon() {
        let refinement = Refinement::Flatness {
            max_angle_degrees: 5.0,
            max_depth: 10,
        };
        let leaves = flatten(&sample(), 0.5, refinement);
        assert!(leaves.len() > 1);
        assert!(leaves.len() <= 1 << 10);
        for leaf in &leaves {
            assert!(leaf.max_turn_degrees() <= 5.0 + 1e-9);
        }
    }

    #[test]
    fn test_flatness_respects_max_depth() {
        let refinement = Refinement::Flatness {
            max_angle_degrees: 0.0,
            max_depth: 3,
        };
        assert_eq!(flatten(&sample(), 0.5, refinement).len(), 8);
    }

    #[test]
    fn test_visitor_sees_every_level() {
        #[derive(Default)]
        struct Counter {
            polygons: usize,
            splits: usize,
            leaves: usize,
        }
        impl SubdivisionVisitor for Counter {
            fn control_polygon(&mut self, _polygon: &ControlPolygon, _depth: u32) {
                self.polygons += 1;
            }
            fn split(&mut self, _split: &Split, _depth: u32) {
                self.splits += 1;
            }
            fn leaf(&mut self, _polygon: &ControlPolygon, _depth: u32) {
                self.leaves += 1;
            }
        }

        let mut counter = Counter::default();
        subdivide(&sample(), 0.5, Refinement::FixedDepth { steps: 3 }, &mut counter);
        assert_eq!(counter.leaves, 8);
        assert_eq!(counter.splits, 7);
        assert_eq!(counter.polygons, 7);
    }
}
