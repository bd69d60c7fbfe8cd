//! Immediate-mode drawing surface abstraction.
//!
//! Shapes never talk to a concrete backend. They issue path-building calls
//! followed by `stroke` or `fill`, the same way a 2D canvas context is driven.

use crate::shapes::Rgb;
use kurbo::Point;

/// A minimal immediate-mode 2D drawing surface.
///
/// `move_to`, `line_to` and `arc` build the current path; `stroke` and `fill`
/// paint it and start a new one.
pub trait Surface {
    /// Begin a new subpath at `p`.
    fn move_to(&mut self, p: Point);

    /// Add a straight line from the current point to `p`.
    fn line_to(&mut self, p: Point);

    /// Add a full circle around `center` to the current path.
    fn arc(&mut self, center: Point, radius: f64);

    /// Stroke the current path and clear it.
    fn stroke(&mut self, width: f64, color: Rgb);

    /// Fill the current path and clear it.
    fn fill(&mut self, color: Rgb);
}

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    MoveTo(Point),
    LineTo(Point),
    Arc { center: Point, radius: f64 },
    Stroke { width: f64, color: Rgb },
    Fill { color: Rgb },
}

/// A stroked straight line reconstructed from recorded primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokedSegment {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Rgb,
}

/// Surface that records every call, for hosts that replay frames and for tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded primitives in call order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of `stroke` calls.
    pub fn stroke_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Stroke { .. }))
            .count()
    }

    /// Every straight line that ended up stroked, in drawing order.
    pub fn stroked_segments(&self) -> Vec<StrokedSegment> {
        let mut segments = Vec::new();
        let mut pending: Vec<(Point, Point)> = Vec::new();
        let mut current: Option<Point> = None;

        for primitive in &self.primitives {
            match *primitive {
                Primitive::MoveTo(p) => current = Some(p),
                Primitive::LineTo(p) => {
                    if let Some(from) = current {
                        pending.push((from, p));
                    }
                    current = Some(p);
                }
                Primitive::Arc { .. } => current = None,
                Primitive::Stroke { width, color } => {
                    segments.extend(pending.drain(..).map(|(from, to)| StrokedSegment {
                        from,
                        to,
                        width,
                        color,
                    }));
                    current = None;
                }
                Primitive::Fill { .. } => {
                    pending.clear();
                    current = None;
                }
            }
        }
        segments
    }
}

impl Surface for Recorder {
    fn move_to(&mut self, p: Point) {
        self.primitives.push(Primitive::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.primitives.push(Primitive::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64) {
        self.primitives.push(Primitive::Arc { center, radius });
    }

    fn stroke(&mut self, width: f64, color: Rgb) {
        self.primitives.push(Primitive::Stroke { width, color });
    }

    fn fill(&mut self, color: Rgb) {
        self.primitives.push(Primitive::Fill { color });
    }
}

/// Stroke a single straight line as its own path.
pub fn stroke_line(surface: &mut dyn Surface, from: Point, to: Point, width: f64, color: Rgb) {
    surface.move_to(from);
    surface.line_to(to);
    surface.stroke(width, color);
}
