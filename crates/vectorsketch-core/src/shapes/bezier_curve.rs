//! Cubic Bézier curve shape.

use super::{Rgb, SceneObject, Shape, ShapeId, ShapeStyle, TickMark, TickStyle};
use crate::bezier::{self, ControlPolygon, Refinement, Split, SubdivisionVisitor};
use crate::dragger::{Accessor, Dragger, DraggerStyle};
use crate::hit;
use crate::palette::ColorSource;
use crate::surface::{self, Surface};
use kurbo::Point;
use uuid::Uuid;

/// Stroke width of the diagnostic control polygons.
const CONTROL_POLYGON_WIDTH: f64 = 1.0;

/// A cubic Bézier drawn by recursive subdivision of its control polygon.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    pub(crate) id: ShapeId,
    pub polygon: ControlPolygon,
    /// Blend parameter used at every split.
    pub t: f64,
    pub refinement: Refinement,
    /// Draw every polygon that gets split, each in a fresh colour.
    pub show_control_polygons: bool,
    /// Draw a tick mark at every split point.
    pub show_tick_marks: bool,
    pub tick_style: TickStyle,
    /// Style properties.
    pub style: ShapeStyle,
}

impl BezierCurve {
    /// Create a curve split at `t = 0.5` with the default refinement.
    pub fn new(polygon: ControlPolygon) -> Self {
        Self {
            id: Uuid::new_v4(),
            polygon,
            t: 0.5,
            refinement: Refinement::default(),
            show_control_polygons: false,
            show_tick_marks: false,
            tick_style: TickStyle::default(),
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Subdivide to exactly `steps` levels.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.refinement = Refinement::FixedDepth { steps };
        self
    }

    pub fn with_refinement(mut self, refinement: Refinement) -> Self {
        self.refinement = refinement;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Leaf polygons of the current subdivision.
    pub fn leaves(&self) -> Vec<ControlPolygon> {
        bezier::flatten(&self.polygon, self.t, self.refinement)
    }

    /// The flattened curve as one connected polyline.
    pub fn polyline(&self) -> Vec<Point> {
        bezier::polyline(&self.leaves())
    }

    fn control_point(index: usize) -> Accessor<Point> {
        Accessor::new(
            move |shape: &Shape| shape.as_bezier().map(|b| b.polygon.points[index]),
            move |shape: &mut Shape, p| {
                if let Some(curve) = shape.as_bezier_mut() {
                    curve.polygon.points[index] = p;
                }
            },
        )
    }
}

impl Default for BezierCurve {
    fn default() -> Self {
        Self::new(ControlPolygon::default())
    }
}

fn stroke_legs(surface: &mut dyn Surface, polygon: &ControlPolygon, width: f64, color: Rgb) {
    for (from, to) in polygon.legs() {
        surface::stroke_line(surface, from, to, width, color);
    }
}

struct DrawVisitor<'a> {
    curve: &'a BezierCurve,
    surface: &'a mut dyn Surface,
    colors: &'a mut dyn ColorSource,
}

impl SubdivisionVisitor for DrawVisitor<'_> {
    fn control_polygon(&mut self, polygon: &ControlPolygon, _depth: u32) {
        if self.curve.show_control_polygons {
            let color = self.colors.next_color();
            stroke_legs(self.surface, polygon, CONTROL_POLYGON_WIDTH, color);
        }
    }

    fn split(&mut self, split: &Split, _depth: u32) {
        if self.curve.show_tick_marks {
            let tick = TickMark::new(split.point, split.tangent, self.curve.tick_style);
            tick.draw(self.surface, self.colors);
        }
    }

    fn leaf(&mut self, polygon: &ControlPolygon, _depth: u32) {
        let style = self.curve.style;
        stroke_legs(self.surface, polygon, style.stroke_width, style.color);
    }
}

impl SceneObject for BezierCurve {
    fn draw(&self, surface: &mut dyn Surface, colors: &mut dyn ColorSource) {
        let mut visitor = DrawVisitor {
            curve: self,
            surface,
            colors,
        };
        bezier::subdivide(&self.polygon, self.t, self.refinement, &mut visitor);
    }

    fn is_hit(&self, pos: Point) -> bool {
        hit::polyline_hit(pos, &self.polyline(), self.style.stroke_width)
    }

    fn create_draggers(&self) -> Vec<Dragger> {
        let style = DraggerStyle::handle(self.style.color);
        (0..4)
            .map(|i| Dragger::point(Self::control_point(i), style))
            .collect()
    }
}
