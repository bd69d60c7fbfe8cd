//! Scene objects: the shapes a sketch is made of.

mod bezier_curve;
mod circle;
mod parametric;
mod straight_line;
mod tick_mark;

pub use bezier_curve::BezierCurve;
pub use circle::Circle;
pub use parametric::{CurveFn, ParametricCurve};
pub use straight_line::StraightLine;
pub use tick_mark::{TickMark, TickStyle};

use crate::dragger::Dragger;
use crate::palette::ColorSource;
use crate::surface::Surface;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque RGB colour, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0)
    }

    /// `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, 255)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// Style properties for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke width.
    pub stroke_width: f64,
    /// Stroke (and fill) colour.
    pub color: Rgb,
    /// Whether closed shapes are filled.
    #[serde(default)]
    pub filled: bool,
}

impl ShapeStyle {
    pub fn new(stroke_width: f64, color: Rgb) -> Self {
        Self {
            stroke_width,
            color,
            filled: false,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::new(2.0, Rgb::red())
    }
}

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// The capability set every scene object provides.
pub trait SceneObject {
    /// Draw into `surface`. `colors` feeds diagnostic strokes.
    fn draw(&self, surface: &mut dyn Surface, colors: &mut dyn ColorSource);

    /// Check if a pointer position hits this object.
    fn is_hit(&self, pos: Point) -> bool;

    /// Handles for direct manipulation. Empty when the object is display-only.
    fn create_draggers(&self) -> Vec<Dragger>;
}

/// Every kind of shape a scene can hold.
#[derive(Debug, Clone)]
pub enum Shape {
    Line(StraightLine),
    Circle(Circle),
    Parametric(ParametricCurve),
    Bezier(BezierCurve),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id,
            Shape::Circle(s) => s.id,
            Shape::Parametric(s) => s.id,
            Shape::Bezier(s) => s.id,
        }
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => &s.style,
            Shape::Circle(s) => &s.style,
            Shape::Parametric(s) => &s.style,
            Shape::Bezier(s) => &s.style,
        }
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        match self {
            Shape::Line(s) => &mut s.style,
            Shape::Circle(s) => &mut s.style,
            Shape::Parametric(s) => &mut s.style,
            Shape::Bezier(s) => &mut s.style,
        }
    }

    /// Short name of the shape kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
            Shape::Parametric(_) => "parametric curve",
            Shape::Bezier(_) => "bezier curve",
        }
    }

    pub fn as_line(&self) -> Option<&StraightLine> {
        match self {
            Shape::Line(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_line_mut(&mut self) -> Option<&mut StraightLine> {
        match self {
            Shape::Line(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            Shape::Circle(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_parametric(&self) -> Option<&ParametricCurve> {
        match self {
            Shape::Parametric(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_parametric_mut(&mut self) -> Option<&mut ParametricCurve> {
        match self {
            Shape::Parametric(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bezier(&self) -> Option<&BezierCurve> {
        match self {
            Shape::Bezier(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bezier_mut(&mut self) -> Option<&mut BezierCurve> {
        match self {
            Shape::Bezier(s) => Some(s),
            _ => None,
        }
    }
}

impl SceneObject for Shape {
    fn draw(&self, surface: &mut dyn Surface, colors: &mut dyn ColorSource) {
        match self {
            Shape::Line(s) => s.draw(surface, colors),
            Shape::Circle(s) => s.draw(surface, colors),
            Shape::Parametric(s) => s.draw(surface, colors),
            Shape::Bezier(s) => s.draw(surface, colors),
        }
    }

    fn is_hit(&self, pos: Point) -> bool {
        match self {
            Shape::Line(s) => s.is_hit(pos),
            Shape::Circle(s) => s.is_hit(pos),
            Shape::Parametric(s) => s.is_hit(pos),
            Shape::Bezier(s) => s.is_hit(pos),
        }
    }

    fn create_draggers(&self) -> Vec<Dragger> {
        match self {
            Shape::Line(s) => s.create_draggers(),
            Shape::Circle(s) => s.create_draggers(),
            Shape::Parametric(s) => s.create_draggers(),
            Shape::Bezier(s) => s.create_draggers(),
        }
    }
}

impl From<StraightLine> for Shape {
    fn from(shape: StraightLine) -> Self {
        Shape::Line(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<ParametricCurve> for Shape {
    fn from(shape: ParametricCurve) -> Self {
        Shape::Parametric(shape)
    }
}

impl From<BezierCurve> for Shape {
    fn from(shape: BezierCurve) -> Self {
        Shape::Bezier(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::new(0x12, 0xab, 0xf0);
        assert_eq!(color.to_hex(), "#12abf0");
        assert_eq!(Rgb::from_hex("#12abf0"), Some(color));
        assert_eq!(Rgb::from_hex("12ABF0"), Some(color));
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#12ab"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_peniko_conversion() {
        let color = Rgb::new(10, 20, 30);
        let peniko: Color = color.into();
        assert_eq!(Rgb::from(peniko), color);
    }

    #[test]
    fn test_style_mut_through_enum() {
        let mut shape = Shape::from(Circle::new(Point::new(0.0, 0.0), 5.0));
        shape.style_mut().stroke_width = 7.0;
        assert!((shape.style().stroke_width - 7.0).abs() < f64::EPSILON);
        assert_eq!(shape.kind(), "circle");
    }
}
