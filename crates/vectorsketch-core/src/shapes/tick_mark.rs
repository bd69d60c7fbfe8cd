//! Tick marks showing where a curve was sampled.

use super::{Rgb, SceneObject};
use crate::dragger::Dragger;
use crate::palette::ColorSource;
use crate::surface::{self, Surface};
use crate::vec2;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// How tick marks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub width: f64,
    pub color: Rgb,
    /// Scale applied to the (unnormalized) normal on each side of the anchor.
    pub length: f64,
}

impl Default for TickStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Rgb::red(),
            length: 0.2,
        }
    }
}

/// A short stroke across a curve, perpendicular to its tangent.
///
/// Derived display geometry: built for one redraw and then dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Where the tick crosses the curve.
    pub point: Point,
    pub from: Point,
    pub to: Point,
    pub style: TickStyle,
}

impl TickMark {
    /// Build a tick at `point`, perpendicular to the direction `tangent.0 -> tangent.1`.
    ///
    /// The normal is not normalized, so the tick grows with the spacing of the
    /// tangent reference points.
    pub fn new(point: Point, tangent: (Point, Point), style: TickStyle) -> Self {
        let tan = vec2::sub(tangent.1, tangent.0);
        let normal = vec2::scale(Vec2::new(-tan.y, tan.x), style.length);
        Self {
            point,
            from: vec2::add(point, -normal),
            to: vec2::add(point, normal),
            style,
        }
    }
}

impl SceneObject for TickMark {
    fn draw(&self, surface: &mut dyn Surface, _colors: &mut dyn ColorSource) {
        surface::stroke_line(surface, self.from, self.to, self.style.width, self.style.color);
    }

    /// Ticks are never picked; clicking one should not steal the curve's selection.
    fn is_hit(&self, _pos: Point) -> bool {
        false
    }

    fn create_draggers(&self) -> Vec<Dragger> {
        Vec::new()
    }
}
