//! Circle shape.

use super::{SceneObject, Shape, ShapeId, ShapeStyle};
use crate::dragger::{Accessor, Dragger, DraggerStyle};
use crate::hit;
use crate::palette::ColorSource;
use crate::surface::Surface;
use kurbo::Point;
use uuid::Uuid;

/// A circle that can be moved by its center and resized by its outline.
#[derive(Debug, Clone)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Center point.
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
    /// Style properties.
    pub style: ShapeStyle,
}

impl Circle {
    /// Create a new circle. Negative radii are clamped to zero.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            radius: radius.max(0.0),
            style: ShapeStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    fn center_accessor() -> Accessor<Point> {
        Accessor::new(
            |shape: &Shape| shape.as_circle().map(|c| c.center),
            |shape: &mut Shape, p| {
                if let Some(circle) = shape.as_circle_mut() {
                    circle.center = p;
                }
            },
        )
    }

    fn radius_accessor() -> Accessor<f64> {
        Accessor::new(
            |shape: &Shape| shape.as_circle().map(|c| c.radius),
            |shape: &mut Shape, r: f64| {
                if let Some(circle) = shape.as_circle_mut() {
                    circle.radius = r.max(0.0);
                }
            },
        )
    }
}

impl SceneObject for Circle {
    fn draw(&self, surface: &mut dyn Surface, _colors: &mut dyn ColorSource) {
        if self.style.filled {
            surface.arc(self.center, self.radius);
            surface.fill(self.style.color);
        }
        surface.arc(self.center, self.radius);
        surface.stroke(self.style.stroke_width, self.style.color);
    }

    fn is_hit(&self, pos: Point) -> bool {
        hit::annulus_hit(pos, self.center, self.radius, self.style.stroke_width)
    }

    fn create_draggers(&self) -> Vec<Dragger> {
        vec![
            Dragger::point(Self::center_accessor(), DraggerStyle::handle(self.style.color)),
            Dragger::radius(
                Self::center_accessor(),
                Self::radius_accessor(),
                DraggerStyle::outline(&self.style),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FixedColor;
    use crate::shapes::Rgb;
    use crate::surface::{Primitive, Recorder};

    fn ring() -> Circle {
        let mut circle = Circle::new(Point::new(0.0, 0.0), 10.0);
        circle.style.stroke_width = 2.0;
        circle
    }

    #[test]
    fn test_annulus_hit() {
        let circle = ring();
        assert!(!circle.is_hit(Point::new(5.0, 0.0)));
        assert!(circle.is_hit(Point::new(11.0, 0.0)));
        assert!(!circle.is_hit(Point::new(20.0, 0.0)));
    }

    #[test]
    fn test_filled_interior_is_not_hit() {
        let mut circle = ring();
        circle.style.filled = true;
        assert!(!circle.is_hit(Point::new(0.0, 0.0)));
        assert!(circle.is_hit(Point::new(0.0, 9.0)));
    }

    #[test]
    fn test_draw_outline_only() {
        let circle = ring();
        let mut recorder = Recorder::new();
        circle.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        assert_eq!(
            recorder.primitives(),
            &[
                Primitive::Arc {
                    center: circle.center,
                    radius: 10.0
                },
                Primitive::Stroke {
                    width: 2.0,
                    color: circle.style.color
                },
            ]
        );
    }

    #[test]
    fn test_draw_filled() {
        let mut circle = ring();
        circle.style.filled = true;
        let mut recorder = Recorder::new();
        circle.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        assert!(matches!(recorder.primitives()[1], Primitive::Fill { .. }));
        assert_eq!(recorder.stroke_count(), 1);
    }

    #[test]
    fn test_center_and_radius_draggers() {
        let mut shape = Shape::from(ring());
        let draggers = shape.create_draggers();
        assert_eq!(draggers.len(), 2);

        draggers[0].drag(&mut shape, Point::new(42.0, 17.0));
        assert_eq!(shape.as_circle().map(|c| c.center), Some(Point::new(42.0, 17.0)));

        // radius follows the pointer's distance from the moved center
        draggers[1].drag(&mut shape, Point::new(42.0, 47.0));
        assert_eq!(shape.as_circle().map(|c| c.radius), Some(30.0));
    }

    #[test]
    fn test_negative_radius_clamped() {
        assert_eq!(Circle::new(Point::ZERO, -3.0).radius, 0.0);
    }
}
