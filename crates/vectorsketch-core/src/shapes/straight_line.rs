//! Straight line shape.

use super::{SceneObject, Shape, ShapeId, ShapeStyle};
use crate::dragger::{Accessor, Dragger, DraggerStyle};
use crate::hit;
use crate::palette::ColorSource;
use crate::surface::{self, Surface};
use crate::vec2;
use kurbo::Point;
use uuid::Uuid;

/// A line segment that can be dragged around by its endpoints.
#[derive(Debug, Clone)]
pub struct StraightLine {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Style properties.
    pub style: ShapeStyle,
}

impl StraightLine {
    /// Create a new line.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
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

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        vec2::distance(self.end, self.start)
    }

    fn endpoint(is_end: bool) -> Accessor<Point> {
        Accessor::new(
            move |shape: &Shape| shape.as_line().map(|l| if is_end { l.end } else { l.start }),
            move |shape: &mut Shape, p| {
                if let Some(line) = shape.as_line_mut() {
                    if is_end {
                        line.end = p;
                    } else {
                        line.start = p;
                    }
                }
            },
        )
    }
}

impl SceneObject for StraightLine {
    fn draw(&self, surface: &mut dyn Surface, _colors: &mut dyn ColorSource) {
        let ShapeStyle {
            stroke_width,
            color,
            ..
        } = self.style;
        surface::stroke_line(surface, self.start, self.end, stroke_width, color);
    }

    fn is_hit(&self, pos: Point) -> bool {
        hit::segment_hit(pos, self.start, self.end, self.style.stroke_width)
    }

    fn create_draggers(&self) -> Vec<Dragger> {
        let style = DraggerStyle::handle(self.style.color);
        vec![
            Dragger::point(Self::endpoint(false), style),
            Dragger::point(Self::endpoint(true), style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FixedColor;
    use crate::shapes::Rgb;
    use crate::surface::Recorder;

    #[test]
    fn test_line_creation() {
        let line = StraightLine::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_on_line() {
        let line = StraightLine::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.is_hit(Point::new(50.0, 0.0)));
        assert!(line.is_hit(Point::new(50.0, 2.5)));
        assert!(!line.is_hit(Point::new(50.0, 4.0)));
    }

    #[test]
    fn test_hit_every_point_on_diagonal() {
        let line = StraightLine::new(Point::new(10.0, 20.0), Point::new(70.0, 100.0));
        for i in 0..=20 {
            let p = vec2::lerp(line.start, line.end, i as f64 / 20.0);
            assert!(line.is_hit(p));
        }
    }

    #[test]
    fn test_draw_single_stroke() {
        let line = StraightLine::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        let mut recorder = Recorder::new();
        line.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        let segments = recorder.stroked_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].from, line.start);
        assert_eq!(segments[0].to, line.end);
        assert_eq!(segments[0].color, line.style.color);
    }

    #[test]
    fn test_endpoint_draggers() {
        let mut shape = Shape::from(StraightLine::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));
        let draggers = shape.create_draggers();
        assert_eq!(draggers.len(), 2);
        draggers[0].drag(&mut shape, Point::new(-5.0, 3.0));
        let line = shape.as_line().expect("still a line");
        assert_eq!(line.start, Point::new(-5.0, 3.0));
        assert_eq!(line.end, Point::new(10.0, 0.0));
    }
}
