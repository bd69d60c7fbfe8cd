//! Draggers: interactive handles bound to a shape property.
//!
//! A dragger never owns the shape it edits. It holds typed accessors that are
//! applied to whatever shape the scene hands it, so draggers stay valid only
//! as long as the selection they were created for.

mod accessor;
mod state;

pub use accessor::Accessor;
pub use state::DragState;

use crate::hit;
use crate::shapes::{Rgb, Shape, ShapeStyle};
use crate::surface::Surface;
use crate::vec2;
use kurbo::Point;

/// Default radius of a point handle.
pub const HANDLE_RADIUS: f64 = 4.0;

/// How a dragger is drawn and picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggerStyle {
    /// Radius of the handle disc (point draggers only).
    pub radius: f64,
    pub color: Rgb,
    /// Stroke width of the outline.
    pub width: f64,
    pub filled: bool,
}

impl DraggerStyle {
    /// Small filled disc in the shape's colour.
    pub fn handle(color: Rgb) -> Self {
        Self {
            radius: HANDLE_RADIUS,
            color,
            width: 0.0,
            filled: true,
        }
    }

    /// Unfilled outline in the shape's colour and width.
    pub fn outline(style: &ShapeStyle) -> Self {
        Self {
            radius: HANDLE_RADIUS,
            color: style.color,
            width: style.stroke_width,
            filled: false,
        }
    }
}

/// The property a dragger manipulates.
#[derive(Debug, Clone)]
pub enum DraggerKind {
    /// A position that follows the pointer.
    Point { position: Accessor<Point> },
    /// A radius around a fixed center, set to the pointer's distance from it.
    Radius {
        center: Accessor<Point>,
        radius: Accessor<f64>,
    },
}

/// The value a drag wrote back to the shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragValue {
    Point(Point),
    Radius(f64),
}

/// An interactive handle.
#[derive(Debug, Clone)]
pub struct Dragger {
    pub kind: DraggerKind,
    pub style: DraggerStyle,
}

impl Dragger {
    /// A handle that moves a point.
    pub fn point(position: Accessor<Point>, style: DraggerStyle) -> Self {
        Self {
            kind: DraggerKind::Point { position },
            style,
        }
    }

    /// A ring that resizes a radius around `center`.
    pub fn radius(center: Accessor<Point>, radius: Accessor<f64>, style: DraggerStyle) -> Self {
        Self {
            kind: DraggerKind::Radius { center, radius },
            style,
        }
    }

    /// Where the handle is anchored on `shape`.
    pub fn anchor(&self, shape: &Shape) -> Option<Point> {
        match &self.kind {
            DraggerKind::Point { position } => position.get(shape),
            DraggerKind::Radius { center, .. } => center.get(shape),
        }
    }

    /// Check if a pointer position hits this handle.
    pub fn is_hit(&self, shape: &Shape, pos: Point) -> bool {
        match &self.kind {
            DraggerKind::Point { position } => position
                .get(shape)
                .is_some_and(|p| hit::disc_hit(pos, p, self.style.radius, self.style.width)),
            DraggerKind::Radius { center, radius } => match (center.get(shape), radius.get(shape)) {
                (Some(c), Some(r)) => hit::annulus_hit(pos, c, r, self.style.width),
                _ => false,
            },
        }
    }

    /// Apply a pointer drag to `pos`, writing through the bound setter.
    ///
    /// Returns the value written, or `None` when the shape no longer has the
    /// property this dragger was created for.
    pub fn drag(&self, shape: &mut Shape, pos: Point) -> Option<DragValue> {
        match &self.kind {
            DraggerKind::Point { position } => {
                position.get(shape)?;
                position.set(shape, pos);
                Some(DragValue::Point(pos))
            }
            DraggerKind::Radius { center, radius } => {
                let c = center.get(shape)?;
                let r = vec2::distance(pos, c);
                radius.set(shape, r);
                Some(DragValue::Radius(r))
            }
        }
    }

    /// Draw the handle for `shape`.
    pub fn draw(&self, shape: &Shape, surface: &mut dyn Surface) {
        let (center, radius) = match &self.kind {
            DraggerKind::Point { position } => match position.get(shape) {
                Some(p) => (p, self.style.radius),
                None => return,
            },
            DraggerKind::Radius { center, radius } => match (center.get(shape), radius.get(shape)) {
                (Some(c), Some(r)) => (c, r),
                _ => return,
            },
        };

        if self.style.filled {
            surface.arc(center, radius);
            surface.fill(self.style.color);
        }
        if self.style.width > 0.0 {
            surface.arc(center, radius);
            surface.stroke(self.style.width, self.style.color);
        }
    }
}
