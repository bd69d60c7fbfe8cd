//! VectorSketch Core Library
//!
//! Interactive 2D vector shapes: Bézier subdivision, hit testing, draggers and
//! the scene controller that ties them to pointer input. Rendering goes
//! through the [`Surface`] trait so the core never depends on a backend.

pub mod bezier;
pub mod config;
pub mod dragger;
pub mod hit;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vec2;

pub use bezier::{ControlPolygon, Refinement, Split, SubdivisionVisitor};
pub use config::{ConfigError, ConfigResult, SketchConfig};
pub use dragger::{DragState, DragValue, Dragger, DraggerStyle};
pub use palette::{ColorSource, FixedColor, RandomColors};
pub use scene::{SceneController, SceneEvent};
pub use shapes::{
    BezierCurve, Circle, ParametricCurve, Rgb, SceneObject, Shape, ShapeId, ShapeStyle,
    StraightLine, TickMark, TickStyle,
};
pub use surface::{Primitive, Recorder, Surface};
