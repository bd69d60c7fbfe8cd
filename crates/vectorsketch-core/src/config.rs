//! Sketch configuration, loaded from JSON.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes.

use crate::bezier::{ControlPolygon, Refinement};
use crate::dragger::HANDLE_RADIUS;
use crate::shapes::{
    BezierCurve, Circle, ParametricCurve, Rgb, Shape, ShapeStyle, StraightLine, TickStyle,
};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Deepest Bézier subdivision a config may ask for (`3 · 2^12` segments).
pub const MAX_BEZIER_STEPS: u32 = 12;

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

/// The Bézier curve of the demo sketch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BezierConfig {
    pub points: [[f64; 2]; 4],
    pub t: f64,
    pub steps: u32,
    /// When set, subdivide adaptively until legs turn by at most this many
    /// degrees, never deeper than `steps`.
    pub max_angle_degrees: Option<f64>,
    pub show_control_polygons: bool,
    pub show_tick_marks: bool,
}

impl Default for BezierConfig {
    fn default() -> Self {
        Self {
            points: [[100.0, 100.0], [150.0, 50.0], [150.0, 150.0], [200.0, 100.0]],
            t: 0.5,
            steps: 5,
            max_angle_degrees: None,
            show_control_polygons: false,
            show_tick_marks: false,
        }
    }
}

impl BezierConfig {
    /// Depth is capped at [`MAX_BEZIER_STEPS`] even for configs built in code.
    pub fn refinement(&self) -> Refinement {
        let steps = self.steps.min(MAX_BEZIER_STEPS);
        match self.max_angle_degrees {
            Some(max_angle_degrees) => Refinement::Flatness {
                max_angle_degrees,
                max_depth: steps,
            },
            None => Refinement::FixedDepth { steps },
        }
    }
}

/// The parametric curve of the demo sketch: an ellipse arc
/// `(cx + rx·sin t, cy + ry·cos t)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParametricConfig {
    pub center: [f64; 2],
    pub radii: [f64; 2],
    pub min_t: f64,
    pub max_t: f64,
    pub segments: usize,
    pub show_tick_marks: bool,
}

impl Default for ParametricConfig {
    fn default() -> Self {
        Self {
            center: [350.0, 150.0],
            radii: [100.0, 100.0],
            min_t: 0.0,
            max_t: 5.0,
            segments: 20,
            show_tick_marks: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    pub center: [f64; 2],
    pub radius: f64,
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            center: [450.0, 300.0],
            radius: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            start: [50.0, 350.0],
            end: [250.0, 250.0],
        }
    }
}

/// Top-level sketch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Canvas colour as `#rrggbb`.
    pub background: String,
    /// Style shared by every shape of the demo sketch.
    pub style: ShapeStyle,
    pub tick_style: TickStyle,
    /// Radius of point handles.
    pub dragger_radius: f64,
    /// Seed for control-polygon colours; entropy when absent.
    pub color_seed: Option<u64>,
    pub line: LineConfig,
    pub circle: CircleConfig,
    pub parametric: ParametricConfig,
    pub bezier: BezierConfig,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 600.0,
            canvas_height: 400.0,
            background: "#fafafa".to_string(),
            style: ShapeStyle::default(),
            tick_style: TickStyle::default(),
            dragger_radius: HANDLE_RADIUS,
            color_seed: None,
            line: LineConfig::default(),
            circle: CircleConfig::default(),
            parametric: ParametricConfig::default(),
            bezier: BezierConfig::default(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the sketch cannot be built from.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.bezier.steps > MAX_BEZIER_STEPS {
            return Err(ConfigError::Invalid(format!(
                "bezier.steps is {}, at most {} is allowed",
                self.bezier.steps, MAX_BEZIER_STEPS
            )));
        }
        self.background_color()?;
        Ok(())
    }

    pub fn background_color(&self) -> ConfigResult<Rgb> {
        Rgb::from_hex(&self.background).ok_or_else(|| {
            ConfigError::Invalid(format!("background {:?} is not #rrggbb", self.background))
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded sketch config from {}", path.display());
        Ok(config)
    }

    pub fn line(&self) -> StraightLine {
        StraightLine::new(point(self.line.start), point(self.line.end)).with_style(self.style)
    }

    pub fn circle(&self) -> Circle {
        Circle::new(point(self.circle.center), self.circle.radius).with_style(self.style)
    }

    pub fn parametric_curve(&self) -> ParametricCurve {
        let p = &self.parametric;
        let [cx, cy] = p.center;
        let [rx, ry] = p.radii;
        let mut curve = ParametricCurve::new(
            move |t| cx + rx * t.sin(),
            move |t| cy + ry * t.cos(),
            p.min_t,
            p.max_t,
            p.segments,
        )
        .with_style(self.style);
        curve.tick_style = self.tick_style;
        curve.show_tick_marks = p.show_tick_marks;
        curve
    }

    pub fn bezier_curve(&self) -> BezierCurve {
        let b = &self.bezier;
        let mut curve = BezierCurve::new(ControlPolygon::from_coords(b.points))
            .with_refinement(b.refinement())
            .with_style(self.style);
        curve.t = b.t;
        curve.show_control_polygons = b.show_control_polygons;
        curve.show_tick_marks = b.show_tick_marks;
        curve.tick_style = self.tick_style;
        curve
    }

    /// Every shape of the demo sketch, back to front.
    pub fn shapes(&self) -> Vec<Shape> {
        vec![
            self.line().into(),
            self.circle().into(),
            self.parametric_curve().into(),
            self.bezier_curve().into(),
        ]
    }
}
