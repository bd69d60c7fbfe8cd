//! Parametric curve `t -> (fx(t), fy(t))`.

use super::{SceneObject, ShapeId, ShapeStyle, TickMark, TickStyle};
use crate::dragger::Dragger;
use crate::hit;
use crate::palette::ColorSource;
use crate::surface::{self, Surface};
use kurbo::Point;
use std::fmt;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A coordinate function of the curve parameter.
pub type CurveFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Offset of the tangent reference samples used for tick marks.
const TANGENT_DELTA: f64 = 0.1;

/// A curve sampled at `segments` evenly spaced parameters in `(min_t, max_t]`.
pub struct ParametricCurve {
    pub(crate) id: ShapeId,
    fx: CurveFn,
    fy: CurveFn,
    /// Lower end of the parameter domain.
    pub min_t: f64,
    /// Upper end of the parameter domain.
    pub max_t: f64,
    /// Number of samples, at least 1.
    pub segments: usize,
    /// Draw a tick mark at every sample.
    pub show_tick_marks: bool,
    pub tick_style: TickStyle,
    /// Style properties.
    pub style: ShapeStyle,
    /// Samples from the last draw.
    points: RwLock<Vec<Point>>,
}

impl Clone for ParametricCurve {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            fx: Arc::clone(&self.fx),
            fy: Arc::clone(&self.fy),
            min_t: self.min_t,
            max_t: self.max_t,
            segments: self.segments,
            show_tick_marks: self.show_tick_marks,
            tick_style: self.tick_style,
            style: self.style,
            points: RwLock::new(self.points()),
        }
    }
}

impl fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("id", &self.id)
            .field("min_t", &self.min_t)
            .field("max_t", &self.max_t)
            .field("segments", &self.segments)
            .field("show_tick_marks", &self.show_tick_marks)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ParametricCurve {
    /// Create a curve and take its first set of samples. `segments` below 1 is raised to 1.
    pub fn new(
        fx: impl Fn(f64) -> f64 + Send + Sync + 'static,
        fy: impl Fn(f64) -> f64 + Send + Sync + 'static,
        min_t: f64,
        max_t: f64,
        segments: usize,
    ) -> Self {
        let curve = Self {
            id: Uuid::new_v4(),
            fx: Arc::new(fx),
            fy: Arc::new(fy),
            min_t,
            max_t,
            segments: segments.max(1),
            show_tick_marks: false,
            tick_style: TickStyle::default(),
            style: ShapeStyle::default(),
            points: RwLock::new(Vec::new()),
        };
        curve.refresh();
        curve
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_tick_marks(mut self, style: TickStyle) -> Self {
        self.show_tick_marks = true;
        self.tick_style = style;
        self
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Replace the coordinate functions. Samples are stale until the next draw.
    pub fn set_functions(
        &mut self,
        fx: impl Fn(f64) -> f64 + Send + Sync + 'static,
        fy: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) {
        self.fx = Arc::new(fx);
        self.fy = Arc::new(fy);
    }

    /// Parameter of sample `i`.
    pub fn parameter(&self, i: usize) -> f64 {
        let segments = self.segments.max(1);
        self.min_t + (self.max_t - self.min_t) / segments as f64 * (i + 1) as f64
    }

    fn evaluate(&self, t: f64) -> Option<Point> {
        let x = (self.fx)(t);
        let y = (self.fy)(t);
        (x.is_finite() && y.is_finite()).then(|| Point::new(x, y))
    }

    /// Evaluate the curve at every sample parameter.
    ///
    /// Sampling stops at the first non-finite result; the points up to that
    /// sample are returned.
    pub fn sample(&self) -> Vec<Point> {
        let segments = self.segments.max(1);
        let mut points = Vec::with_capacity(segments);
        for i in 0..segments {
            let t = self.parameter(i);
            match self.evaluate(t) {
                Some(p) => points.push(p),
                None => {
                    log::warn!("Parametric curve {} is not finite at t = {}; stopping", self.id, t);
                    break;
                }
            }
        }
        points
    }

    /// Resample and store the result as the current point cache.
    pub fn refresh(&self) -> Vec<Point> {
        let points = self.sample();
        if let Ok(mut cache) = self.points.write() {
            *cache = points.clone();
        }
        points
    }

    /// Samples taken by the last draw (or construction).
    pub fn points(&self) -> Vec<Point> {
        self.points.read().map(|p| p.clone()).unwrap_or_default()
    }

    /// Tick marks at the given samples, perpendicular to the local tangent.
    pub fn tick_marks(&self, points: &[Point]) -> Vec<TickMark> {
        points
            .iter()
            .enumerate()
            .filter_map(|(i, &point)| {
                let t = self.parameter(i);
                let before = self.evaluate(t - TANGENT_DELTA)?;
                let after = self.evaluate(t + TANGENT_DELTA)?;
                Some(TickMark::new(point, (before, after), self.tick_style))
            })
            .collect()
    }
}

impl SceneObject for ParametricCurve {
    fn draw(&self, surface: &mut dyn Surface, colors: &mut dyn ColorSource) {
        let points = self.refresh();
        let width = self.style.stroke_width;
        for pair in points.windows(2) {
            surface::stroke_line(surface, pair[0], pair[1], width, self.style.color);
        }
        if self.show_tick_marks {
            for tick in self.tick_marks(&points) {
                tick.draw(surface, colors);
            }
        }
    }

    fn is_hit(&self, pos: Point) -> bool {
        let points = self.points.read();
        match points {
            Ok(points) => hit::polyline_hit(pos, &points, self.style.stroke_width),
            Err(_) => false,
        }
    }

    fn create_draggers(&self) -> Vec<Dragger> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::FixedColor;
    use crate::shapes::Rgb;
    use crate::surface::Recorder;

    fn circle_curve(segments: usize) -> ParametricCurve {
        ParametricCurve::new(
            |t| 350.0 + 100.0 * t.sin(),
            |t| 150.0 + 100.0 * t.cos(),
            0.0,
            5.0,
            segments,
        )
    }

    #[test]
    fn test_sample_count_matches_segments() {
        let curve = circle_curve(20);
        assert_eq!(curve.points().len(), 20);
        assert!((curve.parameter(19) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_domain_offset() {
        let curve = ParametricCurve::new(|t| t, |_| 0.0, 2.0, 4.0, 4);
        let xs: Vec<f64> = curve.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.5, 3.0, 3.5, 4.0]);
    }

    #[test]
    fn test_draw_strokes_between_samples() {
        let curve = circle_curve(20);
        let mut recorder = Recorder::new();
        curve.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        assert_eq!(recorder.stroked_segments().len(), 19);
    }

    #[test]
    fn test_non_finite_stops_sampling() {
        let fx = |t: f64| if t > 3.0 { f64::NAN } else { t };
        let curve = ParametricCurve::new(fx, |t| t, 0.0, 5.0, 5);
        assert_eq!(curve.points().len(), 3);

        let mut recorder = Recorder::new();
        curve.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        assert_eq!(recorder.stroked_segments().len(), 2);
    }

    #[test]
    fn test_invalid_everywhere_draws_nothing() {
        let curve = ParametricCurve::new(|t| (-t - 1.0).sqrt(), |t| t, 0.0, 1.0, 10);
        let mut recorder = Recorder::new();
        curve.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        assert!(recorder.primitives().is_empty());
        assert!(!curve.is_hit(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_cache_stale_until_draw() {
        let mut curve = ParametricCurve::new(|t| t * 10.0, |_| 0.0, 0.0, 1.0, 2);
        assert!(curve.is_hit(Point::new(7.0, 0.0)));

        curve.set_functions(|t| t * 10.0, |_| 100.0);
        assert!(curve.is_hit(Point::new(7.0, 0.0)));
        assert!(!curve.is_hit(Point::new(7.0, 100.0)));

        curve.draw(&mut Recorder::new(), &mut FixedColor(Rgb::black()));
        assert!(!curve.is_hit(Point::new(7.0, 0.0)));
        assert!(curve.is_hit(Point::new(7.0, 100.0)));
    }

    #[test]
    fn test_tick_marks_per_sample() {
        let curve = circle_curve(20).with_tick_marks(TickStyle::default());
        let mut recorder = Recorder::new();
        curve.draw(&mut recorder, &mut FixedColor(Rgb::black()));
        assert_eq!(recorder.stroked_segments().len(), 19 + 20);
    }

    #[test]
    fn test_no_draggers() {
        assert!(circle_curve(4).create_draggers().is_empty());
    }
}
