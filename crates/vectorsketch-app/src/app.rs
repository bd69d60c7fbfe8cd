//! Headless application shell.

use clap::Parser;
use kurbo::{Point, Size, Vec2};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vectorsketch_core::config::{ConfigError, SketchConfig};
use vectorsketch_core::palette::RandomColors;
use vectorsketch_core::scene::{SceneController, SceneEvent};
use vectorsketch_core::shapes::ShapeId;
use vectorsketch_render::{DisplayList, RenderContext, RenderError, Renderer};

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("IO error: {0}")]
    Io(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Command-line options.
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "vectorsketch")]
#[command(about = "Build a vector sketch, replay a drag session and export the frame as SVG")]
pub struct AppOptions {
    /// JSON config file (defaults apply when absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output SVG file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Ids of the shapes of the demo sketch.
#[derive(Debug, Clone, Copy)]
struct SketchIds {
    circle: ShapeId,
    bezier: ShapeId,
}

/// The application: a sketch plus the frame rendered from it.
pub struct App {
    config: SketchConfig,
    scene: SceneController,
    ids: SketchIds,
    list: DisplayList,
}

impl App {
    /// Build the demo sketch described by `config`.
    pub fn new(config: SketchConfig) -> Self {
        let mut scene = SceneController::new().with_handle_radius(config.dragger_radius);
        scene.add_shape(config.line());
        let circle = scene.add_shape(config.circle());
        scene.add_shape(config.parametric_curve());
        let bezier = scene.add_shape(config.bezier_curve());
        log::info!("Built sketch with {} shapes", scene.shapes().len());

        Self {
            config,
            scene,
            ids: SketchIds { circle, bezier },
            list: DisplayList::new(),
        }
    }

    /// Load the config named by `options`, or use the defaults.
    pub fn from_options(options: &AppOptions) -> AppResult<Self> {
        let config = match &options.config {
            Some(path) => SketchConfig::load(path)?,
            None => SketchConfig::default(),
        };
        Ok(Self::new(config))
    }

    pub fn scene(&self) -> &SceneController {
        &self.scene
    }

    /// Feed one pointer gesture: press at `from`, drag through `path`, release.
    pub fn gesture(&mut self, from: Point, path: &[Point]) -> Vec<SceneEvent> {
        let mut events = Vec::new();
        events.extend(self.scene.pointer_down(from));
        for &pos in path {
            events.extend(self.scene.pointer_move(pos, true));
        }
        self.scene.pointer_up();
        for event in &events {
            log::debug!("Scene event: {:?}", event);
        }
        events
    }

    /// A short scripted session: resize the circle, then bend the Bézier.
    ///
    /// Each edit takes two gestures, one click to select the shape and one
    /// drag on the handle.
    pub fn run_demo_session(&mut self) -> Vec<SceneEvent> {
        let mut events = Vec::new();

        let ring = self
            .scene
            .shape(self.ids.circle)
            .and_then(|s| s.as_circle())
            .map(|c| Point::new(c.center.x + c.radius, c.center.y));
        if let Some(on_ring) = ring {
            events.extend(self.gesture(on_ring, &[]));
            events.extend(self.gesture(on_ring, &[on_ring + Vec2::new(20.0, 0.0)]));
        }

        let bezier = self
            .scene
            .shape(self.ids.bezier)
            .and_then(|s| s.as_bezier())
            .map(|b| (b.polygon.evaluate(0.5), b.polygon.points[1]));
        if let Some((on_curve, control)) = bezier {
            events.extend(self.gesture(on_curve, &[]));
            let path = [control - Vec2::new(0.0, 15.0), control - Vec2::new(0.0, 30.0)];
            events.extend(self.gesture(control, &path));
        }

        log::info!("Demo session produced {} events", events.len());
        events
    }

    /// Render the current scene into the display list.
    pub fn render(&mut self) -> &DisplayList {
        let ctx = self.render_context();
        let mut colors = match self.config.color_seed {
            Some(seed) => RandomColors::seeded(seed),
            None => RandomColors::from_entropy(),
        };
        self.list.build_scene(&self.scene, &mut colors, &ctx);
        &self.list
    }

    fn render_context(&self) -> RenderContext {
        let size = Size::new(self.config.canvas_width, self.config.canvas_height);
        let ctx = RenderContext::new(size);
        match self.config.background_color() {
            Ok(rgb) => ctx.with_background(rgb.into()),
            Err(e) => {
                log::warn!("{}, using the default canvas colour", e);
                ctx
            }
        }
    }

    /// Render and write the frame as SVG to `path`, or stdout.
    pub fn export(&mut self, path: Option<&Path>) -> AppResult<()> {
        self.render();
        let ctx = self.render_context();
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|e| {
                    AppError::Io(format!("Failed to create {}: {}", path.display(), e))
                })?;
                vectorsketch_render::write_svg(&self.list, &ctx, &mut BufWriter::new(file))?;
                log::info!("Wrote {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                vectorsketch_render::write_svg(&self.list, &ctx, &mut stdout.lock())?;
            }
        }
        Ok(())
    }
}
