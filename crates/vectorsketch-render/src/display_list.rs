//! A [`Surface`] that turns drawing calls into kurbo paths.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{BezPath, Circle, Point, Shape as KurboShape};
use peniko::Color;
use vectorsketch_core::palette::ColorSource;
use vectorsketch_core::scene::SceneController;
use vectorsketch_core::shapes::Rgb;
use vectorsketch_core::surface::Surface;

/// Tolerance used when converting circles to Bézier paths.
const ARC_TOLERANCE: f64 = 0.1;

/// One painted path.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Stroke { path: BezPath, width: f64, color: Color },
    Fill { path: BezPath, color: Color },
}

impl DrawCommand {
    pub fn path(&self) -> &BezPath {
        match self {
            DrawCommand::Stroke { path, .. } | DrawCommand::Fill { path, .. } => path,
        }
    }
}

/// Draw commands of one frame, in painting order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    current: BezPath,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.current = BezPath::new();
    }

    fn take_path(&mut self) -> Option<BezPath> {
        let path = std::mem::take(&mut self.current);
        (!path.elements().is_empty()).then_some(path)
    }
}

impl Surface for DisplayList {
    fn move_to(&mut self, p: Point) {
        self.current.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.current.line_to(p);
    }

    fn arc(&mut self, center: Point, radius: f64) {
        self.current
            .extend(Circle::new(center, radius).path_elements(ARC_TOLERANCE));
    }

    fn stroke(&mut self, width: f64, color: Rgb) {
        if let Some(path) = self.take_path() {
            self.commands.push(DrawCommand::Stroke {
                path,
                width,
                color: color.into(),
            });
        }
    }

    fn fill(&mut self, color: Rgb) {
        if let Some(path) = self.take_path() {
            self.commands.push(DrawCommand::Fill {
                path,
                color: color.into(),
            });
        }
    }
}

impl Renderer for DisplayList {
    fn build_scene(
        &mut self,
        scene: &SceneController,
        colors: &mut dyn ColorSource,
        _ctx: &RenderContext,
    ) {
        self.clear();
        scene.draw(self, colors);
        log::debug!(
            "Built display list: {} commands for {} shapes",
            self.commands.len(),
            scene.shapes().len()
        );
    }
}
