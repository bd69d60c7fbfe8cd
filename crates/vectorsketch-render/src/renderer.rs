//! The seam between a scene and a drawing backend.

use kurbo::Size;
use peniko::Color;
use thiserror::Error;
use vectorsketch_core::palette::ColorSource;
use vectorsketch_core::scene::SceneController;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Per-frame settings handed to a backend.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Canvas extent; the frame covers `(0, 0)` to this size.
    pub viewport_size: Size,
    /// Colour painted under every shape.
    pub canvas_color: Color,
}

impl RenderContext {
    /// A context over `viewport_size` with the light grey default canvas.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            viewport_size,
            canvas_color: Color::from_rgba8(250, 250, 250, 255),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.canvas_color = color;
        self
    }
}

/// A drawing backend that turns a scene into one frame.
pub trait Renderer {
    /// Redraw every shape of `scene` and its active draggers, replacing the
    /// previous frame. `colors` supplies the diagnostic stroke colours.
    fn build_scene(
        &mut self,
        scene: &SceneController,
        colors: &mut dyn ColorSource,
        ctx: &RenderContext,
    );

    /// Colour the backend paints before the first shape.
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.canvas_color
    }
}
