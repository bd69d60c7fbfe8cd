//! VectorSketch Render Library
//!
//! Renderer abstraction plus a display-list implementation of the core
//! drawing surface, with SVG export of a finished frame.

mod display_list;
mod renderer;
mod svg;

pub use display_list::{DisplayList, DrawCommand};
pub use renderer::{RenderContext, RenderError, RenderResult, Renderer};
pub use svg::{to_svg, write_svg};
