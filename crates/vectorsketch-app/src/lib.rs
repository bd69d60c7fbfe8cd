//! VectorSketch Application
//!
//! Headless shell that builds a sketch from config, replays pointer gestures
//! against it and exports the resulting frame.

mod app;

pub use app::{App, AppError, AppOptions, AppResult};
