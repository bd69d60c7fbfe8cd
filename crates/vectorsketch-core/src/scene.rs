//! Scene controller: shapes, selection and pointer routing.

use crate::dragger::{DragState, DragValue, Dragger, DraggerKind, HANDLE_RADIUS};
use crate::palette::ColorSource;
use crate::shapes::{SceneObject, Shape, ShapeId};
use crate::surface::Surface;
use kurbo::Point;

/// Something the host may want to reflect in its own UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    Selected(ShapeId),
    Deselected,
    /// A dragger wrote `value` into shape `id`.
    Dragged { id: ShapeId, value: DragValue },
}

/// Owns the shapes of a sketch and routes pointer input to them.
///
/// Shapes are kept back to front. At most one shape is selected; its draggers
/// are rebuilt on every selection change and whenever the host edits it
/// through [`SceneController::update_selected`].
#[derive(Debug, Clone)]
pub struct SceneController {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    draggers: Vec<Dragger>,
    drag: DragState,
    handle_radius: f64,
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneController {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            draggers: Vec::new(),
            drag: DragState::Idle,
            handle_radius: HANDLE_RADIUS,
        }
    }

    /// Use `radius` for point handles.
    pub fn with_handle_radius(mut self, radius: f64) -> Self {
        self.handle_radius = radius;
        self
    }

    /// All shapes, back to front.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Draggers of the current selection.
    pub fn draggers(&self) -> &[Dragger] {
        &self.draggers
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Add a shape on top and select it.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> ShapeId {
        let shape = shape.into();
        let id = shape.id();
        log::debug!("Adding {} {}", shape.kind(), id);
        self.shapes.push(shape);
        self.select(id);
        id
    }

    /// Remove a shape, clearing the selection if it was selected.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        if self.selected == Some(id) {
            self.deselect();
        }
        Some(self.shapes.remove(index))
    }

    /// Select a shape and rebuild its draggers.
    pub fn select(&mut self, id: ShapeId) -> Option<SceneEvent> {
        self.shape(id)?;
        self.selected = Some(id);
        self.drag.release();
        self.refresh_draggers();
        log::debug!("Selected {} ({} draggers)", id, self.draggers.len());
        Some(SceneEvent::Selected(id))
    }

    pub fn deselect(&mut self) -> Option<SceneEvent> {
        self.selected.take()?;
        self.draggers.clear();
        self.drag.release();
        log::debug!("Selection cleared");
        Some(SceneEvent::Deselected)
    }

    pub fn selected(&self) -> Option<&Shape> {
        self.shape(self.selected?)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected
    }

    /// Edit the selected shape, then rebuild its draggers.
    ///
    /// Returns `false` when nothing is selected.
    pub fn update_selected(&mut self, f: impl FnOnce(&mut Shape)) -> bool {
        let Some(shape) = self.selected_mut() else {
            return false;
        };
        f(shape);
        self.refresh_draggers();
        true
    }

    /// Pointer went down at `pos`.
    ///
    /// A dragger of the selection takes priority; otherwise the topmost shape
    /// under the pointer is selected, and a click on empty space clears the
    /// selection.
    pub fn pointer_down(&mut self, pos: Point) -> Option<SceneEvent> {
        let dragger = self
            .selected()
            .and_then(|shape| self.draggers.iter().position(|d| d.is_hit(shape, pos)));
        self.drag.press(dragger);
        if dragger.is_some() {
            return None;
        }

        let hit = self.shapes.iter().rev().find(|s| s.is_hit(pos)).map(Shape::id);
        match hit {
            Some(id) if Some(id) == self.selected => None,
            Some(id) => self.select(id),
            None => self.deselect(),
        }
    }

    /// Pointer moved to `pos`. Drives the armed dragger while the button is held.
    pub fn pointer_move(&mut self, pos: Point, button_held: bool) -> Option<SceneEvent> {
        let index = self.drag.motion(button_held)?;
        let id = self.selected?;
        let dragger = self.draggers.get(index)?;
        let shape = self.shapes.iter_mut().find(|s| s.id() == id)?;
        let value = dragger.drag(shape, pos)?;
        Some(SceneEvent::Dragged { id, value })
    }

    /// Pointer went up. Whatever was dragged stays where it is.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            log::debug!("Drag finished on {:?}", self.selected);
        }
        self.drag.release();
    }

    /// Draw every shape back to front, then the selection's draggers.
    pub fn draw(&self, surface: &mut dyn Surface, colors: &mut dyn ColorSource) {
        for shape in &self.shapes {
            shape.draw(surface, colors);
        }
        if let Some(shape) = self.selected() {
            for dragger in &self.draggers {
                dragger.draw(shape, surface);
            }
        }
    }

    fn selected_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    fn refresh_draggers(&mut self) {
        let radius = self.handle_radius;
        self.draggers = self
            .selected()
            .map(|shape| shape.create_draggers())
            .unwrap_or_default();
        for dragger in &mut self.draggers {
            if let DraggerKind::Point { .. } = dragger.kind {
                dragger.style.radius = radius;
            }
        }
    }
}
