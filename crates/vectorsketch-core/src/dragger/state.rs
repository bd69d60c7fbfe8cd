//! Drag gesture state machine.

/// Where the current pointer gesture stands.
///
/// `Idle -> Armed` on a pointer-down that hits a dragger, `Armed -> Dragging`
/// on the first move with the button held, and back to `Idle` on pointer-up
/// from any state. Values written during a drag are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A dragger was hit; waiting for the pointer to move.
    Armed { dragger: usize },
    /// The dragger follows the pointer.
    Dragging { dragger: usize },
}

impl DragState {
    /// Pointer went down; `hit` is the index of the dragger under it, if any.
    pub fn press(&mut self, hit: Option<usize>) {
        *self = match hit {
            Some(dragger) => DragState::Armed { dragger },
            None => DragState::Idle,
        };
    }

    /// Pointer moved. Returns the dragger that should follow it.
    ///
    /// A move without the button held ends the gesture.
    pub fn motion(&mut self, button_held: bool) -> Option<usize> {
        if !button_held {
            *self = DragState::Idle;
            return None;
        }
        match *self {
            DragState::Idle => None,
            DragState::Armed { dragger } | DragState::Dragging { dragger } => {
                *self = DragState::Dragging { dragger };
                Some(dragger)
            }
        }
    }

    /// Pointer went up.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
