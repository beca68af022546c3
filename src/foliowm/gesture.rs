//! Pointer gestures on window chrome.
//!
//! A [`Gesture`] is a plain value: it records what the pointer captured on
//! press and turns every later pointer position into the update the desktop
//! should apply. Whether the manager is listening for pointer motion at all
//! is just `!gesture.is_idle()`.

use super::{Geometry, Position, Size, WindowId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Title bar held: the window corner follows the pointer at a fixed offset.
    Dragging { id: WindowId, offset: Position },
    /// Resize handle held: the size grows with the pointer delta, the top-left
    /// corner stays where it was.
    Resizing {
        id: WindowId,
        pointer_start: Position,
        start_size: Size,
        start_position: Position,
    },
}

/// Update produced by a pointer move during a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureUpdate {
    Move(WindowId, Position),
    /// Top-left corner stays at the position captured on press.
    Resize(WindowId, Geometry),
}

impl Gesture {
    pub fn drag(id: &str, pointer: Position, window_position: Position) -> Gesture {
        Gesture::Dragging {
            id: id.to_string(),
            offset: pointer - window_position,
        }
    }

    pub fn resize(id: &str, pointer: Position, start_size: Size, start_position: Position) -> Gesture {
        Gesture::Resizing {
            id: id.to_string(),
            pointer_start: pointer,
            start_size,
            start_position,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Window the gesture is acting on, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { id, .. } | Gesture::Resizing { id, .. } => Some(id.as_str()),
        }
    }

    pub fn pointer_moved(&self, pointer: Position) -> Option<GestureUpdate> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { id, offset } => {
                Some(GestureUpdate::Move(id.clone(), pointer - *offset))
            }
            Gesture::Resizing {
                id,
                pointer_start,
                start_size,
                start_position,
            } => {
                let delta = pointer - *pointer_start;
                let size = Size::new(
                    start_size.width.saturating_add(delta.x),
                    start_size.height.saturating_add(delta.y),
                );
                Some(GestureUpdate::Resize(
                    id.clone(),
                    Geometry {
                        position: *start_position,
                        size: size.clamped(),
                    },
                ))
            }
        }
    }

    /// Pointer released, wherever it is. The last applied geometry stays.
    pub fn release(&mut self) -> Gesture {
        std::mem::take(self)
    }
}
