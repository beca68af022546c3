use std::ops::{Add, Sub};

use serde::Deserialize;

use super::WindowId;

pub const MIN_WIDTH: i32 = 300;
pub const MIN_HEIGHT: i32 = 200;

/// Point in desktop pixel space. Also used for pointer coordinates and
/// pointer deltas. Arithmetic saturates at the `i32` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, other: Position) -> Position {
        Position::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, other: Position) -> Position {
        Position::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
    /// Smallest size a window may have in each dimension.
    pub fn clamped(self) -> Size {
        Size {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub position: Position,
    pub size: Size,
}

impl Geometry {
    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < self.position.x.saturating_add(self.size.width)
            && point.y < self.position.y.saturating_add(self.size.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub position: Position,
    pub size: Size,
    pub z_index: u32,
}

impl WindowRecord {
    pub fn geometry(&self) -> Geometry {
        Geometry {
            position: self.position,
            size: self.size,
        }
    }
    /// Open and not minimized: the window takes part in z-order and rendering.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

/// What the renderer gets for each window it paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub position: Position,
    pub size: Size,
    pub z_index: u32,
    pub is_active: bool,
    pub is_maximized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_only_raises_undersized_dimensions() {
        assert_eq!(Size::new(-5, 0).clamped(), Size::new(300, 200));
        assert_eq!(Size::new(800, 10).clamped(), Size::new(800, 200));
        assert_eq!(Size::new(301, 201).clamped(), Size::new(301, 201));
    }

    #[test]
    fn geometry_contains_is_half_open() {
        let g = Geometry {
            position: Position::new(10, 10),
            size: Size::new(300, 200),
        };
        assert!(g.contains(Position::new(10, 10)));
        assert!(g.contains(Position::new(309, 209)));
        assert!(!g.contains(Position::new(310, 100)));
        assert!(!g.contains(Position::new(100, 210)));
        assert!(!g.contains(Position::new(9, 100)));
    }

    #[test]
    fn arithmetic_saturates_at_the_edges() {
        let far = Position::new(i32::MAX - 10, i32::MIN + 10);
        assert_eq!(far + Position::new(100, -100), Position::new(i32::MAX, i32::MIN));
        assert_eq!(
            Position::new(i32::MIN, 0) - Position::new(200, -5),
            Position::new(i32::MIN, 5)
        );

        let g = Geometry {
            position: Position::new(i32::MAX - 100, 0),
            size: Size::new(700, 500),
        };
        assert!(g.contains(Position::new(i32::MAX - 1, 10)));
        assert!(!g.contains(Position::new(i32::MAX, 10)));
    }
}
