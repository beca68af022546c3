use serde::Deserialize;

use super::{Geometry, Position, Size};

/// The desktop surface windows live on. Maximized windows fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new_screen(1280, 800)
    }
}

impl Screen {
    pub fn new_screen(width: i32, height: i32) -> Self {
        Self { width, height }
    }
    /// Geometry of a window maximized on this screen. A screen smaller than
    /// the minimum window footprint still yields a minimum-sized window.
    pub fn maximized_geometry(&self) -> Geometry {
        Geometry {
            position: Position::new(0, 0),
            size: Size::new(self.width, self.height).clamped(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximized_geometry_covers_screen() {
        let g = Screen::new_screen(1920, 1080).maximized_geometry();
        assert_eq!(g.position, Position::new(0, 0));
        assert_eq!(g.size, Size::new(1920, 1080));
    }

    #[test]
    fn tiny_screen_still_respects_minimum() {
        let g = Screen::new_screen(100, 100).maximized_geometry();
        assert_eq!(g.size, Size::new(300, 200));
    }
}
