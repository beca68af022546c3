use serde::Deserialize;

use super::{Geometry, Position};

/// Part of a window's frame a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    TitleBar,
    ResizeHandle,
    Body,
}

/// Pixel metrics of the window frame. Buttons sit left-aligned in the title
/// bar, the resize handle is a square in the bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Chrome {
    pub title_bar_height: i32,
    pub button_size: i32,
    pub button_gap: i32,
    pub button_inset: i32,
    pub resize_handle: i32,
}

impl Default for Chrome {
    fn default() -> Self {
        Chrome {
            title_bar_height: 40,
            button_size: 12,
            button_gap: 8,
            button_inset: 12,
            resize_handle: 20,
        }
    }
}

impl Chrome {
    pub fn hit_test(&self, window: Geometry, point: Position) -> Option<Region> {
        if !window.contains(point) {
            return None;
        }
        let local = point - window.position;
        if local.y < self.title_bar_height {
            return Some(self.title_bar_region(local));
        }
        let handle_x = window.size.width - self.resize_handle;
        let handle_y = window.size.height - self.resize_handle;
        if local.x >= handle_x && local.y >= handle_y {
            return Some(Region::ResizeHandle);
        }
        Some(Region::Body)
    }

    fn title_bar_region(&self, local: Position) -> Region {
        let top = (self.title_bar_height - self.button_size) / 2;
        if local.y < top || local.y >= top + self.button_size {
            return Region::TitleBar;
        }
        let buttons = [
            Region::CloseButton,
            Region::MinimizeButton,
            Region::MaximizeButton,
        ];
        for (i, region) in buttons.into_iter().enumerate() {
            let left = self.button_inset + i as i32 * (self.button_size + self.button_gap);
            if local.x >= left && local.x < left + self.button_size {
                return region;
            }
        }
        Region::TitleBar
    }
}
