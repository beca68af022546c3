use std::collections::HashMap;

use log::{debug, info, trace};
use serde::Deserialize;

use super::{Geometry, Position, Screen, Size, WindowId, WindowRecord, WindowView};

/// Where newly opened windows land. The n-th concurrently open window is
/// pushed `stagger` pixels further on both axes so stacked windows stay
/// distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub origin: Position,
    pub stagger: i32,
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            origin: Position::new(100, 50),
            stagger: 30,
        }
    }
}

/// Canonical state of the desktop. Every geometry, focus and stacking change
/// goes through the methods below; operations on an id with no open window
/// are silently ignored.
#[derive(Debug, Default)]
pub struct DesktopState {
    windows: HashMap<WindowId, WindowRecord>,
    // first-launch order, only used for the taskbar
    launch_order: Vec<WindowId>,
    active_window_id: Option<WindowId>,
    // present while a window is maximized, holds the geometry to restore
    maximized: HashMap<WindowId, Geometry>,
    screen: Screen,
    placement: Placement,
}

impl DesktopState {
    pub fn new(screen: Screen, placement: Placement) -> Self {
        DesktopState {
            screen,
            placement,
            ..Default::default()
        }
    }

    /// Opens the window for `id`, or brings the existing one back to front.
    pub fn open(&mut self, id: &str, title: &str, default_size: Size) {
        let z_index = self.next_z_index();
        if let Some(window) = self.windows.get_mut(id) {
            debug!("reopening window {} at z {}", id, z_index);
            window.is_open = true;
            window.is_minimized = false;
            window.z_index = z_index;
        } else {
            let offset = self.placement.stagger * self.open_window_count() as i32;
            let position = self.placement.origin + Position::new(offset, offset);
            info!("opening window {} at {:?}", id, position);
            self.windows.insert(
                id.to_string(),
                WindowRecord {
                    id: id.to_string(),
                    title: title.to_string(),
                    is_open: true,
                    is_minimized: false,
                    position,
                    size: default_size.clamped(),
                    z_index,
                },
            );
            self.launch_order.push(id.to_string());
        }
        self.active_window_id = Some(id.to_string());
    }

    pub fn close(&mut self, id: &str) -> bool {
        let Some(window) = self.open_window_mut(id) else {
            trace!("close: no open window {}", id);
            return false;
        };
        window.is_open = false;
        window.is_minimized = false;
        info!("closing window {}", id);
        self.maximized.remove(id);
        if self.active_window_id.as_deref() == Some(id) {
            self.refocus();
        }
        true
    }

    /// Focuses `id` and raises it above every other window. Activating a
    /// minimized window shows it again.
    pub fn activate(&mut self, id: &str) -> bool {
        if self.active_window_id.as_deref() == Some(id) {
            return false;
        }
        let z_index = self.next_z_index();
        let Some(window) = self.open_window_mut(id) else {
            trace!("activate: no open window {}", id);
            return false;
        };
        window.z_index = z_index;
        window.is_minimized = false;
        debug!("activating window {} at z {}", id, z_index);
        self.active_window_id = Some(id.to_string());
        true
    }

    /// No clamping: windows may be dragged partly or fully off the desktop.
    pub fn move_window(&mut self, id: &str, position: Position) -> bool {
        let Some(window) = self.open_window_mut(id) else {
            trace!("move: no open window {}", id);
            return false;
        };
        window.position = position;
        true
    }

    pub fn resize_window(&mut self, id: &str, size: Size) -> bool {
        let Some(window) = self.open_window_mut(id) else {
            trace!("resize: no open window {}", id);
            return false;
        };
        window.size = size.clamped();
        true
    }

    pub fn maximize(&mut self, id: &str) -> bool {
        if self.maximized.contains_key(id) {
            return false;
        }
        let target = self.screen.maximized_geometry();
        let Some(window) = self.open_window_mut(id) else {
            trace!("maximize: no open window {}", id);
            return false;
        };
        let previous = window.geometry();
        window.position = target.position;
        window.size = target.size;
        debug!("maximizing window {}, saved {:?}", id, previous);
        self.maximized.insert(id.to_string(), previous);
        true
    }

    pub fn restore(&mut self, id: &str) -> bool {
        if !self.maximized.contains_key(id) {
            return false;
        }
        let Some(window) = self.windows.get_mut(id).filter(|w| w.is_open) else {
            return false;
        };
        if let Some(previous) = self.maximized.remove(id) {
            window.position = previous.position;
            window.size = previous.size;
            debug!("restoring window {} to {:?}", id, previous);
        }
        true
    }

    pub fn toggle_maximize(&mut self, id: &str) -> bool {
        if self.is_maximized(id) {
            self.restore(id)
        } else {
            self.maximize(id)
        }
    }

    /// Hides the window without closing it.
    pub fn minimize(&mut self, id: &str) -> bool {
        let Some(window) = self.open_window_mut(id) else {
            trace!("minimize: no open window {}", id);
            return false;
        };
        if window.is_minimized {
            return false;
        }
        window.is_minimized = true;
        debug!("minimizing window {}", id);
        if self.active_window_id.as_deref() == Some(id) {
            self.refocus();
        }
        true
    }

    /// Maximized windows follow the new screen size and keep their restore
    /// geometry.
    pub fn set_screen(&mut self, screen: Screen) {
        info!("screen is now {}x{}", screen.width, screen.height);
        self.screen = screen;
        let target = screen.maximized_geometry();
        for id in self.maximized.keys() {
            if let Some(window) = self.windows.get_mut(id) {
                window.position = target.position;
                window.size = target.size;
            }
        }
    }

    /// Visible windows, lowest first so they can be painted in order.
    pub fn list_open_windows_ordered_by_z_index(&self) -> Vec<WindowView> {
        let mut windows: Vec<&WindowRecord> =
            self.windows.values().filter(|w| w.is_visible()).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
            .into_iter()
            .map(|w| WindowView {
                id: w.id.clone(),
                title: w.title.clone(),
                position: w.position,
                size: w.size,
                z_index: w.z_index,
                is_active: self.active_window_id.as_ref() == Some(&w.id),
                is_maximized: self.maximized.contains_key(&w.id),
            })
            .collect()
    }

    /// Open windows (minimized included) in the order they were first launched.
    pub fn launch_order(&self) -> impl Iterator<Item = &WindowRecord> {
        self.launch_order
            .iter()
            .filter_map(|id| self.windows.get(id))
            .filter(|w| w.is_open)
    }

    pub fn window(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.get(id)
    }

    pub fn active_window_id(&self) -> Option<&str> {
        self.active_window_id.as_deref()
    }

    pub fn is_maximized(&self, id: &str) -> bool {
        self.maximized.contains_key(id)
    }

    pub fn open_window_count(&self) -> usize {
        self.windows.values().filter(|w| w.is_open).count()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    fn open_window_mut(&mut self, id: &str) -> Option<&mut WindowRecord> {
        self.windows.get_mut(id).filter(|w| w.is_open)
    }

    fn next_z_index(&self) -> u32 {
        self.windows.values().map(|w| w.z_index).max().unwrap_or(0) + 1
    }

    // focus falls back to the topmost visible window
    fn refocus(&mut self) {
        self.active_window_id = self
            .windows
            .values()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone());
        debug!("focus moved to {:?}", self.active_window_id);
    }
}
