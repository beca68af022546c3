use log::{debug, info, trace, warn};
use thiserror::Error;

use super::taskbar::{self, DockEntry, TaskbarEntry};
use super::{Chrome, DesktopState, Gesture, GestureUpdate, Position, Region, Registry, Screen};
use super::{Geometry, WindowId};
use crate::config::Config;
use crate::script::ScriptError;

#[derive(Error, Debug)]
pub enum FolioWmError {
    #[error("unknown application {0}")]
    UnknownApp(String),
    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Input delivered by the host, already in desktop coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Desktop icon, dock or taskbar click.
    Launch(String),
    PointerDown(Position),
    PointerMove(Position),
    PointerUp(Position),
    /// Host lost the pointer (window blur, capture stolen).
    PointerCaptureLost,
    ScreenResized(Screen),
}

pub trait EventSource {
    /// `Ok(None)` once the source is exhausted.
    fn next_event(&mut self) -> Result<Option<InputEvent>, FolioWmError>;
}

pub struct FolioWm {
    desktop: DesktopState,
    registry: Registry,
    chrome: Chrome,
    // single pointer: one gesture at most, system-wide
    gesture: Gesture,
}

impl FolioWm {
    pub fn new(config: &Config) -> FolioWm {
        FolioWm {
            desktop: DesktopState::new(config.screen, config.placement),
            registry: config.registry(),
            chrome: config.chrome,
            gesture: Gesture::Idle,
        }
    }

    /// Opens the configured startup apps in order. Unknown ids are skipped.
    pub fn startup(&mut self, apps: &[String]) {
        for app in apps {
            if let Err(e) = self.launch(app) {
                warn!("startup: {}", e);
            }
        }
    }

    pub fn run<S: EventSource>(&mut self, source: &mut S) -> Result<(), FolioWmError> {
        while let Some(event) = source.next_event()? {
            match self.handle_event(event) {
                Ok(()) => {}
                Err(FolioWmError::UnknownApp(id)) => {
                    warn!("ignoring launch of unknown application {}", id);
                }
                Err(e) => return Err(e),
            }
        }
        info!("event source exhausted");
        Ok(())
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<(), FolioWmError> {
        trace!("event {:?}", event);
        match event {
            InputEvent::Launch(app_id) => self.launch(&app_id)?,
            InputEvent::PointerDown(point) => self.pointer_down(point),
            InputEvent::PointerMove(point) => self.pointer_move(point),
            // the gesture ends wherever the pointer is released
            InputEvent::PointerUp(_) | InputEvent::PointerCaptureLost => self.end_gesture(),
            InputEvent::ScreenResized(screen) => self.desktop.set_screen(screen),
        }
        Ok(())
    }

    pub fn launch(&mut self, app_id: &str) -> Result<(), FolioWmError> {
        let app = self
            .registry
            .get(app_id)
            .ok_or_else(|| FolioWmError::UnknownApp(app_id.to_string()))?;
        self.desktop.open(&app.id, &app.title, app.default_size);
        Ok(())
    }

    fn pointer_down(&mut self, point: Position) {
        if !self.gesture.is_idle() {
            // missed the release of the previous gesture
            self.end_gesture();
        }
        let Some((id, region)) = self.window_at(point) else {
            trace!("pointer down on empty desktop at {:?}", point);
            return;
        };
        debug!("pointer down on {:?} of {}", region, id);
        match region {
            Region::CloseButton => {
                self.desktop.close(&id);
            }
            Region::MinimizeButton => {
                self.desktop.minimize(&id);
            }
            Region::MaximizeButton => {
                self.desktop.activate(&id);
                self.desktop.toggle_maximize(&id);
            }
            Region::TitleBar => {
                self.desktop.activate(&id);
                self.begin_gesture(&id, point, |id, pointer, geometry| {
                    Gesture::drag(id, pointer, geometry.position)
                });
            }
            Region::ResizeHandle => {
                self.desktop.activate(&id);
                self.begin_gesture(&id, point, |id, pointer, geometry| {
                    Gesture::resize(id, pointer, geometry.size, geometry.position)
                });
            }
            Region::Body => {
                self.desktop.activate(&id);
            }
        }
    }

    fn begin_gesture<F>(&mut self, id: &str, point: Position, start: F)
    where
        F: FnOnce(&str, Position, Geometry) -> Gesture,
    {
        if self.desktop.is_maximized(id) {
            trace!("window {} is maximized, no gesture", id);
            return;
        }
        if let Some(window) = self.desktop.window(id) {
            self.gesture = start(id, point, window.geometry());
            debug!("gesture started: {:?}", self.gesture);
        }
    }

    fn pointer_move(&mut self, point: Position) {
        match self.gesture.pointer_moved(point) {
            Some(GestureUpdate::Move(id, position)) => {
                self.desktop.move_window(&id, position);
            }
            Some(GestureUpdate::Resize(id, geometry)) => {
                self.desktop.move_window(&id, geometry.position);
                self.desktop.resize_window(&id, geometry.size);
            }
            None => {}
        }
    }

    fn end_gesture(&mut self) {
        let finished = self.gesture.release();
        if let Some(id) = finished.target() {
            debug!("gesture on {} finished", id);
        }
    }

    // topmost visible window under the point
    fn window_at(&self, point: Position) -> Option<(WindowId, Region)> {
        self.desktop
            .list_open_windows_ordered_by_z_index()
            .into_iter()
            .rev()
            .find_map(|w| {
                let geometry = Geometry {
                    position: w.position,
                    size: w.size,
                };
                self.chrome.hit_test(geometry, point).map(|region| (w.id, region))
            })
    }

    pub fn desktop(&self) -> &DesktopState {
        &self.desktop
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        taskbar::taskbar(&self.desktop)
    }

    pub fn dock(&self) -> Vec<DockEntry> {
        taskbar::dock(&self.registry, &self.desktop)
    }
}
