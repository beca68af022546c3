use super::{DesktopState, Registry};

/// One button per open window, in launch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    pub is_minimized: bool,
}

/// One icon per registered app, whether running or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockEntry {
    pub id: String,
    pub title: String,
    pub is_running: bool,
    pub is_active: bool,
}

pub fn taskbar(desktop: &DesktopState) -> Vec<TaskbarEntry> {
    desktop
        .launch_order()
        .map(|w| TaskbarEntry {
            id: w.id.clone(),
            title: w.title.clone(),
            is_active: desktop.active_window_id() == Some(w.id.as_str()),
            is_minimized: w.is_minimized,
        })
        .collect()
}

pub fn dock(registry: &Registry, desktop: &DesktopState) -> Vec<DockEntry> {
    registry
        .iter()
        .map(|app| DockEntry {
            id: app.id.clone(),
            title: app.title.clone(),
            is_running: desktop.window(&app.id).map_or(false, |w| w.is_open),
            is_active: desktop.active_window_id() == Some(app.id.as_str()),
        })
        .collect()
}
