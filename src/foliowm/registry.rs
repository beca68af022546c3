use serde::Deserialize;

use super::Size;

fn default_size() -> Size {
    Size::new(700, 500)
}

/// An application that can be launched into a window. `component` names the
/// view hosted in the window body; the window manager never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppEntry {
    pub id: String,
    pub title: String,
    pub component: String,
    #[serde(default = "default_size")]
    pub default_size: Size,
}

impl AppEntry {
    pub fn new(id: &str, title: &str, component: &str) -> Self {
        AppEntry {
            id: id.into(),
            title: title.into(),
            component: component.into(),
            default_size: default_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    apps: Vec<AppEntry>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(vec![
            AppEntry {
                default_size: Size::new(600, 400),
                ..AppEntry::new("welcome", "Welcome", "Welcome")
            },
            AppEntry::new("terminal", "Terminal", "Terminal"),
            AppEntry::new("projects", "Projects", "ProjectViewer"),
            AppEntry::new("code", "Playground", "CodePlayground"),
            AppEntry::new("bugtracker", "Bug Tracker", "BugTracker"),
            AppEntry::new("collaboration", "Collaboration", "CollaborationDemo"),
        ])
    }
}

impl Registry {
    pub fn new(apps: Vec<AppEntry>) -> Self {
        Registry { apps }
    }
    pub fn get(&self, id: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.id == id)
    }
    pub fn iter(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_apps_are_registered() {
        let registry = Registry::default();
        for id in ["welcome", "terminal", "projects", "code", "bugtracker", "collaboration"] {
            assert!(registry.get(id).is_some(), "{} missing", id);
        }
        assert_eq!(registry.get("projects").unwrap().component, "ProjectViewer");
        assert_eq!(registry.get("code").unwrap().default_size, Size::new(700, 500));
        assert_eq!(registry.get("welcome").unwrap().default_size, Size::new(600, 400));
        assert!(registry.get("minesweeper").is_none());
    }
}
