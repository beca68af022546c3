mod chrome;
pub use chrome::*;
mod desktop;
pub use desktop::*;
#[allow(clippy::module_inception)]
mod foliowm;
pub use foliowm::*;
mod gesture;
pub use gesture::*;
mod registry;
pub use registry::*;
mod screen;
pub use screen::*;
pub mod taskbar;
mod window;
pub use window::*;

/// Windows are keyed by the id of the application they host.
pub type WindowId = String;
