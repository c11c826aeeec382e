//! UI-Komponenten: Toolbar, Properties, Status-Bar, Input-Handling.

pub mod input;
/// UI-Layer mit egui
///
/// Panels liefern `AppIntent`s und mutieren den AppState nie direkt.
pub mod properties;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
