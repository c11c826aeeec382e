//! Application State: Kontrollpunkte, Modus, Parameter, Kamera, Darstellung.

mod app_state;
mod curve;
mod view;

pub use app_state::AppState;
pub use crate::shared::DisplayFlags;
pub use curve::{CurveParams, Preset, ViewerMode};
pub use view::ViewState;
