//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod animation;
pub mod auto_fit;
pub mod controller;
pub mod events;
pub mod frame;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kontrollpunkte, Parameter, View).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use animation::Animation;
pub use auto_fit::{AutoFit, FitMode, FitRequest, FitTarget};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, CurveParams, DisplayFlags, Preset, ViewState, ViewerMode};
