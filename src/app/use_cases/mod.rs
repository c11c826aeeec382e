//! Use-Cases: mutierende Operationen auf dem AppState.

pub mod camera;
pub mod parameters;
pub mod points;
pub mod presets;
