//! Bézier Blossom Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveParams, Preset, ViewState, ViewerMode,
};
pub use core::{
    blossom, build_pyramid, derivative_control_points, evaluate, polar_points, sample,
    BlossomLevels, Camera2D, Point, Pyramid, SamplingPolicy, WorldBounds,
};
pub use shared::{DisplayFlags, RenderScene, ViewerOptions};
