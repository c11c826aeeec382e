//! Core: de-Casteljau-Auswertung, Blossom, Kamera und Bounding-Box.

pub mod blossom;
pub mod bounds;
pub mod camera;
/// Kurvenauswertung über die Interpolations-Pyramide
///
/// - `build_pyramid`: vollständiges de-Casteljau-Dreieck
/// - `evaluate`: Kurvenpunkt B(u)
/// - `sample`: Polyline-Abtastung mit zoomabhängiger Schrittweite
/// - `derivative_control_points`: Kontrollpolygon der Ableitung
pub mod curve;
pub mod interpolation;

pub use blossom::{blossom, BlossomLevels};
pub use bounds::WorldBounds;
pub use camera::Camera2D;
pub use curve::{
    build_pyramid, derivative_control_points, evaluate, polar_points, sample, CurveSamples,
    Pyramid, SamplingPolicy,
};
pub use interpolation::{lerp, Point};
