//! Use-Case-Funktionen für Kamera-Steuerung und Viewport.

use crate::app::AppState;
use crate::core::Point;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta: Point) {
    state.view.camera.pan(delta);
}

/// Zoomt auf die Cursor-Position (lokale Screen-Koordinaten).
///
/// Der Welt-Punkt unter dem Cursor bleibt nach dem Zoom an derselben
/// Bildschirmposition; die Skalierung wird auf die Kamera-Grenzen geklemmt.
pub fn zoom_at(state: &mut AppState, factor: f64, cursor: Point) {
    let center = state.view.viewport_center();
    state.view.camera.zoom_at(cursor, center, factor);
}

/// Fordert einen Auto-Fit für den nächsten Frame an.
pub fn request_fit(state: &mut AppState, hard: bool) {
    state.view.auto_fit.request_fit(hard);
}
