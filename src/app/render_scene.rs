//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{FrameGeometry, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState und der Frame-Geometrie.
pub fn build(state: &AppState, geometry: FrameGeometry) -> RenderScene {
    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        control_points: state.control_points.clone(),
        geometry,
        display: state.display,
        grid_spacing_world: state.options.grid_spacing_world,
        dragged_point: state.dragged_point,
    }
}
