//! Canvas-Rendering mit dem egui-Painter.
//!
//! Zeichnet eine [`RenderScene`] in Ebenen: Hintergrund, Gitter, dann die
//! Geometrie des aktiven Modus. Die Szene bleibt read-only.

mod blossom_renderer;
mod curve_renderer;
mod grid_renderer;
mod types;

pub use crate::shared::RenderScene;
use crate::shared::FrameGeometry;
use types::RenderContext;

/// Rendert die komplette Szene in `rect`.
pub fn render_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let ctx = RenderContext {
        painter,
        rect,
        scene,
    };

    painter.rect_filled(rect, 0.0, types::BACKGROUND);

    if scene.display.grid {
        grid_renderer::render(&ctx);
    }

    match &scene.geometry {
        FrameGeometry::Normal(normal) => curve_renderer::render(&ctx, normal),
        FrameGeometry::Blossom(blossom) => blossom_renderer::render(&ctx, blossom),
    }
}
