//! Hintergrund-Gitter mit Achsen durch den Welt-Ursprung.

use super::types::{tint, RenderContext, WHITE};
use egui::{pos2, Stroke};

/// Unterhalb dieses Linienabstands (Pixel) wird das Gitter ausgelassen.
const MIN_SPACING_PX: f32 = 4.0;

pub(crate) fn render(ctx: &RenderContext) {
    let rect = ctx.rect;
    let scene = ctx.scene;
    let origin = ctx.to_pos(crate::core::Point::ZERO);
    let spacing = (scene.grid_spacing_world * scene.camera.scale()) as f32;

    if spacing.is_finite() && spacing >= MIN_SPACING_PX {
        let line = Stroke::new(1.0, tint(WHITE, 0.05));

        let mut x = rect.min.x + (origin.x - rect.min.x).rem_euclid(spacing);
        while x < rect.max.x {
            ctx.painter.line_segment([pos2(x, rect.min.y), pos2(x, rect.max.y)], line);
            x += spacing;
        }

        let mut y = rect.min.y + (origin.y - rect.min.y).rem_euclid(spacing);
        while y < rect.max.y {
            ctx.painter.line_segment([pos2(rect.min.x, y), pos2(rect.max.x, y)], line);
            y += spacing;
        }
    }

    // Achsen
    let axis = Stroke::new(1.5, tint(WHITE, 0.10));
    ctx.painter.line_segment([pos2(rect.min.x, origin.y), pos2(rect.max.x, origin.y)], axis);
    ctx.painter.line_segment([pos2(origin.x, rect.min.y), pos2(origin.x, rect.max.y)], axis);
}
