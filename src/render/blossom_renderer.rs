//! Blossom-Modus: Kontrollpunkte C₀..C₃, Zwischenstufen und Blossom-Wert C.

use super::types::{subscript, tint, RenderContext, BLUE, GRAY, GREEN, ORANGE, RED, WHITE};
use crate::shared::BlossomGeometry;
use egui::Stroke;

/// Radius des Rings um C, wenn C auf der Kurve liegt.
const ON_CURVE_RING_RADIUS: f32 = 14.0;

pub(crate) fn render(ctx: &RenderContext, geometry: &BlossomGeometry) {
    let points = &ctx.scene.control_points;
    let levels = &geometry.levels;

    ctx.stroke_path(points, tint(GRAY, 0.34), 2.5);
    for (index, &p) in points.iter().enumerate() {
        let outline = if ctx.scene.dragged_point == Some(index) {
            tint(WHITE, 0.90)
        } else {
            tint(WHITE, 0.22)
        };
        ctx.draw_point(p, 7.0, tint(BLUE, 1.0), outline);
        ctx.draw_label(p, &format!("C{}", subscript(index)), tint(BLUE, 0.95));
    }

    if ctx.scene.display.blossom_curve {
        ctx.stroke_path(&geometry.curve, tint(BLUE, 0.35), 3.0);
    }

    // Stufe 1 (rot)
    ctx.stroke_path(&levels.level1, tint(RED, 0.55), 2.5);
    for (index, &p) in levels.level1.iter().enumerate() {
        ctx.draw_point(p, 6.0, tint(RED, 1.0), tint(WHITE, 0.18));
        ctx.draw_label(p, &format!("C{}'", subscript(index)), tint(RED, 0.95));
    }

    // Stufe 2 (orange)
    ctx.stroke_path(&levels.level2, tint(ORANGE, 0.65), 2.5);
    for (index, &p) in levels.level2.iter().enumerate() {
        ctx.draw_point(p, 6.0, tint(ORANGE, 1.0), tint(WHITE, 0.18));
        ctx.draw_label(p, &format!("C{}''", subscript(index)), tint(ORANGE, 0.95));
    }

    // Stufe 3 (grün): Blossom-Wert
    ctx.draw_point(levels.value, 8.0, tint(GREEN, 1.0), tint(WHITE, 0.22));
    ctx.draw_label(levels.value, "C", tint(GREEN, 0.95));

    if let Some(on_curve) = geometry.on_curve {
        ctx.painter.circle_stroke(
            ctx.to_pos(on_curve),
            ON_CURVE_RING_RADIUS,
            Stroke::new(2.5, tint(GREEN, 0.55)),
        );
    }
}
