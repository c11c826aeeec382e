//! Normal-Modus: Kontrollpolygon, Pyramide, Polar-Polygon, Kurven und B(t).

use super::types::{tint, RenderContext, BLUE, GRAY, GREEN, RED, WHITE};
use crate::shared::NormalGeometry;
use egui::Stroke;

pub(crate) fn render(ctx: &RenderContext, geometry: &NormalGeometry) {
    let display = ctx.scene.display;
    let polar = geometry.polar();

    render_control_polygon(ctx);

    // Tiefere Pyramiden-Stufen (ab Level 2) dezent
    if display.polar_polygon {
        for level in geometry.pyramid.levels.iter().skip(2) {
            if level.len() > 1 {
                ctx.stroke_path(level, tint(WHITE, 0.14), 1.5);
            }
        }
    }

    if display.curve {
        ctx.stroke_path(&geometry.curve, tint(BLUE, 0.95), 3.0);
    }

    if display.polar_polygon && !polar.is_empty() {
        ctx.stroke_path(polar, tint(GREEN, 0.40), 2.5);
        for &p in polar {
            ctx.draw_point(p, 5.0, tint(GREEN, 0.95), tint(WHITE, 0.16));
        }
    }

    if display.polar_curve {
        ctx.stroke_path(&geometry.polar_curve, tint(RED, 0.92), 3.0);
    }

    if display.tangent {
        if let Some(end) = geometry.tangent_end {
            ctx.painter.line_segment(
                [ctx.to_pos(geometry.point), ctx.to_pos(end)],
                Stroke::new(2.0, tint(BLUE, 0.60)),
            );
            ctx.draw_point(end, 3.5, tint(BLUE, 0.60), tint(WHITE, 0.16));
        }
    }

    if display.point {
        ctx.draw_point(geometry.point, 7.0, tint(BLUE, 1.0), tint(WHITE, 0.22));
        if display.polar_curve {
            if let Some(p) = geometry.polar_point {
                ctx.draw_point(p, 6.0, tint(RED, 1.0), tint(WHITE, 0.20));
            }
        }
    }
}

fn render_control_polygon(ctx: &RenderContext) {
    let points = &ctx.scene.control_points;
    ctx.stroke_path(points, tint(GRAY, 0.38), 2.0);
    for (index, &p) in points.iter().enumerate() {
        let outline = if ctx.scene.dragged_point == Some(index) {
            tint(WHITE, 0.90)
        } else {
            tint(WHITE, 0.20)
        };
        ctx.draw_point(p, 6.0, tint(GRAY, 0.92), outline);
    }
}
