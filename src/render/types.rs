//! Zeichen-Kontext, Farben und Primitive für alle Sub-Renderer.

use crate::core::Point;
use crate::shared::RenderScene;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

/// Farbe aus RGB und Deckkraft in [0, 1].
pub(crate) fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0) as u8)
}

pub(crate) const BLUE: (u8, u8, u8) = (78, 161, 255);
pub(crate) const RED: (u8, u8, u8) = (255, 91, 111);
pub(crate) const ORANGE: (u8, u8, u8) = (255, 176, 32);
pub(crate) const GREEN: (u8, u8, u8) = (72, 226, 168);
pub(crate) const GRAY: (u8, u8, u8) = (199, 203, 214);
pub(crate) const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Palettenfarbe mit Deckkraft.
pub(crate) fn tint(color: (u8, u8, u8), alpha: f32) -> Color32 {
    rgba(color.0, color.1, color.2, alpha)
}

/// Hintergrund des Canvas.
pub(crate) const BACKGROUND: Color32 = Color32::from_rgb(11, 15, 23);

const LABEL_FONT_SIZE: f32 = 13.0;
const POINT_OUTLINE_WIDTH: f32 = 1.2;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt Painter, Zeichenfläche und Szene; projiziert Weltpunkte
/// in absolute egui-Koordinaten.
pub(crate) struct RenderContext<'a> {
    pub painter: &'a Painter,
    /// Zeichenfläche des Viewports (absolute Bildschirmkoordinaten)
    pub rect: Rect,
    pub scene: &'a RenderScene,
}

impl RenderContext<'_> {
    /// Weltpunkt → absolute Bildschirmposition.
    pub fn to_pos(&self, world: Point) -> Pos2 {
        let local = self.scene.to_screen(world);
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    /// Zeichnet einen offenen Linienzug durch Weltpunkte.
    pub fn stroke_path(&self, points: &[Point], color: Color32, width: f32) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<Pos2> = points.iter().map(|&p| self.to_pos(p)).collect();
        self.painter.add(Shape::line(screen, Stroke::new(width, color)));
    }

    /// Zeichnet einen gefüllten Punkt mit dünnem Rand.
    pub fn draw_point(&self, world: Point, radius: f32, fill: Color32, outline: Color32) {
        self.painter.circle(
            self.to_pos(world),
            radius,
            fill,
            Stroke::new(POINT_OUTLINE_WIDTH, outline),
        );
    }

    /// Beschriftung rechts oberhalb eines Weltpunkts.
    pub fn draw_label(&self, world: Point, text: &str, color: Color32) {
        self.painter.text(
            self.to_pos(world) + egui::vec2(10.0, -10.0),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(LABEL_FONT_SIZE),
            color,
        );
    }
}

/// Index als Unicode-Tiefstellung (`12` → `₁₂`).
pub(crate) fn subscript(index: usize) -> String {
    index
        .to_string()
        .chars()
        .map(|c| match c {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            '9' => '₉',
            other => other,
        })
        .collect()
}
