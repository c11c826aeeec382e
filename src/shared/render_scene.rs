//! Render-Szene als expliziter Übergabevertrag zwischen App und Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.
//! Alle Geometrie liegt in Weltkoordinaten; projiziert wird erst beim Zeichnen.

use crate::core::{BlossomLevels, Camera2D, Point, Pyramid};

/// Sichtbarkeit der einzelnen Zeichenebenen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Hintergrund-Gitter mit Achsen
    pub grid: bool,
    /// Bézier-Kurve der Kontrollpunkte
    pub curve: bool,
    /// Kurvenpunkt B(t)
    pub point: bool,
    /// Polar-Polygon (Level 1 der Pyramide)
    pub polar_polygon: bool,
    /// Bézier-Kurve des Polar-Polygons
    pub polar_curve: bool,
    /// Tangente B'(t) aus dem Ableitungs-Kontrollpolygon
    pub tangent: bool,
    /// Kurve im Blossom-Modus (abgeschwächt)
    pub blossom_curve: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            grid: true,
            curve: true,
            point: true,
            polar_polygon: true,
            polar_curve: true,
            tangent: false,
            blossom_curve: true,
        }
    }
}

/// Ausgewertete Geometrie im Normal-Modus.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalGeometry {
    /// Parameter t dieses Frames
    pub t: f64,
    /// Vollständige Interpolations-Pyramide bei t
    pub pyramid: Pyramid,
    /// Abgetastete Bézier-Kurve
    pub curve: Vec<Point>,
    /// Abgetastete Kurve des Polar-Polygons (leer bei weniger als zwei Polar-Punkten)
    pub polar_curve: Vec<Point>,
    /// Kurvenpunkt B(t)
    pub point: Point,
    /// Punkt der Polar-Kurve bei t
    pub polar_point: Option<Point>,
    /// Endpunkt der Tangente `B(t) + B'(t) · scale`
    pub tangent_end: Option<Point>,
}

impl NormalGeometry {
    /// Polar-Polygon = Level 1 der Pyramide.
    pub fn polar(&self) -> &[Point] {
        self.pyramid
            .levels
            .get(1)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Ausgewertete Geometrie im Blossom-Modus.
#[derive(Debug, Clone, PartialEq)]
pub struct BlossomGeometry {
    /// (t1, t2, t3)
    pub params: [f64; 3],
    /// Zwischenstufen und Blossom-Wert
    pub levels: BlossomLevels,
    /// Abgetastete Bézier-Kurve
    pub curve: Vec<Point>,
    /// Gesetzt wenn t1 = t2 = t3: der Kurvenpunkt B(t1)
    pub on_curve: Option<Point>,
}

/// Geometrie eines Frames je nach Modus.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameGeometry {
    Normal(NormalGeometry),
    Blossom(BlossomGeometry),
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame (nach einem eventuellen Auto-Fit)
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Kontrollpunkte
    pub control_points: Vec<Point>,
    /// Ausgewertete Geometrie
    pub geometry: FrameGeometry,
    /// Sichtbare Zeichenebenen
    pub display: DisplayFlags,
    /// Gitterabstand in Welteinheiten
    pub grid_spacing_world: f64,
    /// Index des gerade gezogenen Kontrollpunkts (Hervorhebung)
    pub dragged_point: Option<usize>,
}

impl RenderScene {
    /// Viewport-Mitte in lokalen Screen-Koordinaten.
    pub fn viewport_center(&self) -> Point {
        Point::new(
            self.viewport_size[0] as f64 * 0.5,
            self.viewport_size[1] as f64 * 0.5,
        )
    }

    /// Projiziert einen Weltpunkt in lokale Screen-Koordinaten.
    pub fn to_screen(&self, world: Point) -> Point {
        self.camera.to_screen(world, self.viewport_center())
    }
}
