//! 2D-Kamera für Pan und Zoom (Welt → Screen).

use super::interpolation::Point;

/// 2D-Kamera: `screen = world · scale + viewport_center + offset`
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Skalierung Welt → Pixel (immer innerhalb `[scale_min, scale_max]`)
    scale: f64,
    /// Verschiebung in Screen-Pixeln relativ zur Viewport-Mitte
    pub offset: Point,
    scale_min: f64,
    scale_max: f64,
}

impl Camera2D {
    /// Minimale Skalierung (Standard).
    pub const SCALE_MIN: f64 = 0.2;
    /// Maximale Skalierung (Standard).
    pub const SCALE_MAX: f64 = 6.0;

    /// Erstellt eine neue Kamera mit Skalierung 1.0 und ohne Verschiebung
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Point::ZERO,
            scale_min: Self::SCALE_MIN,
            scale_max: Self::SCALE_MAX,
        }
    }

    /// Setzt konfigurierte Skalierungsgrenzen und klemmt die aktuelle Skalierung nach.
    pub fn with_scale_bounds(mut self, scale_min: f64, scale_max: f64) -> Self {
        let lo = scale_min.min(scale_max).max(f64::MIN_POSITIVE);
        let hi = scale_max.max(lo);
        self.scale_min = lo;
        self.scale_max = hi;
        self.scale = self.clamp_scale(self.scale);
        self
    }

    /// Aktuelle Skalierung Welt → Pixel.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Untere Skalierungsgrenze.
    pub fn scale_min(&self) -> f64 {
        self.scale_min
    }

    /// Obere Skalierungsgrenze.
    pub fn scale_max(&self) -> f64 {
        self.scale_max
    }

    /// Klemmt einen Skalierungswert auf die konfigurierten Grenzen.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.scale;
        }
        scale.clamp(self.scale_min, self.scale_max)
    }

    /// Setzt die Skalierung (geklemmt).
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = self.clamp_scale(scale);
    }

    /// Projiziert einen Weltpunkt in Screen-Koordinaten.
    pub fn to_screen(&self, world: Point, viewport_center: Point) -> Point {
        world * self.scale + viewport_center + self.offset
    }

    /// Inverse zu [`Self::to_screen`].
    pub fn to_world(&self, screen: Point, viewport_center: Point) -> Point {
        (screen - viewport_center - self.offset) / self.scale
    }

    /// Verschiebt die Kamera um ein Screen-Delta (Pan)
    pub fn pan(&mut self, delta_screen: Point) {
        self.offset += delta_screen;
    }

    /// Zoomt um `factor`, wobei der Weltpunkt unter `cursor` an seiner
    /// Bildschirmposition bleibt.
    pub fn zoom_at(&mut self, cursor: Point, viewport_center: Point, factor: f64) {
        let before = self.to_world(cursor, viewport_center);
        self.scale = self.clamp_scale(self.scale * factor);
        // Mit neuer Skalierung und altem Offset liegt ein anderer Weltpunkt unter dem Cursor
        let after = self.to_world(cursor, viewport_center);
        self.offset += (after - before) * self.scale;
    }

    /// Pick-Radius in Welteinheiten für einen Radius in Screen-Pixeln.
    pub fn pick_radius_world(&self, pick_radius_px: f64) -> f64 {
        pick_radius_px / self.scale
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const CENTER: Point = Point::new(640.0, 360.0);

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Point::new(10.0, 5.0));
        assert_relative_eq!(camera.offset.x, 10.0);
        assert_relative_eq!(camera.offset.y, 5.0);
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let camera = Camera2D::new();
        assert_eq!(camera.to_screen(Point::ZERO, CENTER), CENTER);
    }

    #[test]
    fn test_to_world_inverts_to_screen() {
        let mut camera = Camera2D::new();
        camera.set_scale(2.75);
        camera.offset = Point::new(-130.0, 42.5);
        for p in [
            Point::new(0.0, 0.0),
            Point::new(-320.0, 170.0),
            Point::new(1e3, -7.25),
        ] {
            let back = camera.to_world(camera.to_screen(p, CENTER), CENTER);
            assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zoom_at_keeps_point_under_cursor() {
        let mut camera = Camera2D::new();
        camera.offset = Point::new(25.0, -60.0);
        let cursors = [
            Point::new(100.0, 80.0),
            Point::new(1200.0, 700.0),
            CENTER,
        ];
        for cursor in cursors {
            for factor in [1.3, 0.7, 1.0012, 4.0] {
                let before = camera.to_world(cursor, CENTER);
                camera.zoom_at(cursor, CENTER, factor);
                let after = camera.to_world(cursor, CENTER);
                assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-6);
                assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_zoom_at_clamps_scale() {
        let mut camera = Camera2D::new();
        let cursor = Point::new(300.0, 200.0);
        for factor in [50.0, 0.001, 3.0, 1e9, 1e-9, 0.5] {
            camera.zoom_at(cursor, CENTER, factor);
            assert!(camera.scale() >= Camera2D::SCALE_MIN);
            assert!(camera.scale() <= Camera2D::SCALE_MAX);
        }
        camera.zoom_at(cursor, CENTER, 1e9);
        assert_relative_eq!(camera.scale(), Camera2D::SCALE_MAX);
    }

    #[test]
    fn test_zoom_at_clamped_still_anchors_cursor() {
        let mut camera = Camera2D::new();
        let cursor = Point::new(900.0, 100.0);
        let before = camera.to_world(cursor, CENTER);
        camera.zoom_at(cursor, CENTER, 100.0);
        let after = camera.to_world(cursor, CENTER);
        assert_abs_diff_eq!(before.x, after.x, epsilon = 1e-6);
        assert_abs_diff_eq!(before.y, after.y, epsilon = 1e-6);
    }

    #[test]
    fn test_with_scale_bounds_clamps_current_scale() {
        let camera = Camera2D::new().with_scale_bounds(2.0, 8.0);
        assert_relative_eq!(camera.scale(), 2.0);
        assert_relative_eq!(camera.scale_min(), 2.0);
        assert_relative_eq!(camera.scale_max(), 8.0);
    }

    #[test]
    fn test_pick_radius_shrinks_with_zoom() {
        let mut camera = Camera2D::new();
        let r1 = camera.pick_radius_world(10.0);
        camera.set_scale(2.0);
        let r2 = camera.pick_radius_world(10.0);
        assert_relative_eq!(r2, r1 / 2.0);
    }

    #[test]
    fn test_set_scale_keeps_scale_within_bounds() {
        let mut camera = Camera2D::new();
        camera.set_scale(100.0);
        assert_relative_eq!(camera.scale(), Camera2D::SCALE_MAX);
        camera.set_scale(-3.0);
        assert_relative_eq!(camera.scale(), Camera2D::SCALE_MIN);
        camera.set_scale(f64::NAN);
        assert_relative_eq!(camera.scale(), Camera2D::SCALE_MIN);
        camera.set_scale(f64::INFINITY);
        assert_relative_eq!(camera.scale(), Camera2D::SCALE_MAX);
    }
}
