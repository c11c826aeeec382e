//! Lineare Interpolation zwischen zwei Weltpunkten.

use glam::DVec2;

/// Punkt im Weltkoordinatensystem.
pub type Point = DVec2;

/// `a·(1-u) + b·u` komponentenweise.
///
/// `u` außerhalb von [0, 1] extrapoliert; Clamping ist Sache des Aufrufers.
#[inline]
pub fn lerp(a: Point, b: Point, u: f64) -> Point {
    a * (1.0 - u) + b * u
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -4.0);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        let mid = lerp(a, b, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, -2.0);
    }

    #[test]
    fn lerp_extrapolates_outside_unit_interval() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);

        assert_relative_eq!(lerp(a, b, 2.0).x, 20.0);
        assert_relative_eq!(lerp(a, b, -0.5).x, -5.0);
    }
}
