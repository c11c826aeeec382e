//! Blossom (Polarform) einer kubischen Bézier-Kurve.
//!
//! Dieselbe Rekursion wie in [`super::curve::build_pyramid`], aber mit einem
//! eigenen Parameter pro Stufe: t1 für Stufe 1, t2 für Stufe 2, t3 für Stufe 3.

use super::interpolation::{lerp, Point};

/// Toleranz, ab der drei Parameter als identisch gelten (Punkt liegt auf der Kurve).
pub const DIAGONAL_EPSILON: f64 = 1e-6;

/// Alle Zwischenstufen einer Blossom-Auswertung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlossomLevels {
    /// Stufe 1 (Parameter t1): C₀', C₁', C₂'
    pub level1: [Point; 3],
    /// Stufe 2 (Parameter t2): C₀'', C₁''
    pub level2: [Point; 2],
    /// Stufe 3 (Parameter t3): der Blossom-Wert C
    pub value: Point,
}

impl BlossomLevels {
    /// `true` wenn t1 = t2 = t3 (innerhalb [`DIAGONAL_EPSILON`]).
    ///
    /// Dann ist `value` der gewöhnliche Kurvenpunkt B(t1).
    pub fn is_diagonal(t1: f64, t2: f64, t3: f64) -> bool {
        (t1 - t2).abs() < DIAGONAL_EPSILON && (t2 - t3).abs() < DIAGONAL_EPSILON
    }
}

/// Wertet den Blossom der kubischen Kurve `ctrl` an (t1, t2, t3) aus.
///
/// Nur für genau vier Kontrollpunkte definiert; das Erzwingen der Punktzahl
/// liegt beim Aufrufer.
pub fn blossom(ctrl: &[Point; 4], t1: f64, t2: f64, t3: f64) -> BlossomLevels {
    let [c0, c1, c2, c3] = *ctrl;

    let c01 = lerp(c0, c1, t1);
    let c11 = lerp(c1, c2, t1);
    let c21 = lerp(c2, c3, t1);

    let c02 = lerp(c01, c11, t2);
    let c12 = lerp(c11, c21, t2);

    let c03 = lerp(c02, c12, t3);

    BlossomLevels {
        level1: [c01, c11, c21],
        level2: [c02, c12],
        value: c03,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::curve::{build_pyramid, evaluate};
    use approx::assert_abs_diff_eq;

    fn square_cubic() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ]
    }

    fn preset_cubic() -> [Point; 4] {
        [
            Point::new(-320.0, 170.0),
            Point::new(-120.0, -190.0),
            Point::new(120.0, -190.0),
            Point::new(320.0, 170.0),
        ]
    }

    fn skewed_cubic() -> [Point; 4] {
        [
            Point::new(1.5, -2.0),
            Point::new(7.25, 3.0),
            Point::new(-4.0, 8.5),
            Point::new(12.0, 1.0),
        ]
    }

    #[test]
    fn diagonal_blossom_equals_curve_point() {
        let cases = [
            (square_cubic(), 0.5),
            (square_cubic(), 0.3),
            (preset_cubic(), 0.3),
            (skewed_cubic(), 0.3),
            (skewed_cubic(), 0.85),
        ];
        for (ctrl, u) in cases {
            let b = blossom(&ctrl, u, u, u);
            let p = evaluate(&ctrl, u);
            assert_abs_diff_eq!(b.value.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(b.value.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn diagonal_levels_equal_pyramid_levels() {
        let ctrl = preset_cubic();
        let b = blossom(&ctrl, 0.6, 0.6, 0.6);
        let pyramid = build_pyramid(&ctrl, 0.6);
        assert_eq!(pyramid.levels[1], b.level1.to_vec());
        assert_eq!(pyramid.levels[2], b.level2.to_vec());
    }

    #[test]
    fn blossom_reproduces_control_points_at_corners() {
        let ctrl = skewed_cubic();
        assert_eq!(blossom(&ctrl, 0.0, 0.0, 0.0).value, ctrl[0]);
        assert_eq!(blossom(&ctrl, 0.0, 0.0, 1.0).value, ctrl[1]);
        assert_eq!(blossom(&ctrl, 0.0, 1.0, 1.0).value, ctrl[2]);
        assert_eq!(blossom(&ctrl, 1.0, 1.0, 1.0).value, ctrl[3]);
    }

    #[test]
    fn blossom_value_is_symmetric_in_its_arguments() {
        let ctrl = skewed_cubic();
        let reference = blossom(&ctrl, 0.5, 0.6, 0.8).value;
        for (a, b, c) in [
            (0.6, 0.5, 0.8),
            (0.8, 0.6, 0.5),
            (0.5, 0.8, 0.6),
            (0.6, 0.8, 0.5),
            (0.8, 0.5, 0.6),
        ] {
            let permuted = blossom(&ctrl, a, b, c).value;
            assert_abs_diff_eq!(permuted.x, reference.x, epsilon = 1e-9);
            assert_abs_diff_eq!(permuted.y, reference.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn is_diagonal_detects_equal_parameters() {
        assert!(BlossomLevels::is_diagonal(0.4, 0.4, 0.4));
        assert!(!BlossomLevels::is_diagonal(0.5, 0.6, 0.8));
        assert!(!BlossomLevels::is_diagonal(0.4, 0.4, 0.41));
    }
}
