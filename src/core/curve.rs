//! Kurvenauswertung ausschließlich über de Casteljau.
//!
//! Alle Kurvenpunkte (Zeichnen, Auto-Fit, Tangente, Polar-Kurve) laufen über
//! [`build_pyramid`]. Es gibt bewusst keine Bernstein-Auswertung, damit jede
//! Darstellung dieselbe Numerik teilt wie die Interpolations-Pyramide.

use super::interpolation::{lerp, Point};

/// Feinste erlaubte Schrittweite beim Sampling (maximale Dichte bei großem Zoom).
pub const SAMPLE_STEP_FINE: f64 = 0.0025;
/// Gröbste erlaubte Schrittweite beim Sampling.
pub const SAMPLE_STEP_COARSE: f64 = 0.05;
/// Zähler der zoomabhängigen Schrittweite: `step = 0.012 / scale`.
const SAMPLE_STEP_PER_SCALE: f64 = 0.012;

/// Vollständiges Interpolations-Dreieck für einen Parameterwert.
///
/// Level 0 ist die Kontrollfolge, Level k hat `n - k` Punkte, das letzte Level
/// genau einen Punkt (den Kurvenpunkt).
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    pub levels: Vec<Vec<Point>>,
}

impl Pyramid {
    /// Anzahl der Levels (= Anzahl Kontrollpunkte).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Punkt des letzten Levels, `None` bei leerer Kontrollfolge.
    pub fn apex(&self) -> Option<Point> {
        self.levels.last().and_then(|level| level.first()).copied()
    }
}

/// Baut die de-Casteljau-Pyramide für `ctrl` bei Parameter `u`.
///
/// Eine leere Kontrollfolge ergibt eine leere Pyramide.
pub fn build_pyramid(ctrl: &[Point], u: f64) -> Pyramid {
    let mut levels = Vec::with_capacity(ctrl.len());
    if ctrl.is_empty() {
        return Pyramid { levels };
    }
    levels.push(ctrl.to_vec());
    while let Some(prev) = levels.last() {
        if prev.len() <= 1 {
            break;
        }
        let next: Vec<Point> = prev.windows(2).map(|w| lerp(w[0], w[1], u)).collect();
        levels.push(next);
    }
    Pyramid { levels }
}

/// Kurvenpunkt B(u).
///
/// Voraussetzung: `ctrl` ist nicht leer. Für eine leere Folge wird der
/// Ursprung geliefert.
pub fn evaluate(ctrl: &[Point], u: f64) -> Point {
    build_pyramid(ctrl, u).apex().unwrap_or(Point::ZERO)
}

/// Level 1 der Pyramide: das Polar-Polygon `lerp(ctrl[i], ctrl[i+1], u)`.
pub fn polar_points(ctrl: &[Point], u: f64) -> Vec<Point> {
    ctrl.windows(2).map(|w| lerp(w[0], w[1], u)).collect()
}

/// Kontrollpolygon der ersten Ableitung: `d_i = n·(ctrl[i+1] - ctrl[i])`.
///
/// Das Ergebnis ist selbst wieder über [`evaluate`] auswertbar.
pub fn derivative_control_points(ctrl: &[Point]) -> Vec<Point> {
    let degree = ctrl.len().saturating_sub(1) as f64;
    ctrl.windows(2).map(|w| (w[1] - w[0]) * degree).collect()
}

/// Schrittweite für das Polyline-Sampling einer Kurve.
///
/// Nur über [`SamplingPolicy::FIT`], [`SamplingPolicy::for_scale`] oder
/// [`SamplingPolicy::with_step`] konstruierbar; die Schrittweite liegt immer in
/// [`SAMPLE_STEP_FINE`, `SAMPLE_STEP_COARSE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingPolicy {
    step: f64,
}

impl SamplingPolicy {
    /// Grobe, zoomunabhängige Abtastung für die Bounds-Berechnung des Auto-Fits.
    pub const FIT: Self = Self {
        step: SAMPLE_STEP_COARSE,
    };

    /// Schrittweite passend zur Bildschirm-Skalierung: größerer Zoom → dichtere Abtastung.
    pub fn for_scale(scale: f64) -> Self {
        Self::with_step(SAMPLE_STEP_PER_SCALE / scale.max(f64::EPSILON))
    }

    /// Feste Schrittweite, auf [`SAMPLE_STEP_FINE`, `SAMPLE_STEP_COARSE`] begrenzt.
    pub fn with_step(step: f64) -> Self {
        let step = if step.is_finite() {
            step.clamp(SAMPLE_STEP_FINE, SAMPLE_STEP_COARSE)
        } else {
            SAMPLE_STEP_COARSE
        };
        Self { step }
    }

    /// Schrittweite in Kurvenparametern.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Anzahl der Intervalle; der letzte Sample liegt exakt auf u = 1.
    fn intervals(&self) -> usize {
        (1.0 / self.step).ceil() as usize
    }
}

/// Lazy-Iterator über Kurvenpunkte von u = 0 bis einschließlich u = 1.
///
/// Neustartbar über `Clone` oder erneuten Aufruf von [`sample`].
#[derive(Debug, Clone)]
pub struct CurveSamples<'a> {
    ctrl: &'a [Point],
    step: f64,
    index: usize,
    intervals: usize,
}

impl Iterator for CurveSamples<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.intervals || self.ctrl.is_empty() {
            return None;
        }
        let u = (self.index as f64 * self.step).min(1.0);
        self.index += 1;
        Some(evaluate(self.ctrl, u))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.ctrl.is_empty() {
            0
        } else {
            self.intervals.saturating_add(1).saturating_sub(self.index)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples<'_> {}

/// Tastet die Kurve mit der Schrittweite aus `policy` ab.
pub fn sample(ctrl: &[Point], policy: SamplingPolicy) -> CurveSamples<'_> {
    CurveSamples {
        ctrl,
        step: policy.step,
        index: 0,
        intervals: policy.intervals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ]
    }

    #[test]
    fn pyramid_level_lengths_shrink_by_one() {
        for n in 1..=7 {
            let ctrl: Vec<Point> = (0..n).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
            for &u in &[0.0, 0.25, 0.7, 1.0] {
                let pyramid = build_pyramid(&ctrl, u);
                assert_eq!(pyramid.depth(), n);
                for (k, level) in pyramid.levels.iter().enumerate() {
                    assert_eq!(level.len(), n - k);
                }
            }
        }
    }

    #[test]
    fn single_point_pyramid_is_the_control_sequence() {
        let ctrl = [Point::new(3.0, 4.0)];
        let pyramid = build_pyramid(&ctrl, 0.4);
        assert_eq!(pyramid.levels, vec![ctrl.to_vec()]);
        assert_eq!(evaluate(&ctrl, 0.4), ctrl[0]);
    }

    #[test]
    fn empty_control_sequence_gives_empty_pyramid() {
        let pyramid = build_pyramid(&[], 0.5);
        assert_eq!(pyramid.depth(), 0);
        assert!(pyramid.apex().is_none());
    }

    #[test]
    fn evaluate_hits_endpoints() {
        let ctrl = vec![
            Point::new(-320.0, 170.0),
            Point::new(-120.0, -190.0),
            Point::new(120.0, -190.0),
            Point::new(320.0, 170.0),
            Point::new(400.0, 0.0),
        ];
        assert_eq!(evaluate(&ctrl, 0.0), ctrl[0]);
        assert_eq!(evaluate(&ctrl, 1.0), ctrl[4]);
    }

    #[test]
    fn straight_line_midpoint() {
        let ctrl = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let mid = evaluate(&ctrl, 0.5);
        assert_relative_eq!(mid.x, 5.0);
        assert_relative_eq!(mid.y, 0.0);
    }

    #[test]
    fn cubic_midpoint_matches_hand_computed_value() {
        // (P0 + 3·P1 + 3·P2 + P3) / 8
        let mid = evaluate(&cubic(), 0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn polar_points_equal_first_pyramid_level() {
        let ctrl = cubic();
        let pyramid = build_pyramid(&ctrl, 0.3);
        assert_eq!(polar_points(&ctrl, 0.3), pyramid.levels[1]);
    }

    #[test]
    fn derivative_of_cubic_has_three_scaled_differences() {
        let ctrl = cubic();
        let d = derivative_control_points(&ctrl);
        assert_eq!(d.len(), 3);
        for i in 0..3 {
            let expected = (ctrl[i + 1] - ctrl[i]) * 3.0;
            assert_relative_eq!(d[i].x, expected.x);
            assert_relative_eq!(d[i].y, expected.y);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let ctrl = cubic();
        let d = derivative_control_points(&ctrl);
        let h = 1e-6;
        let u = 0.37;
        let numeric = (evaluate(&ctrl, u + h) - evaluate(&ctrl, u - h)) / (2.0 * h);
        let exact = evaluate(&d, u);
        assert_relative_eq!(numeric.x, exact.x, epsilon = 1e-5);
        assert_relative_eq!(numeric.y, exact.y, epsilon = 1e-5);
    }

    #[test]
    fn derivative_of_single_point_is_empty() {
        assert!(derivative_control_points(&[Point::ONE]).is_empty());
    }

    #[test]
    fn sample_covers_both_endpoints() {
        let ctrl = cubic();
        let samples: Vec<Point> = sample(&ctrl, SamplingPolicy::with_step(0.03)).collect();
        assert_eq!(samples.first().copied(), Some(ctrl[0]));
        assert_eq!(samples.last().copied(), Some(ctrl[3]));
        assert_eq!(samples.len(), 35);
    }

    #[test]
    fn sample_is_restartable() {
        let ctrl = cubic();
        let iter = sample(&ctrl, SamplingPolicy::FIT);
        let first: Vec<Point> = iter.clone().collect();
        let second: Vec<Point> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 21);
    }

    #[test]
    fn sampling_step_is_bounded() {
        assert_relative_eq!(SamplingPolicy::for_scale(0.01).step(), SAMPLE_STEP_COARSE);
        assert_relative_eq!(SamplingPolicy::for_scale(1000.0).step(), SAMPLE_STEP_FINE);
        assert_relative_eq!(SamplingPolicy::for_scale(1.0).step(), 0.012);
        assert_relative_eq!(SamplingPolicy::with_step(f64::NAN).step(), SAMPLE_STEP_COARSE);
    }

    #[test]
    fn degenerate_steps_are_clamped_and_sampling_terminates() {
        let ctrl = cubic();
        for step in [0.0, -0.3, f64::MIN_POSITIVE, f64::INFINITY, 2.0] {
            let policy = SamplingPolicy::with_step(step);
            assert!(policy.step() >= SAMPLE_STEP_FINE);
            assert!(policy.step() <= SAMPLE_STEP_COARSE);

            let iter = sample(&ctrl, policy);
            let (lower, upper) = iter.size_hint();
            assert_eq!(Some(lower), upper);
            assert!(lower <= 402);

            let samples: Vec<Point> = iter.collect();
            assert_eq!(samples.len(), lower);
            assert_eq!(samples.first().copied(), Some(ctrl[0]));
            assert_eq!(samples.last().copied(), Some(ctrl[3]));
        }
    }

    #[test]
    fn zoom_scale_zero_or_negative_stays_in_bounds() {
        assert_relative_eq!(SamplingPolicy::for_scale(0.0).step(), SAMPLE_STEP_COARSE);
        assert_relative_eq!(SamplingPolicy::for_scale(-2.0).step(), SAMPLE_STEP_COARSE);
        assert_relative_eq!(SamplingPolicy::for_scale(f64::NAN).step(), SAMPLE_STEP_COARSE);
    }

    #[test]
    fn denser_sampling_at_larger_scale() {
        let ctrl = cubic();
        let coarse = sample(&ctrl, SamplingPolicy::for_scale(0.5)).len();
        let fine = sample(&ctrl, SamplingPolicy::for_scale(4.0)).len();
        assert!(fine > coarse);
    }
}
