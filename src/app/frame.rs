//! Auswertung der Frame-Geometrie und der Punkte für den Auto-Fit.

use crate::app::state::ViewerMode;
use crate::app::AppState;
use crate::core::{
    blossom, build_pyramid, derivative_control_points, evaluate, sample, BlossomLevels, Point,
    SamplingPolicy,
};
use crate::shared::{BlossomGeometry, FrameGeometry, NormalGeometry};

/// Wertet die Kurve(n) für den aktuellen Modus und die aktuellen Parameter aus.
///
/// `policy` bestimmt die Abtastdichte der gezeichneten Kurven.
pub fn evaluate_geometry(state: &AppState, policy: SamplingPolicy) -> FrameGeometry {
    let ctrl = state.control_points.as_slice();
    match (state.mode, <&[Point; 4]>::try_from(ctrl)) {
        (ViewerMode::Blossom, Ok(cubic)) => {
            FrameGeometry::Blossom(evaluate_blossom(cubic, state.params.blossom(), policy))
        }
        (ViewerMode::Blossom, Err(_)) => {
            log::warn!(
                "Blossom-Modus mit {} Kontrollpunkten, zeige Normal-Modus",
                ctrl.len()
            );
            FrameGeometry::Normal(evaluate_normal(state, policy))
        }
        (ViewerMode::Normal, _) => FrameGeometry::Normal(evaluate_normal(state, policy)),
    }
}

fn evaluate_normal(state: &AppState, policy: SamplingPolicy) -> NormalGeometry {
    let ctrl = state.control_points.as_slice();
    let t = state.params.t();
    let pyramid = build_pyramid(ctrl, t);
    let point = pyramid.apex().unwrap_or(Point::ZERO);

    let polar = pyramid.levels.get(1).cloned().unwrap_or_default();
    let (polar_curve, polar_point) = if polar.len() > 1 {
        (sample(&polar, policy).collect(), Some(evaluate(&polar, t)))
    } else {
        (Vec::new(), None)
    };

    let derivative = derivative_control_points(ctrl);
    let tangent_end = (!derivative.is_empty())
        .then(|| point + evaluate(&derivative, t) * state.options.tangent_draw_scale);

    NormalGeometry {
        t,
        curve: sample(ctrl, policy).collect(),
        polar_curve,
        point,
        polar_point,
        tangent_end,
        pyramid,
    }
}

fn evaluate_blossom(
    ctrl: &[Point; 4],
    params: [f64; 3],
    policy: SamplingPolicy,
) -> BlossomGeometry {
    let [t1, t2, t3] = params;
    let on_curve = BlossomLevels::is_diagonal(t1, t2, t3).then(|| evaluate(ctrl, t1));
    BlossomGeometry {
        params,
        levels: blossom(ctrl, t1, t2, t3),
        curve: sample(ctrl, policy).collect(),
        on_curve,
    }
}

/// Punkte, die nach einem Fit sichtbar sein müssen.
///
/// Normal: Kontrollpunkte, Polar-Polygon, Kurve und Polar-Kurve.
/// Blossom: Kontrollpunkte, alle Blossom-Stufen und Kurve.
/// Kurven werden zoomunabhängig mit [`SamplingPolicy::FIT`] abgetastet.
pub fn points_of_interest(control_points: &[Point], geometry: &FrameGeometry) -> Vec<Point> {
    let mut points = control_points.to_vec();
    match geometry {
        FrameGeometry::Normal(normal) => {
            let polar = normal.polar();
            points.extend_from_slice(polar);
            points.extend(sample(control_points, SamplingPolicy::FIT));
            if polar.len() > 1 {
                points.extend(sample(polar, SamplingPolicy::FIT));
            }
        }
        FrameGeometry::Blossom(b) => {
            points.extend_from_slice(&b.levels.level1);
            points.extend_from_slice(&b.levels.level2);
            points.push(b.levels.value);
            points.extend(sample(control_points, SamplingPolicy::FIT));
        }
    }
    points
}
