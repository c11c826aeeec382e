//! Use-Case-Funktionen für Kontrollpunkte: Hinzufügen, Entfernen, Ziehen.

use crate::app::AppState;
use crate::core::Point;

/// Minimale Anzahl Kontrollpunkte.
pub const MIN_POINTS: usize = 2;
/// Punktzahl im Blossom-Modus.
pub const CUBIC_POINTS: usize = 4;

/// Hängt einen Kontrollpunkt auf der x-Achse an.
pub fn add_point(state: &mut AppState) {
    let n = state.control_points.len() as f64;
    let point = Point::new((n - 2.0) * 60.0, 0.0);
    state.control_points.push(point);
    log::debug!(
        "Kontrollpunkt hinzugefügt bei ({:.1}, {:.1}), jetzt {}",
        point.x,
        point.y,
        state.control_points.len()
    );
}

/// Entfernt den letzten Kontrollpunkt, solange mehr als zwei vorhanden sind.
pub fn remove_point(state: &mut AppState) {
    if state.control_points.len() > MIN_POINTS {
        state.control_points.pop();
        if state
            .dragged_point
            .is_some_and(|idx| idx >= state.control_points.len())
        {
            state.dragged_point = None;
        }
    }
}

/// Bringt die Kontrollfolge auf genau vier Punkte (Abschneiden oder Auffüllen).
pub fn coerce_to_cubic(points: &mut Vec<Point>) {
    points.truncate(CUBIC_POINTS);
    while points.len() < CUBIC_POINTS {
        let n = points.len() as f64;
        points.push(Point::new(-60.0 + n * 120.0, 0.0));
    }
}

/// Wählt den ersten Kontrollpunkt innerhalb `max_distance` zum Ziehen aus.
pub fn begin_drag(state: &mut AppState, world_pos: Point, max_distance: f64) {
    state.dragged_point = state
        .control_points
        .iter()
        .position(|p| p.distance(world_pos) < max_distance);
    if let Some(idx) = state.dragged_point {
        log::debug!("Ziehe Kontrollpunkt {}", idx);
    }
}

/// Versetzt den gezogenen Kontrollpunkt; ohne aktiven Drag keine Operation.
pub fn drag_to(state: &mut AppState, world_pos: Point) {
    if let Some(point) = state
        .dragged_point
        .and_then(|idx| state.control_points.get_mut(idx))
    {
        *point = world_pos;
    }
}

/// Beendet das Ziehen.
pub fn end_drag(state: &mut AppState) {
    state.dragged_point = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_point_appends_on_x_axis() {
        let mut state = AppState::new();
        add_point(&mut state);
        assert_eq!(state.point_count(), 5);
        assert_eq!(state.control_points[4], Point::new(120.0, 0.0));
    }

    #[test]
    fn remove_point_never_goes_below_two() {
        let mut state = AppState::new();
        for _ in 0..10 {
            remove_point(&mut state);
        }
        assert_eq!(state.point_count(), MIN_POINTS);
    }

    #[test]
    fn remove_point_drops_stale_drag_index() {
        let mut state = AppState::new();
        state.dragged_point = Some(3);
        remove_point(&mut state);
        assert_eq!(state.dragged_point, None);
    }

    #[test]
    fn coerce_truncates_and_pads() {
        let mut long: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
        coerce_to_cubic(&mut long);
        assert_eq!(long.len(), 4);
        assert_eq!(long[3], Point::new(3.0, 0.0));

        let mut short = vec![Point::new(-5.0, 1.0), Point::new(5.0, 1.0)];
        coerce_to_cubic(&mut short);
        assert_eq!(
            short,
            vec![
                Point::new(-5.0, 1.0),
                Point::new(5.0, 1.0),
                Point::new(180.0, 0.0),
                Point::new(300.0, 0.0),
            ]
        );
    }

    #[test]
    fn drag_moves_only_the_picked_point() {
        let mut state = AppState::new();
        let original = state.control_points.clone();

        begin_drag(&mut state, Point::new(-118.0, -193.0), 10.0);
        assert_eq!(state.dragged_point, Some(1));

        drag_to(&mut state, Point::new(0.0, 0.0));
        assert_eq!(state.control_points[1], Point::ZERO);
        assert_eq!(state.control_points[0], original[0]);
        assert_eq!(state.control_points[2], original[2]);

        end_drag(&mut state);
        drag_to(&mut state, Point::new(50.0, 50.0));
        assert_eq!(state.control_points[1], Point::ZERO);
    }

    #[test]
    fn begin_drag_outside_radius_picks_nothing() {
        let mut state = AppState::new();
        begin_drag(&mut state, Point::new(0.0, 0.0), 10.0);
        assert_eq!(state.dragged_point, None);
    }
}
