//! Use-Case-Funktionen für Modus, Kurvenparameter und Animation.

use super::points::coerce_to_cubic;
use crate::app::state::{DisplayFlags, ViewerMode};
use crate::app::AppState;
use anyhow::{ensure, Result};

/// Wechselt den Darstellungsmodus.
///
/// Der Blossom-Modus stoppt die Animation und erzwingt genau vier Kontrollpunkte.
pub fn set_mode(state: &mut AppState, mode: ViewerMode) {
    state.mode = mode;
    if mode == ViewerMode::Blossom {
        state.animation.stop();
        coerce_to_cubic(&mut state.control_points);
        state.dragged_point = None;
    }
}

/// Setzt t (geklemmt auf [0, 1]).
pub fn set_t(state: &mut AppState, value: f64) {
    state.params.set_t(value);
}

/// Setzt t1, t2 oder t3 (geklemmt auf [0, 1]).
///
/// Fehler bei einer Stufe außerhalb 1..=3; die Parameter bleiben dann unverändert.
pub fn set_blossom_parameter(state: &mut AppState, stage: usize, value: f64) -> Result<()> {
    ensure!(
        (1..=3).contains(&stage),
        "Unbekannte Blossom-Stufe {} (erwartet 1..=3)",
        stage
    );
    state.params.set_blossom(stage, value);
    Ok(())
}

/// Schaltet Play/Pause um; im Blossom-Modus ohne Wirkung.
pub fn toggle_play(state: &mut AppState) {
    if state.mode == ViewerMode::Blossom {
        return;
    }
    state.animation.toggle();
}

/// Übernimmt die Sichtbarkeit der Zeichenebenen.
pub fn set_display_flags(state: &mut AppState, flags: DisplayFlags) {
    state.display = flags;
}

/// Ein Animations-Tick: bewegt t im Normal-Modus weiter.
pub fn advance_animation(state: &mut AppState) {
    if state.mode != ViewerMode::Normal {
        return;
    }
    let next = state.animation.tick(state.params.t());
    state.params.set_t(next);
}
