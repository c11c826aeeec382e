//! Use-Case-Funktionen für Presets.

use crate::app::state::{Preset, ViewerMode};
use crate::app::AppState;

/// Lädt ein Preset: Kontrollpunkte, Modus und Parameter.
///
/// Die Animation wird gestoppt. Der Fit wird separat über
/// `AppCommand::RequestFit` angefordert.
pub fn load_preset(state: &mut AppState, preset: Preset) {
    state.preset = preset;
    state.control_points = preset.control_points();
    state.mode = preset.mode();
    state.dragged_point = None;
    state.animation.stop();
    if preset.mode() == ViewerMode::Blossom {
        state.params.reset_blossom();
    }
    log::info!(
        "Preset {:?} geladen ({} Kontrollpunkte, Modus {:?})",
        preset,
        state.control_points.len(),
        state.mode
    );
}
