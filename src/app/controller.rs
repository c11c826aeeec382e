//! Application Controller für zentrale Event-Verarbeitung und den Frame-Zyklus.

use super::state::ViewerMode;
use super::{frame, render_scene, use_cases};
use super::{AppCommand, AppIntent, AppState};
use crate::core::SamplingPolicy;
use crate::shared::RenderScene;

/// Orchestriert UI-Events, Use-Cases und den Frame-Zyklus auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    ///
    /// Ungültige Commands (z.B. eine Blossom-Stufe außerhalb 1..=3) liefern
    /// einen Fehler und lassen den Zustand unverändert.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        log::trace!("Command: {:?}", command);

        match command {
            // === Kontrollpunkte & Presets ===
            AppCommand::LoadPreset { preset } => use_cases::presets::load_preset(state, preset),
            AppCommand::AddPoint => use_cases::points::add_point(state),
            AppCommand::RemovePoint => use_cases::points::remove_point(state),
            AppCommand::BeginPointDrag {
                world_pos,
                max_distance,
            } => use_cases::points::begin_drag(state, world_pos, max_distance),
            AppCommand::MoveDraggedPoint { world_pos } => {
                use_cases::points::drag_to(state, world_pos)
            }
            AppCommand::EndPointDrag => use_cases::points::end_drag(state),

            // === Modus & Parameter ===
            AppCommand::SetMode { mode } => use_cases::parameters::set_mode(state, mode),
            AppCommand::SetParameter { value } => use_cases::parameters::set_t(state, value),
            AppCommand::SetBlossomParameter { stage, value } => {
                use_cases::parameters::set_blossom_parameter(state, stage, value)?
            }
            AppCommand::TogglePlay => use_cases::parameters::toggle_play(state),
            AppCommand::SetDisplayFlags { flags } => {
                use_cases::parameters::set_display_flags(state, flags)
            }

            // === Kamera & Viewport ===
            AppCommand::RequestFit { hard } => use_cases::camera::request_fit(state, hard),
            AppCommand::SetViewportSize { size } => use_cases::camera::resize(state, size),
            AppCommand::PanCamera { delta } => use_cases::camera::pan(state, delta),
            AppCommand::ZoomCamera { factor, cursor } => {
                use_cases::camera::zoom_at(state, factor, cursor)
            }
        }

        Ok(())
    }

    /// Führt einen Frame aus und liefert die zu zeichnende Szene.
    ///
    /// Reihenfolge: Animation → Auto-Fit (falls angefordert) → Auswertung → Szene.
    pub fn run_frame(&mut self, state: &mut AppState, viewport_size: [f32; 2]) -> RenderScene {
        use_cases::camera::resize(state, viewport_size);
        if state.mode == ViewerMode::Blossom {
            use_cases::points::coerce_to_cubic(&mut state.control_points);
        }
        use_cases::parameters::advance_animation(state);

        if state.view.auto_fit.is_pending() {
            let fit_geometry = frame::evaluate_geometry(state, SamplingPolicy::FIT);
            let points = frame::points_of_interest(&state.control_points, &fit_geometry);
            let viewport = state.view.viewport_size();
            let view = &mut state.view;
            if view.auto_fit.apply(&mut view.camera, points, viewport) {
                log::info!(
                    "Kamera eingepasst: Skalierung {:.3}, Offset ({:.1}, {:.1})",
                    view.camera.scale(),
                    view.camera.offset.x,
                    view.camera.offset.y
                );
            }
        }

        // Abtastdichte passend zur Kamera dieses Frames, also nach dem Fit
        let policy = SamplingPolicy::for_scale(state.view.camera.scale());
        let geometry = frame::evaluate_geometry(state, policy);

        render_scene::build(state, geometry)
    }
}
