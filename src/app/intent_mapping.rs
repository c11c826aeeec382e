//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::ViewerMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PresetRequested { preset } => vec![
            AppCommand::LoadPreset { preset },
            AppCommand::RequestFit { hard: true },
        ],
        AppIntent::ResetViewRequested => vec![
            AppCommand::LoadPreset {
                preset: state.preset,
            },
            AppCommand::RequestFit { hard: true },
        ],
        // Im Blossom-Modus ist die Punktzahl fest
        AppIntent::AddPointRequested if state.mode == ViewerMode::Blossom => Vec::new(),
        AppIntent::RemovePointRequested if state.mode == ViewerMode::Blossom => Vec::new(),
        AppIntent::AddPointRequested => vec![
            AppCommand::AddPoint,
            AppCommand::RequestFit { hard: true },
        ],
        AppIntent::RemovePointRequested => vec![
            AppCommand::RemovePoint,
            AppCommand::RequestFit { hard: true },
        ],
        AppIntent::ModeChangeRequested { mode } => vec![AppCommand::SetMode { mode }],
        AppIntent::ParameterChanged { value } => vec![AppCommand::SetParameter { value }],
        AppIntent::BlossomParameterChanged { stage, value } => {
            vec![AppCommand::SetBlossomParameter { stage, value }]
        }
        AppIntent::TogglePlayRequested => vec![AppCommand::TogglePlay],
        AppIntent::DisplayFlagsChanged { flags } => vec![AppCommand::SetDisplayFlags { flags }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            scroll_delta,
            cursor,
        } => {
            let factor = state.options.scroll_zoom_factor(scroll_delta);
            vec![AppCommand::ZoomCamera { factor, cursor }]
        }
        AppIntent::PointDragStarted { world_pos } => {
            let max_distance = state
                .view
                .camera
                .pick_radius_world(state.options.pick_radius_px);
            vec![AppCommand::BeginPointDrag {
                world_pos,
                max_distance,
            }]
        }
        AppIntent::PointDragged { world_pos } => {
            if state.dragged_point.is_some() {
                vec![AppCommand::MoveDraggedPoint { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointDragEnded => vec![AppCommand::EndPointDrag],
    }
}
