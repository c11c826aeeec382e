//! Drag-Lifecycle: Kontrollpunkt ziehen und Kamera-Pan.

use super::{screen_pos_to_world, InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use crate::core::Point;

impl InputState {
    /// Erkennt Drag-Beginn: Ctrl = Pan, sonst Kontrollpunkt-Pick.
    pub(crate) fn handle_drag_start(
        &mut self,
        ctx: &ViewportContext,
        modifiers: egui::Modifiers,
        events: &mut Vec<AppIntent>,
    ) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        if modifiers.ctrl || modifiers.command {
            self.primary_drag_mode = PrimaryDragMode::CameraPan;
            return;
        }

        // Pick an der Druckposition, nicht an der bereits verschobenen Position
        let press_pos = ctx
            .ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| ctx.response.interact_pointer_pos());
        if let Some(pointer_pos) = press_pos {
            let world_pos =
                screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
            events.push(AppIntent::PointDragStarted { world_pos });
            self.primary_drag_mode = PrimaryDragMode::PointDrag;
        }
    }

    /// Verarbeitet Maus-Bewegungen während aktiver Drags.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }
        let delta = Point::new(pointer_delta.x as f64, pointer_delta.y as f64);

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::PointDrag => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        let world_pos = screen_pos_to_world(
                            pointer_pos,
                            ctx.response,
                            ctx.viewport_size,
                            ctx.camera,
                        );
                        events.push(AppIntent::PointDragged { world_pos });
                    }
                }
                PrimaryDragMode::CameraPan => events.push(AppIntent::CameraPan { delta }),
                PrimaryDragMode::None => {}
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan { delta });
        }
    }

    /// Beendet den primären Drag.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped() {
            return;
        }
        if self.primary_drag_mode == PrimaryDragMode::PointDrag {
            events.push(AppIntent::PointDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
