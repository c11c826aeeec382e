//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, ViewerMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.mode {
                ViewerMode::Normal => {
                    ui.label(format!(
                        "Modus: Normal | Punkte: {} | Grad: {} | t = {:.3}",
                        state.point_count(),
                        state.point_count().saturating_sub(1),
                        state.params.t()
                    ));
                }
                ViewerMode::Blossom => {
                    let [t1, t2, t3] = state.params.blossom();
                    ui.label(format!(
                        "Modus: Blossom | b({:.2}, {:.2}, {:.2})",
                        t1, t2, t3
                    ));
                }
            }

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.2}x | Offset: ({:.1}, {:.1})",
                camera.scale(), camera.offset.x, camera.offset.y
            ));

            if let Some(index) = state.dragged_point {
                ui.separator();
                ui.label(format!("Ziehe P{}", index));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("Ctrl/Mitte/Rechts + Ziehen: Pan | Mausrad: Zoom");
            });
        });
    });
}
