//! Toolbar für Presets, Kontrollpunkte, Ansicht und Modus.

use crate::app::{AppIntent, AppState, Preset, ViewerMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let blossom = state.mode == ViewerMode::Blossom;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // ── Presets ──
            for preset in Preset::ALL {
                let button = egui::Button::new(preset.label()).selected(state.preset == preset);
                if ui.add(button).clicked() {
                    events.push(AppIntent::PresetRequested { preset });
                }
            }

            ui.separator();

            // ── Kontrollpunkte (im Blossom-Modus fix auf vier) ──
            ui.add_enabled_ui(!blossom, |ui| {
                if ui.button("+ Punkt").clicked() {
                    events.push(AppIntent::AddPointRequested);
                }
                if ui.button("− Punkt").clicked() {
                    events.push(AppIntent::RemovePointRequested);
                }
            });

            ui.separator();

            if ui.button("Reset view").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }

            ui.separator();

            // ── Modus ──
            ui.label("Modus:");
            for (mode, label) in [
                (ViewerMode::Normal, "Normal"),
                (ViewerMode::Blossom, "Blossom"),
            ] {
                if ui
                    .add(egui::Button::new(label).selected(state.mode == mode))
                    .clicked()
                    && state.mode != mode
                {
                    events.push(AppIntent::ModeChangeRequested { mode });
                }
            }
        });
    });

    events
}
