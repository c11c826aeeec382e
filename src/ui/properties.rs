//! Properties-Panel (rechts): Kurvenparameter und Sichtbarkeit der Ebenen.

use crate::app::{AppIntent, AppState, ViewerMode};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            match state.mode {
                ViewerMode::Normal => render_normal_params(ui, state, &mut events),
                ViewerMode::Blossom => render_blossom_params(ui, state, &mut events),
            }

            ui.separator();
            render_display_flags(ui, state, &mut events);
        });

    events
}

fn render_normal_params(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.heading("Parameter");

    let mut t = state.params.t();
    let response = ui.add(
        egui::Slider::new(&mut t, 0.0..=1.0)
            .text("t")
            .fixed_decimals(3),
    );
    if response.changed() {
        events.push(AppIntent::ParameterChanged { value: t });
    }

    let label = if state.animation.playing {
        "⏸ Pause"
    } else {
        "▶ Play"
    };
    if ui.button(label).clicked() {
        events.push(AppIntent::TogglePlayRequested);
    }
}

fn render_blossom_params(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.heading("Blossom");

    for (index, mut value) in state.params.blossom().into_iter().enumerate() {
        let stage = index + 1;
        let response = ui.add(
            egui::Slider::new(&mut value, 0.0..=1.0)
                .text(format!("t{}", stage))
                .fixed_decimals(3),
        );
        if response.changed() {
            events.push(AppIntent::BlossomParameterChanged { stage, value });
        }
    }
}

fn render_display_flags(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.heading("Anzeige");

    let mut flags = state.display;
    let mut changed = false;

    changed |= ui.checkbox(&mut flags.grid, "Gitter").changed();
    match state.mode {
        ViewerMode::Normal => {
            changed |= ui.checkbox(&mut flags.curve, "Kurve").changed();
            changed |= ui.checkbox(&mut flags.point, "Punkt B(t)").changed();
            changed |= ui.checkbox(&mut flags.polar_polygon, "Polar-Polygon").changed();
            changed |= ui.checkbox(&mut flags.polar_curve, "Polar-Kurve").changed();
            changed |= ui.checkbox(&mut flags.tangent, "Tangente").changed();
        }
        ViewerMode::Blossom => {
            changed |= ui.checkbox(&mut flags.blossom_curve, "Kurve").changed();
        }
    }

    if changed {
        events.push(AppIntent::DisplayFlagsChanged { flags });
    }
}
