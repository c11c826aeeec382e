//! Bézier Blossom Viewer.
//!
//! Interaktive Darstellung von Bézier-Kurven mit de-Casteljau-Pyramide,
//! Polar-Polygon und kubischem Blossom. egui + glow.

use bezier_blossom_viewer::{render, ui, AppController, AppIntent, AppState, ViewerOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bézier Blossom Viewer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Bézier Blossom Viewer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Blossom Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    /// Zeichenfläche des Canvas im aktuellen Frame
    canvas_rect: Option<egui::Rect>,
}

impl ViewerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let options = ViewerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            canvas_rect: None,
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.render_canvas(ctx);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                ));

                self.canvas_rect = Some(rect);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Führt den Frame-Zyklus aus und zeichnet die Szene auf den Canvas.
    fn render_canvas(&mut self, ctx: &egui::Context) {
        let Some(rect) = self.canvas_rect else {
            return;
        };
        let scene = self
            .controller
            .run_frame(&mut self.state, [rect.width(), rect.height()]);

        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(rect);
        render::render_scene(&painter, rect, &scene);
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.animation.playing
            || self.state.view.auto_fit.is_pending()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
