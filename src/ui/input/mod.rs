//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `drag`: Drag-Start/-Update/-Ende (Kontrollpunkt ziehen, Kamera-Pan)
//! - `zoom`: Scroll-Zoom auf Mausposition

mod drag;
mod zoom;

use crate::app::{AppIntent, Camera2D};
use crate::core::Point;

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Kontrollpunkt unter dem Cursor ziehen
    PointDrag,
    /// Ctrl + Drag: Kamera verschieben
    CameraPan,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
}

/// Verwaltet den Input-Zustand für das Viewport (Drag, Scroll)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_drag_mode: PrimaryDragMode::None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        let modifiers = ui.input(|i| i.modifiers);

        self.handle_drag_start(&ctx, modifiers, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Bildschirmposition → lokale Viewport-Koordinaten.
pub(crate) fn screen_pos_to_local(pointer_pos: egui::Pos2, response: &egui::Response) -> Point {
    let local = pointer_pos - response.rect.min;
    Point::new(local.x as f64, local.y as f64)
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> Point {
    let center = Point::new(viewport_size[0] as f64, viewport_size[1] as f64) * 0.5;
    camera.to_world(screen_pos_to_local(pointer_pos, response), center)
}
