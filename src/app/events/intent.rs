use crate::app::state::{DisplayFlags, Preset, ViewerMode};
use crate::core::Point;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Preset laden (Kontrollpunkte, Modus, Parameter)
    PresetRequested { preset: Preset },
    /// Kontrollpunkt anhängen
    AddPointRequested,
    /// Letzten Kontrollpunkt entfernen
    RemovePointRequested,
    /// Aktuelles Preset wiederherstellen und Kamera neu einpassen
    ResetViewRequested,
    /// Darstellungsmodus wechseln
    ModeChangeRequested { mode: ViewerMode },
    /// Slider für t bewegt
    ParameterChanged { value: f64 },
    /// Slider für t1/t2/t3 bewegt (`stage` = 1..=3)
    BlossomParameterChanged { stage: usize, value: f64 },
    /// Play/Pause von t umschalten
    TogglePlayRequested,
    /// Sichtbarkeit der Zeichenebenen geändert
    DisplayFlagsChanged { flags: DisplayFlags },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Screen-Delta verschieben
    CameraPan { delta: Point },
    /// Mausrad-Zoom auf die Cursor-Position (lokale Screen-Koordinaten)
    CameraZoom { scroll_delta: f64, cursor: Point },
    /// Primär-Drag im Viewport begonnen (Weltposition)
    PointDragStarted { world_pos: Point },
    /// Gezogener Kontrollpunkt bewegt (Weltposition)
    PointDragged { world_pos: Point },
    /// Primär-Drag beendet
    PointDragEnded,
}
