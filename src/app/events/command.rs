use crate::app::state::{DisplayFlags, Preset, ViewerMode};
use crate::core::Point;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Preset laden
    LoadPreset { preset: Preset },
    /// Kontrollpunkt anhängen
    AddPoint,
    /// Letzten Kontrollpunkt entfernen (nie unter zwei)
    RemovePoint,
    /// Auto-Fit für den nächsten Frame anfordern
    RequestFit { hard: bool },
    /// Darstellungsmodus setzen
    SetMode { mode: ViewerMode },
    /// Parameter t setzen
    SetParameter { value: f64 },
    /// Blossom-Parameter setzen
    SetBlossomParameter { stage: usize, value: f64 },
    /// Play/Pause umschalten
    TogglePlay,
    /// Zeichenebenen setzen
    SetDisplayFlags { flags: DisplayFlags },
    /// Viewport-Größe speichern
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben (Screen-Pixel)
    PanCamera { delta: Point },
    /// Kamera um `factor` zoomen, Punkt unter `cursor` bleibt stehen
    ZoomCamera { factor: f64, cursor: Point },
    /// Nächsten Kontrollpunkt innerhalb `max_distance` zum Ziehen auswählen
    BeginPointDrag { world_pos: Point, max_distance: f64 },
    /// Gezogenen Kontrollpunkt versetzen
    MoveDraggedPoint { world_pos: Point },
    /// Ziehen beenden
    EndPointDrag,
}
