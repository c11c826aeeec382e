use super::{CurveParams, DisplayFlags, Preset, ViewState, ViewerMode};
use crate::app::Animation;
use crate::core::Point;
use crate::shared::ViewerOptions;

/// Hauptzustand der Anwendung
///
/// Wird explizit an Controller, Frame-Zyklus und UI übergeben; es gibt
/// keinen globalen Editor-Zustand.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Editierbare Kontrollpunkte (immer mindestens zwei)
    pub control_points: Vec<Point>,
    /// Aktiver Darstellungsmodus
    pub mode: ViewerMode,
    /// Zuletzt geladenes Preset (Ziel von "Reset view")
    pub preset: Preset,
    /// Kurvenparameter t bzw. t1..t3
    pub params: CurveParams,
    /// Play-Animation von t
    pub animation: Animation,
    /// Kamera, Viewport und Auto-Fit
    pub view: ViewState,
    /// Sichtbare Zeichenebenen
    pub display: DisplayFlags,
    /// Index des gerade gezogenen Kontrollpunkts
    pub dragged_point: Option<usize>,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
}

impl AppState {
    /// Erstellt einen App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    ///
    /// Startet mit dem kubischen Preset und einem ausstehenden harten Fit.
    pub fn with_options(options: ViewerOptions) -> Self {
        let preset = Preset::default();
        let mut view = ViewState::from_options(&options);
        view.auto_fit.request_fit(true);
        Self {
            control_points: preset.control_points(),
            mode: preset.mode(),
            preset,
            params: CurveParams::new(),
            animation: Animation::with_step(options.play_step),
            view,
            display: DisplayFlags::default(),
            dragged_point: None,
            options,
        }
    }

    /// Anzahl der Kontrollpunkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
