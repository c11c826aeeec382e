//! Zentrale Konfiguration für den Bézier-/Blossom-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Editierte Kontrollpunkte und die Kamera werden nie gespeichert.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimale Kamera-Skalierung.
pub const CAMERA_SCALE_MIN: f64 = 0.2;
/// Maximale Kamera-Skalierung.
pub const CAMERA_SCALE_MAX: f64 = 6.0;
/// Zoom-Empfindlichkeit pro Scroll-Pixel: `factor = exp(scroll · sensitivity)`.
pub const SCROLL_ZOOM_SENSITIVITY: f64 = 0.0012;

// ── Auto-Fit ────────────────────────────────────────────────────────

/// Rand um die Bounding-Box in Screen-Pixeln (größer = weiter herausgezoomt).
pub const FIT_MARGIN_PX: f64 = 180.0;
/// Sicherheitsfaktor (< 1) auf die Ziel-Skalierung.
pub const FIT_SAFETY_FACTOR: f64 = 0.92;
/// Anteil des Ziels pro Aufruf beim geglätteten Fit.
pub const FIT_BLEND_WEIGHT: f64 = 0.12;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius für Kontrollpunkte in Screen-Pixeln.
pub const PICK_RADIUS_PX: f64 = 10.0;
/// Parameter-Fortschritt pro Frame bei laufender Animation.
pub const PLAY_STEP: f64 = 0.0025;

// ── Darstellung ─────────────────────────────────────────────────────

/// Gitterabstand in Welteinheiten.
pub const GRID_SPACING_WORLD: f64 = 60.0;
/// Länge der Tangente relativ zu B'(t).
pub const TANGENT_DRAW_SCALE: f64 = 0.25;

/// Alle zur Laufzeit einstellbaren Viewer-Optionen.
/// Wird als `bezier_blossom_viewer.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimale Skalierung
    pub camera_scale_min: f64,
    /// Maximale Skalierung
    pub camera_scale_max: f64,
    /// Zoom-Empfindlichkeit des Mausrads
    pub scroll_zoom_sensitivity: f64,

    // ── Auto-Fit ────────────────────────────────────────────────
    /// Rand in Pixeln
    pub fit_margin_px: f64,
    /// Sicherheitsfaktor auf die Ziel-Skalierung
    pub fit_safety_factor: f64,
    /// Blend-Gewicht beim geglätteten Fit
    pub fit_blend_weight: f64,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte in Pixeln
    pub pick_radius_px: f64,
    /// Animationsschritt pro Frame
    pub play_step: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Gitterabstand in Welteinheiten
    pub grid_spacing_world: f64,
    /// Skalierung der Tangentendarstellung
    pub tangent_draw_scale: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            camera_scale_min: CAMERA_SCALE_MIN,
            camera_scale_max: CAMERA_SCALE_MAX,
            scroll_zoom_sensitivity: SCROLL_ZOOM_SENSITIVITY,

            fit_margin_px: FIT_MARGIN_PX,
            fit_safety_factor: FIT_SAFETY_FACTOR,
            fit_blend_weight: FIT_BLEND_WEIGHT,

            pick_radius_px: PICK_RADIUS_PX,
            play_step: PLAY_STEP,

            grid_spacing_world: GRID_SPACING_WORLD,
            tangent_draw_scale: TANGENT_DRAW_SCALE,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_blossom_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_blossom_viewer.toml")
    }

    /// Mausrad-Delta → multiplikativer Zoom-Faktor.
    pub fn scroll_zoom_factor(&self, scroll_delta: f64) -> f64 {
        (scroll_delta * self.scroll_zoom_sensitivity).exp()
    }
}
