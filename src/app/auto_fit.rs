//! Auto-Fit: rahmt eine Punktmenge mit Rand im Viewport ein.
//!
//! Läuft nie selbstständig, sondern nur wenn ein Fit angefordert wurde,
//! genau einmal pro Anforderung. Hart (sofortiger Sprung) und geglättet
//! (Annäherung über mehrere Aufrufe) sind derselbe Ablauf mit anderem [`FitMode`].

use crate::core::{lerp, Camera2D, Point, WorldBounds};
use crate::shared::options::{FIT_BLEND_WEIGHT, FIT_MARGIN_PX, FIT_SAFETY_FACTOR};
use crate::shared::ViewerOptions;

/// Anwendungsmodus eines Fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Kamera springt direkt auf das Ziel
    Hard,
    /// Kamera nähert sich dem Ziel um das Blend-Gewicht an
    Smooth,
}

/// Ausstehende Fit-Anforderung.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitRequest {
    pub pending: bool,
    pub hard: bool,
}

impl FitRequest {
    /// Modus der ausstehenden Anforderung, `None` wenn keine aussteht.
    pub fn mode(&self) -> Option<FitMode> {
        match (self.pending, self.hard) {
            (false, _) => None,
            (true, true) => Some(FitMode::Hard),
            (true, false) => Some(FitMode::Smooth),
        }
    }
}

/// Zielzustand der Kamera für eine Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTarget {
    pub scale: f64,
    pub offset: Point,
    /// Mittelpunkt der eingerahmten Bounding-Box (Welt)
    pub center: Point,
}

/// Auto-Fit-Controller mit Anforderungs-Flags und Parametern.
#[derive(Debug, Clone)]
pub struct AutoFit {
    request: FitRequest,
    /// Rand um die Bounding-Box in Pixeln
    pub margin_px: f64,
    /// Faktor (< 1) auf die Ziel-Skalierung
    pub safety_factor: f64,
    /// Zielanteil pro Aufruf im geglätteten Modus
    pub blend_weight: f64,
}

impl AutoFit {
    /// Erstellt einen Controller mit Standardparametern.
    pub fn new() -> Self {
        Self {
            request: FitRequest::default(),
            margin_px: FIT_MARGIN_PX,
            safety_factor: FIT_SAFETY_FACTOR,
            blend_weight: FIT_BLEND_WEIGHT,
        }
    }

    /// Übernimmt die Fit-Parameter aus den Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            request: FitRequest::default(),
            margin_px: options.fit_margin_px,
            safety_factor: options.fit_safety_factor,
            blend_weight: options.fit_blend_weight.clamp(0.0, 1.0),
        }
    }

    /// Fordert einen Fit an. Eine ausstehende harte Anforderung bleibt hart.
    pub fn request_fit(&mut self, hard: bool) {
        self.request.pending = true;
        self.request.hard |= hard;
    }

    /// Ob ein Fit aussteht.
    pub fn is_pending(&self) -> bool {
        self.request.pending
    }

    /// Aktuelle Anforderung (für Anzeige und Tests).
    pub fn request(&self) -> FitRequest {
        self.request
    }

    /// Berechnet Ziel-Skalierung und -Offset für `points` im Viewport.
    pub fn compute_target<I>(
        &self,
        points: I,
        viewport_size: Point,
        camera: &Camera2D,
    ) -> FitTarget
    where
        I: IntoIterator<Item = Point>,
    {
        let bounds = WorldBounds::from_points(points);
        let extent = bounds.extent();
        let available = viewport_size - Point::splat(2.0 * self.margin_px);
        let fit = (available / extent).min_element();
        let scale = camera.clamp_scale(fit * self.safety_factor);
        let center = bounds.center();
        FitTarget {
            scale,
            offset: -center * scale,
            center,
        }
    }

    /// Wendet einen ausstehenden Fit auf die Kamera an und löscht die Anforderung.
    ///
    /// Gibt `true` zurück wenn die Kamera verändert wurde.
    pub fn apply<I>(&mut self, camera: &mut Camera2D, points: I, viewport_size: Point) -> bool
    where
        I: IntoIterator<Item = Point>,
    {
        let Some(mode) = self.request.mode() else {
            return false;
        };
        let target = self.compute_target(points, viewport_size, camera);
        self.apply_target(camera, &target, mode);
        self.request = FitRequest::default();

        log::debug!(
            "Auto-Fit ({:?}): Zentrum ({:.1}, {:.1}), Skalierung {:.3}",
            mode,
            target.center.x,
            target.center.y,
            camera.scale()
        );
        true
    }

    /// Setzt (Hard) bzw. mischt (Smooth) die Kamera in Richtung `target`.
    pub fn apply_target(&self, camera: &mut Camera2D, target: &FitTarget, mode: FitMode) {
        let weight = match mode {
            FitMode::Hard => 1.0,
            FitMode::Smooth => self.blend_weight,
        };
        camera.set_scale(camera.scale() + (target.scale - camera.scale()) * weight);
        // Offset-Ziel passend zur tatsächlich gesetzten Skalierung
        let target_offset = -target.center * camera.scale();
        camera.offset = if mode == FitMode::Hard {
            target_offset
        } else {
            lerp(camera.offset, target_offset, weight)
        };
    }
}

impl Default for AutoFit {
    fn default() -> Self {
        Self::new()
    }
}
