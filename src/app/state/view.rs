use crate::app::AutoFit;
use crate::core::{Camera2D, Point};
use crate::shared::ViewerOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Auto-Fit mit ausstehender Anforderung
    pub auto_fit: AutoFit,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::from_options(&ViewerOptions::default())
    }

    /// Erstellt den View-Zustand mit Kamera-Grenzen und Fit-Parametern aus den Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            camera: Camera2D::new()
                .with_scale_bounds(options.camera_scale_min, options.camera_scale_max),
            viewport_size: [0.0, 0.0],
            auto_fit: AutoFit::from_options(options),
        }
    }

    /// Viewport-Größe als Weltvektor.
    pub fn viewport_size(&self) -> Point {
        Point::new(self.viewport_size[0] as f64, self.viewport_size[1] as f64)
    }

    /// Mittelpunkt des Viewports in lokalen Screen-Koordinaten.
    pub fn viewport_center(&self) -> Point {
        self.viewport_size() * 0.5
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
