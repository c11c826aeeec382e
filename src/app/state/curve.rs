use crate::core::Point;

/// Darstellungsmodus des Viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerMode {
    /// de-Casteljau-Pyramide und Polar-Polygon bei Parameter t
    #[default]
    Normal,
    /// Kubischer Blossom mit drei Parametern t1, t2, t3
    Blossom,
}

/// Vordefinierte Kontrollpunkt-Layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Drei Punkte (quadratisch)
    Quadratic,
    /// Vier Punkte (kubisch)
    #[default]
    Cubic,
    /// Vier Punkte im Blossom-Modus
    Blossom,
}

impl Preset {
    /// Alle Presets in Anzeigereihenfolge.
    pub const ALL: [Preset; 3] = [Preset::Quadratic, Preset::Cubic, Preset::Blossom];

    /// Kontrollpunkte des Presets (Welt, zentriert um den Ursprung).
    pub fn control_points(self) -> Vec<Point> {
        match self {
            Preset::Quadratic => vec![
                Point::new(-260.0, 120.0),
                Point::new(0.0, -180.0),
                Point::new(260.0, 120.0),
            ],
            Preset::Cubic | Preset::Blossom => vec![
                Point::new(-320.0, 170.0),
                Point::new(-120.0, -190.0),
                Point::new(120.0, -190.0),
                Point::new(320.0, 170.0),
            ],
        }
    }

    /// Modus, in den das Preset schaltet.
    pub fn mode(self) -> ViewerMode {
        match self {
            Preset::Blossom => ViewerMode::Blossom,
            Preset::Quadratic | Preset::Cubic => ViewerMode::Normal,
        }
    }

    /// Beschriftung für Buttons.
    pub fn label(self) -> &'static str {
        match self {
            Preset::Quadratic => "Preset (3)",
            Preset::Cubic => "Preset (4)",
            Preset::Blossom => "Blossom",
        }
    }
}

/// Kurvenparameter; alle Setter klemmen auf [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    t: f64,
    t1: f64,
    t2: f64,
    t3: f64,
}

impl CurveParams {
    /// Startwert von t.
    pub const T_DEFAULT: f64 = 0.3;
    /// Startwerte der Blossom-Parameter.
    pub const BLOSSOM_DEFAULT: [f64; 3] = [0.5, 0.6, 0.8];

    pub fn new() -> Self {
        let [t1, t2, t3] = Self::BLOSSOM_DEFAULT;
        Self {
            t: Self::T_DEFAULT,
            t1,
            t2,
            t3,
        }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// Blossom-Parameter (t1, t2, t3).
    pub fn blossom(&self) -> [f64; 3] {
        [self.t1, self.t2, self.t3]
    }

    pub fn set_t(&mut self, value: f64) {
        self.t = clamp01(value);
    }

    /// Setzt den Blossom-Parameter `stage` (1..=3); andere Indizes werden ignoriert.
    pub fn set_blossom(&mut self, stage: usize, value: f64) {
        let value = clamp01(value);
        match stage {
            1 => self.t1 = value,
            2 => self.t2 = value,
            3 => self.t3 = value,
            _ => log::warn!("Unbekannte Blossom-Stufe {}", stage),
        }
    }

    /// Setzt die Blossom-Parameter auf die Startwerte zurück.
    pub fn reset_blossom(&mut self) {
        let [t1, t2, t3] = Self::BLOSSOM_DEFAULT;
        self.t1 = t1;
        self.t2 = t2;
        self.t3 = t3;
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Klemmt auf [0, 1]; NaN wird zu 0.
fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
