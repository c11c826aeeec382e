//! Play-Animation des Kurvenparameters als explizite Tick-Funktion.

use crate::shared::options::PLAY_STEP;

/// Zustand der Parameter-Animation ("Play t").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Läuft die Animation?
    pub playing: bool,
    /// Fortschritt pro Tick
    pub step: f64,
}

impl Animation {
    /// Gestoppte Animation mit Standard-Schrittweite.
    pub fn new() -> Self {
        Self {
            playing: false,
            step: PLAY_STEP,
        }
    }

    /// Gestoppte Animation mit eigener Schrittweite.
    pub fn with_step(step: f64) -> Self {
        Self {
            playing: false,
            step,
        }
    }

    /// Schaltet zwischen Play und Pause um.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Stoppt die Animation.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Ein Frame: liefert den nächsten Parameterwert.
    ///
    /// Gestoppt bleibt `t` unverändert; über 1 hinaus springt der Wert auf 0.
    pub fn tick(&self, t: f64) -> f64 {
        if !self.playing {
            return t;
        }
        let next = t + self.step;
        if next > 1.0 {
            0.0
        } else {
            next
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}
