//! Expliziter Frame-Scheduler als eigenes Objekt statt ambientem
//! Global-Zustand — mehrere Gate-Instanzen laufen so unabhängig.
//!
//! Der Host ruft pro Display-Refresh genau einen `GateController::tick`
//! auf, solange `is_running()` gilt. `stop()` gehört zum vollständigen
//! Widget-Teardown; das bloße Ab-/Anmelden von Input-Listenern (z.B.
//! deaktivierte Interaktion nach dem Unlock) stoppt den Loop nicht,
//! damit eine laufende Rückstellfeder zu Ende animiert.

/// Tick-Loop-Steuerung für eine Gate-Instanz.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    running: bool,
}

impl FrameLoop {
    /// Erstellt einen gestarteten Loop (das Gate animiert ab Mount).
    pub fn new() -> Self {
        Self { running: true }
    }

    /// Startet das Scheduling von Ticks.
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("FrameLoop gestartet");
        }
        self.running = true;
    }

    /// Stoppt das Scheduling von Ticks (vollständiger Teardown).
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("FrameLoop gestoppt");
        }
        self.running = false;
    }

    /// Ob pro Display-Refresh weiter getickt werden soll.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
