//! Gate Controller für zentrale Event-Verarbeitung und den Frame-Tick.

use super::{gesture, progress, GateEvent, GateIntent, GateState, GesturePhase, Progress};
use crate::shared::{curve_geometry, CurvePath, PROGRESS_VISIBLE_MIN_DY};
use glam::Vec2;
use std::time::Instant;

/// Renderbare Ausgabe eines Ticks: Kurve plus abgeleitete Größen.
/// Reiner Snapshot — die Darstellung liegt beim Host.
#[derive(Debug, Clone)]
pub struct GateFrame {
    /// Glatte Kurve durch alle Seilpunkte
    pub curve: CurvePath,
    /// Aktuelle Perlenposition
    pub bead: Vec2,
    /// Ruheposition der Perle (für Hinweis-Pfeil und Ring-Platzierung)
    pub rest_bead: Vec2,
    /// Abgeleiteter Fortschritt
    pub progress: Progress,
    /// Ob der Fortschrittsring angezeigt werden soll
    pub ring_visible: bool,
    /// Ob gerade aktiv an der Perle gezogen wird (Zeiger oder Tastatur)
    pub pulling: bool,
}

/// Orchestriert Intents und den Frame-Tick auf dem `GateState`.
///
/// Reihenfolge pro Frame ist verbindlich: Geste fortschreiben,
/// dann Physik-Step, dann abgeleitete Größen aus dem neuen Zustand.
#[derive(Default)]
pub struct GateController;

impl GateController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent und gibt entstandene Events zurück.
    ///
    /// Input-Handler mutieren nur Gestenzustand und Pin-Ziel — der
    /// Physik-Step läuft ausschließlich im `tick` (keine re-entranten
    /// Simulationsaufrufe).
    pub fn handle_intent(
        &mut self,
        state: &mut GateState,
        intent: GateIntent,
        now: Instant,
    ) -> Vec<GateEvent> {
        let mut events = Vec::new();

        match intent {
            GateIntent::PointerPressed { pos } => gesture::drag_started(state, pos),
            GateIntent::PointerMoved { pos } => gesture::drag_moved(state, pos),
            GateIntent::PointerReleased => gesture::drag_released(state, &mut events),
            GateIntent::KeyActivated => gesture::key_activated(state, now),
        }

        events
    }

    /// Führt genau einen Frame aus und gibt den renderbaren Snapshot zurück.
    ///
    /// Events (Tastatur-Unlock) landen in `events`; der Zustandsübergang
    /// ist committet bevor der Aufrufer die Events konsumiert, ein
    /// fehlschlagender Konsument kann die Geste also nicht korrumpieren.
    pub fn tick(
        &mut self,
        state: &mut GateState,
        now: Instant,
        events: &mut Vec<GateEvent>,
    ) -> GateFrame {
        gesture::advance_key_pull(state, now, events);
        gesture::advance_settling(state);

        let pin = state.pin_target();
        state.rope.step(pin);

        self.build_frame(state)
    }

    /// Baut den Frame-Snapshot aus dem frisch simulierten Zustand.
    fn build_frame(&self, state: &GateState) -> GateFrame {
        let bead = state.rope.bead();
        let rest_bead = state.options.rest_bead();
        let progress = progress::compute(bead.y, rest_bead.y, state.options.unlock_threshold);

        let pulling = state.gesture.phase == GesturePhase::Dragging
            || state.gesture.key_pull_until.is_some();
        let ring_visible = pulling && (bead.y - rest_bead.y) > PROGRESS_VISIBLE_MIN_DY;

        GateFrame {
            curve: curve_geometry::rope_to_curve(&state.rope.positions()),
            bead,
            rest_bead,
            progress,
            ring_visible,
            pulling,
        }
    }
}
