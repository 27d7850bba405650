//! Gate State — zentrale Datenhaltung.

use crate::core::Rope;
use crate::shared::GateOptions;
use glam::Vec2;
use std::time::Instant;

/// Phase der Zuggeste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Keine aktive Geste, Seil hängt frei
    #[default]
    Idle,
    /// Zeiger hält die Perle, Pin folgt der Eingabe
    Dragging,
    /// Losgelassen: Feder zieht den Offset zurück zur Ruhelage
    Settling,
}

/// Zustand der Zuggeste.
///
/// `offset` ist die Auslenkung der Perle relativ zur Ruheposition.
/// `velocity` wird ausschließlich während `Settling` benutzt.
#[derive(Debug, Clone)]
pub struct GestureState {
    /// Aktuelle Phase
    pub phase: GesturePhase,
    /// Eingabeposition bei Drag-Beginn (Gate-Koordinaten)
    pub origin: Vec2,
    /// Aktuelle Auslenkung relativ zur Ruheposition der Perle
    pub offset: Vec2,
    /// Feder-Geschwindigkeit (nur Settling)
    pub velocity: Vec2,
    /// Sticky: einmal gesetzt, für die Lebensdauer der Instanz nie gelöscht
    pub completed: bool,
    /// Ablaufzeitpunkt einer laufenden Tastatur-Aktivierung
    pub key_pull_until: Option<Instant>,
}

impl GestureState {
    /// Erstellt den Ruhezustand (Idle, keine Auslenkung).
    pub fn new() -> Self {
        Self {
            phase: GesturePhase::Idle,
            origin: Vec2::ZERO,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            completed: false,
            key_pull_until: None,
        }
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}

/// Gesamtzustand des Gates: Optionen, Seilsimulation und Gestenzustand.
///
/// Das Seil gehört exklusiv diesem State; andere Komponenten lesen es
/// nur als Snapshot innerhalb desselben Ticks.
pub struct GateState {
    /// Laufzeit-Optionen
    pub options: GateOptions,
    /// Seilsimulation
    pub rope: Rope,
    /// Gestenzustand
    pub gesture: GestureState,
}

impl GateState {
    /// Erstellt einen neuen Gate-Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(GateOptions::default())
    }

    /// Erstellt einen neuen Gate-Zustand mit den übergebenen Optionen.
    pub fn with_options(options: GateOptions) -> Self {
        let rope = Rope::new(&options);
        Self {
            options,
            rope,
            gesture: GestureState::new(),
        }
    }

    /// Zielposition für den Perlen-Pin im nächsten Physik-Step.
    ///
    /// Ein aktiver Drag hat Vorrang vor einer laufenden Tastatur-Aktivierung;
    /// im Idle ohne Tastatur-Zug ist die Perle ungepinnt.
    pub fn pin_target(&self) -> Option<Vec2> {
        let rest = self.options.rest_bead();
        match self.gesture.phase {
            GesturePhase::Dragging | GesturePhase::Settling => Some(rest + self.gesture.offset),
            GesturePhase::Idle => self
                .gesture
                .key_pull_until
                .map(|_| rest + Vec2::new(0.0, self.options.key_pull_offset)),
        }
    }
}

impl Default for GateState {
    fn default() -> Self {
        Self::new()
    }
}
