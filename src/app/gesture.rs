//! Gesten-Zustandsmaschine: Idle → Dragging → Settling → Idle,
//! plus Tastatur-Alternativpfad.
//!
//! Die Handler mutieren nur den Gestenzustand; der Physik-Step wird
//! ausschließlich vom Tick im `GateController` ausgeführt.

use super::{GateEvent, GateState, GesturePhase};
use glam::Vec2;
use std::time::Instant;

/// Drag-Beginn: Ursprung merken, Geschwindigkeit nullen und den Pin
/// auf die aktuelle Perlenposition legen (kein Sprung beim Greifen
/// mitten im Schwung). Bricht eine laufende Rückstellfeder sofort ab.
///
/// Drag-Beginn während eines aktiven Drags ist ein stilles No-op.
pub(crate) fn drag_started(state: &mut GateState, pos: Vec2) {
    if state.gesture.phase == GesturePhase::Dragging {
        return;
    }

    let gesture = &mut state.gesture;
    gesture.phase = GesturePhase::Dragging;
    gesture.origin = pos;
    gesture.velocity = Vec2::ZERO;
    // Kontinuität: Offset aus der aktuell simulierten Perlenposition ableiten
    gesture.offset = state.rope.bead() - state.options.rest_bead();
}

/// Drag-Bewegung: Offset relativ zum Ursprung neu berechnen (nicht
/// inkrementell akkumulieren, damit Jitter in der Event-Rate nicht driftet).
/// Horizontal gedämpft und geklemmt, vertikal nur nach unten.
pub(crate) fn drag_moved(state: &mut GateState, pos: Vec2) {
    if state.gesture.phase != GesturePhase::Dragging {
        return;
    }

    let options = &state.options;
    let delta = pos - state.gesture.origin;
    state.gesture.offset = Vec2::new(
        (delta.x * options.drag_x_damping).clamp(-options.drag_x_clamp, options.drag_x_clamp),
        delta.y.max(0.0),
    );
}

/// Drag-Ende: Schwellen-Prüfung auf der simulierten Perlenposition,
/// danach bedingungslos in die Settling-Phase.
///
/// Das Unlock-Event feuert höchstens einmal pro Instanz — der Zustand
/// ist bereits committet, bevor der Konsument das Event sieht.
pub(crate) fn drag_released(state: &mut GateState, events: &mut Vec<GateEvent>) {
    if state.gesture.phase != GesturePhase::Dragging {
        return;
    }

    let pulled = state.rope.bead().y - state.options.rest_bead().y;
    if pulled >= state.options.unlock_threshold {
        emit_unlock_once(state, events);
    }

    state.gesture.phase = GesturePhase::Settling;
}

/// Tastatur-Aktivierung: pinnt die Perle für die Haltedauer auf die feste
/// Zugposition. Wiederholte Aktivierung während einer laufenden wird
/// ignoriert (Re-Entranz-Schutz).
pub(crate) fn key_activated(state: &mut GateState, now: Instant) {
    if state.gesture.key_pull_until.is_some() {
        return;
    }
    state.gesture.key_pull_until = Some(now + state.options.key_hold_duration());
    log::debug!("Tastatur-Zug gestartet");
}

/// Prüft pro Frame, ob die Tastatur-Haltedauer abgelaufen ist.
/// Bei Ablauf: Pin lösen und bedingungslos entsperren — der Tastatur-Pfad
/// konsultiert die Schwelle nicht.
pub(crate) fn advance_key_pull(state: &mut GateState, now: Instant, events: &mut Vec<GateEvent>) {
    let Some(until) = state.gesture.key_pull_until else {
        return;
    };
    if now < until {
        return;
    }
    state.gesture.key_pull_until = None;
    state.gesture.completed = true;
    events.push(GateEvent::Unlocked);
    log::debug!("Tastatur-Zug abgeschlossen, Unlock emittiert");
}

/// Ein Feder-Frame der Rückstellbewegung (kritisch gedämpft Richtung Null).
/// Unterschreiten Offset und Geschwindigkeit das Epsilon, wird exakt auf
/// Null gesnappt und zurück nach Idle gewechselt.
pub(crate) fn advance_settling(state: &mut GateState) {
    if state.gesture.phase != GesturePhase::Settling {
        return;
    }

    let options = &state.options;
    let gesture = &mut state.gesture;

    gesture.velocity =
        (gesture.velocity + (-gesture.offset) * options.spring_stiffness) * options.spring_damping;
    gesture.offset += gesture.velocity;

    let eps = options.settle_epsilon;
    let still = gesture.offset.x.abs() < eps
        && gesture.offset.y.abs() < eps
        && gesture.velocity.x.abs() < eps
        && gesture.velocity.y.abs() < eps;

    if still {
        gesture.offset = Vec2::ZERO;
        gesture.velocity = Vec2::ZERO;
        gesture.phase = GesturePhase::Idle;
    }
}

/// Idempotente Unlock-Emission über das Sticky-Flag:
/// das Event entsteht nur beim ersten Abschluss.
fn emit_unlock_once(state: &mut GateState, events: &mut Vec<GateEvent>) {
    if state.gesture.completed {
        return;
    }
    state.gesture.completed = true;
    events.push(GateEvent::Unlocked);
    log::info!("Zuggeste vollständig — Unlock emittiert");
}
