//! Integrationstests für den Gesten-Fluss:
//! - Unlock-Idempotenz über mehrere Züge
//! - Schwellen-Grenzfälle
//! - Spring-Back-Terminierung
//! - Tastatur-Alternativpfad

use approx::assert_relative_eq;
use glam::Vec2;
use lamp_pull_gate::{
    GateController, GateEvent, GateIntent, GateOptions, GateState, GesturePhase,
};
use std::time::{Duration, Instant};

/// Erstellt Controller und Zustand mit Standard-Optionen.
fn gate() -> (GateController, GateState) {
    (GateController::new(), GateState::new())
}

/// Führt einen vollständigen Zug aus: greifen, um `delta` ziehen
/// (mit Ticks, damit das Seil dem Pin folgt), loslassen.
fn pull_and_release(
    controller: &mut GateController,
    state: &mut GateState,
    delta: Vec2,
    now: Instant,
) -> Vec<GateEvent> {
    let grab = state.rope.bead();
    let mut events = Vec::new();

    events.extend(controller.handle_intent(
        state,
        GateIntent::PointerPressed { pos: grab },
        now,
    ));
    events.extend(controller.handle_intent(
        state,
        GateIntent::PointerMoved { pos: grab + delta },
        now,
    ));
    controller.tick(state, now, &mut events);
    events.extend(controller.handle_intent(state, GateIntent::PointerReleased, now));

    events
}

/// Tickt bis die Geste wieder Idle ist, maximal `limit` Frames.
/// Gibt die benötigte Frame-Anzahl zurück.
fn settle(controller: &mut GateController, state: &mut GateState, now: Instant, limit: usize) -> usize {
    let mut events = Vec::new();
    for frame in 0..limit {
        if state.gesture.phase == GesturePhase::Idle {
            return frame;
        }
        controller.tick(state, now, &mut events);
    }
    panic!(
        "Settling hat nach {} Frames nicht terminiert (offset={:?})",
        limit, state.gesture.offset
    );
}

// ─── Drag-Pfad ───────────────────────────────────────────────────────────────

#[test]
fn test_zug_ueber_schwelle_entsperrt_und_wechselt_nach_settling() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    // Konkretes Szenario: Anker (180,174), Ruheperle (183,258), Schwelle 80.
    // Perle auf (183, 340) ziehen — Auslenkung 82.
    let events = pull_and_release(&mut controller, &mut state, Vec2::new(0.0, 82.0), now);

    assert_eq!(events, vec![GateEvent::Unlocked]);
    assert_eq!(state.gesture.phase, GesturePhase::Settling);
    assert!(state.gesture.completed);

    // Fortschritt im Moment des Loslassens: exakt 1
    let progress = lamp_pull_gate::app::progress::compute(
        state.rope.bead().y,
        state.options.rest_bead().y,
        state.options.unlock_threshold,
    );
    assert_relative_eq!(progress.fraction, 1.0);
    assert!(progress.complete);
}

#[test]
fn test_unlock_feuert_hoechstens_einmal_pro_instanz() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let first = pull_and_release(&mut controller, &mut state, Vec2::new(0.0, 120.0), now);
    assert_eq!(first, vec![GateEvent::Unlocked]);

    settle(&mut controller, &mut state, now, 600);

    // Zweiter Zug über die Schwelle: kein weiteres Event
    let second = pull_and_release(&mut controller, &mut state, Vec2::new(0.0, 120.0), now);
    assert!(second.is_empty(), "Unlock darf nicht erneut feuern");

    // Neue Instanz: Unlock feuert wieder
    let (mut controller2, mut state2) = gate();
    let fresh = pull_and_release(&mut controller2, &mut state2, Vec2::new(0.0, 120.0), now);
    assert_eq!(fresh, vec![GateEvent::Unlocked]);
}

#[test]
fn test_auslenkung_exakt_auf_schwelle_entsperrt() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let threshold = state.options.unlock_threshold;
    let events = pull_and_release(&mut controller, &mut state, Vec2::new(0.0, threshold), now);
    assert_eq!(events, vec![GateEvent::Unlocked]);
}

#[test]
fn test_eine_einheit_unter_schwelle_entsperrt_nicht() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let threshold = state.options.unlock_threshold;
    let events =
        pull_and_release(&mut controller, &mut state, Vec2::new(0.0, threshold - 1.0), now);
    assert!(events.is_empty());
    assert!(!state.gesture.completed);
    // Loslassen wechselt trotzdem in die Settling-Phase
    assert_eq!(state.gesture.phase, GesturePhase::Settling);
}

#[test]
fn test_horizontale_auslenkung_wird_bei_70_geklemmt() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let grab = state.rope.bead();
    controller.handle_intent(&mut state, GateIntent::PointerPressed { pos: grab }, now);
    // 500 Einheiten nach rechts: 500 × 0.35 = 175 → Clamp auf +70
    controller.handle_intent(
        &mut state,
        GateIntent::PointerMoved {
            pos: grab + Vec2::new(500.0, 0.0),
        },
        now,
    );

    assert_relative_eq!(state.gesture.offset.x, state.options.drag_x_clamp);
}

#[test]
fn test_seil_laesst_sich_nicht_nach_oben_druecken() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let grab = state.rope.bead();
    controller.handle_intent(&mut state, GateIntent::PointerPressed { pos: grab }, now);
    controller.handle_intent(
        &mut state,
        GateIntent::PointerMoved {
            pos: grab + Vec2::new(0.0, -50.0),
        },
        now,
    );

    assert_relative_eq!(state.gesture.offset.y, 0.0);
}

#[test]
fn test_greifen_im_schwung_springt_nicht() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    // Seil in Bewegung versetzen und mitten im Ausschwingen greifen
    pull_and_release(&mut controller, &mut state, Vec2::new(40.0, 60.0), now);
    let mut events = Vec::new();
    for _ in 0..5 {
        controller.tick(&mut state, now, &mut events);
    }

    let bead_before = state.rope.bead();
    controller.handle_intent(
        &mut state,
        GateIntent::PointerPressed { pos: bead_before },
        now,
    );

    // Pin-Ziel entspricht der Perlenposition beim Greifen (Kontinuität)
    let frame = controller.tick(&mut state, now, &mut events);
    assert_relative_eq!(frame.bead.x, bead_before.x, epsilon = 1e-3);
    assert_relative_eq!(frame.bead.y, bead_before.y, epsilon = 1e-3);
}

#[test]
fn test_erneuter_drag_start_waehrend_drag_ist_noop() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let grab = state.rope.bead();
    controller.handle_intent(&mut state, GateIntent::PointerPressed { pos: grab }, now);
    controller.handle_intent(
        &mut state,
        GateIntent::PointerMoved {
            pos: grab + Vec2::new(0.0, 40.0),
        },
        now,
    );
    let offset_before = state.gesture.offset;

    // Zweiter Press darf Ursprung und Offset nicht zurücksetzen
    controller.handle_intent(
        &mut state,
        GateIntent::PointerPressed {
            pos: grab + Vec2::new(10.0, 10.0),
        },
        now,
    );
    assert_eq!(state.gesture.offset, offset_before);
    assert_eq!(state.gesture.phase, GesturePhase::Dragging);
}

// ─── Spring-Back ─────────────────────────────────────────────────────────────

#[test]
fn test_spring_back_terminiert_in_begrenzter_framezahl() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    pull_and_release(&mut controller, &mut state, Vec2::new(70.0, 150.0), now);
    let frames = settle(&mut controller, &mut state, now, 600);

    assert!(frames > 0);
    assert_eq!(state.gesture.offset, Vec2::ZERO);
    assert_eq!(state.gesture.velocity, Vec2::ZERO);
    assert_eq!(state.gesture.phase, GesturePhase::Idle);
}

#[test]
fn test_drag_start_bricht_laufendes_settling_ab() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    pull_and_release(&mut controller, &mut state, Vec2::new(0.0, 60.0), now);
    let mut events = Vec::new();
    controller.tick(&mut state, now, &mut events);
    assert_eq!(state.gesture.phase, GesturePhase::Settling);

    let bead = state.rope.bead();
    controller.handle_intent(&mut state, GateIntent::PointerPressed { pos: bead }, now);
    assert_eq!(state.gesture.phase, GesturePhase::Dragging);
    assert_eq!(state.gesture.velocity, Vec2::ZERO);
}

// ─── Tastatur-Pfad ───────────────────────────────────────────────────────────

#[test]
fn test_tastatur_aktivierung_entsperrt_genau_einmal_nach_haltedauer() {
    let (mut controller, mut state) = gate();
    let t0 = Instant::now();
    let hold = state.options.key_hold_duration();

    controller.handle_intent(&mut state, GateIntent::KeyActivated, t0);

    // Während der Haltedauer: Perle gepinnt, kein Event
    let mut events = Vec::new();
    let frame = controller.tick(&mut state, t0 + Duration::from_millis(100), &mut events);
    assert!(events.is_empty());
    assert!(frame.pulling);

    // Nach Ablauf: genau ein Unlock, Pin gelöst
    let mut events = Vec::new();
    controller.tick(&mut state, t0 + hold + Duration::from_millis(100), &mut events);
    assert_eq!(events, vec![GateEvent::Unlocked]);
    assert!(state.gesture.key_pull_until.is_none());

    // Weitere Ticks: nichts mehr
    let mut events = Vec::new();
    controller.tick(&mut state, t0 + hold + Duration::from_millis(200), &mut events);
    assert!(events.is_empty());
}

#[test]
fn test_tastatur_aktivierung_ignoriert_reentranz() {
    let (mut controller, mut state) = gate();
    let t0 = Instant::now();

    controller.handle_intent(&mut state, GateIntent::KeyActivated, t0);
    let deadline = state.gesture.key_pull_until;

    // Zweite Aktivierung während der laufenden: Deadline bleibt unverändert
    controller.handle_intent(
        &mut state,
        GateIntent::KeyActivated,
        t0 + Duration::from_millis(200),
    );
    assert_eq!(state.gesture.key_pull_until, deadline);

    // Am Ende feuert genau ein Unlock
    let mut events = Vec::new();
    controller.tick(&mut state, t0 + Duration::from_secs(2), &mut events);
    assert_eq!(events, vec![GateEvent::Unlocked]);
}

#[test]
fn test_tastatur_pfad_konsultiert_die_schwelle_nicht() {
    let (mut controller, mut state) = gate();
    let t0 = Instant::now();

    // Keine Drag-Auslenkung vorhanden; Unlock kommt trotzdem
    controller.handle_intent(&mut state, GateIntent::KeyActivated, t0);
    let mut events = Vec::new();
    controller.tick(&mut state, t0 + Duration::from_secs(1), &mut events);
    assert_eq!(events, vec![GateEvent::Unlocked]);
}

#[test]
fn test_tastatur_zug_pinnt_auf_feste_zugposition() {
    let (mut controller, mut state) = gate();
    let t0 = Instant::now();

    controller.handle_intent(&mut state, GateIntent::KeyActivated, t0);
    let mut events = Vec::new();
    let frame = controller.tick(&mut state, t0, &mut events);

    let expected = state.options.rest_bead() + Vec2::new(0.0, state.options.key_pull_offset);
    assert_relative_eq!(frame.bead.x, expected.x, epsilon = 1e-3);
    assert_relative_eq!(frame.bead.y, expected.y, epsilon = 1e-3);
}

// ─── Frame-Ausgabe ───────────────────────────────────────────────────────────

#[test]
fn test_fortschrittsring_erst_ab_minimaler_auslenkung_sichtbar() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();

    let grab = state.rope.bead();
    controller.handle_intent(&mut state, GateIntent::PointerPressed { pos: grab }, now);

    let mut events = Vec::new();
    let frame = controller.tick(&mut state, now, &mut events);
    assert!(!frame.ring_visible, "ohne Auslenkung kein Ring");

    controller.handle_intent(
        &mut state,
        GateIntent::PointerMoved {
            pos: grab + Vec2::new(0.0, 40.0),
        },
        now,
    );
    let frame = controller.tick(&mut state, now, &mut events);
    assert!(frame.ring_visible);
    assert_relative_eq!(frame.progress.fraction, 0.5);
}

#[test]
fn test_kurve_beginnt_jeden_frame_am_anker() {
    let (mut controller, mut state) = gate();
    let now = Instant::now();
    let anchor = state.options.anchor();

    let mut events = Vec::new();
    for _ in 0..50 {
        let frame = controller.tick(&mut state, now, &mut events);
        assert_eq!(frame.curve.start, anchor);
        assert_eq!(frame.curve.segments.len(), state.options.rope_segments);
    }
}

#[test]
fn test_custom_optionen_werden_respektiert() {
    let options = GateOptions {
        unlock_threshold: 40.0,
        ..GateOptions::default()
    };
    let mut state = GateState::with_options(options);
    let mut controller = GateController::new();
    let now = Instant::now();

    let events = pull_and_release(&mut controller, &mut state, Vec2::new(0.0, 45.0), now);
    assert_eq!(events, vec![GateEvent::Unlocked]);
}
