//! Gate-Input-Handling: Zeiger- und Tastatur-Events → GateIntent.
//!
//! Die Handler produzieren nur Intents für den nächsten Tick; der
//! Physik-Step wird nie direkt aus dem Input aufgerufen.

use super::mapper::PointerTransform;
use crate::app::GateIntent;
use crate::shared::GateOptions;
use glam::Vec2;

/// Verwaltet den Input-Zustand des Gates (aktiver Zeiger-Drag).
#[derive(Debug, Default)]
pub struct InputState {
    pointer_active: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_active: false,
        }
    }

    /// Sammelt Gate-Events aus egui-Input und gibt GateIntents zurück.
    ///
    /// `bead_gate_pos` ist die aktuelle Perlenposition in Gate-Koordinaten;
    /// nur Drags, die innerhalb des Greif-Radius beginnen, greifen die Perle.
    pub fn collect_gate_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        transform: &dyn PointerTransform,
        bead_gate_pos: Vec2,
        options: &GateOptions,
    ) -> Vec<GateIntent> {
        let mut events = Vec::new();

        // Tastatur-Alternativpfad: Enter oder Leertaste
        let key_activated = ui.input(|i| {
            i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space)
        });
        if key_activated {
            events.push(GateIntent::KeyActivated);
        }

        self.handle_drag_start(ui, response, transform, bead_gate_pos, options, &mut events);
        self.handle_drag_update(response, transform, &mut events);
        self.handle_drag_end(response, &mut events);

        events
    }

    /// Erkennt Drag-Beginn auf der Perle.
    fn handle_drag_start(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        transform: &dyn PointerTransform,
        bead_gate_pos: Vec2,
        options: &GateOptions,
        events: &mut Vec<GateIntent>,
    ) {
        if !response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle),
        // interact_pointer_pos() die Position *nach* Drag-Erkennung.
        let press_pos = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        let Some(press_pos) = press_pos else {
            return;
        };

        let gate_pos = transform.to_gate(Vec2::new(press_pos.x, press_pos.y));
        if gate_pos.distance(bead_gate_pos) <= options.grab_radius {
            self.pointer_active = true;
            events.push(GateIntent::PointerPressed { pos: gate_pos });
        }
    }

    /// Reicht Zeigerbewegungen während eines aktiven Drags weiter.
    fn handle_drag_update(
        &mut self,
        response: &egui::Response,
        transform: &dyn PointerTransform,
        events: &mut Vec<GateIntent>,
    ) {
        if !self.pointer_active || !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let gate_pos = transform.to_gate(Vec2::new(pointer_pos.x, pointer_pos.y));
            events.push(GateIntent::PointerMoved { pos: gate_pos });
        }
    }

    /// Beendet einen aktiven Drag.
    fn handle_drag_end(&mut self, response: &egui::Response, events: &mut Vec<GateIntent>) {
        if !self.pointer_active || !response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }
        self.pointer_active = false;
        events.push(GateIntent::PointerReleased);
    }
}
