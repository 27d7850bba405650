//! Lamp Pull Gate — Demo-Shell.
//!
//! Minimaler eframe-Host für das Gate-Widget: sammelt Input, tickt die
//! Simulation pro Frame und zeichnet die Seilkurve. Die umgebende
//! Formular-UI des ursprünglichen Auth-Moduls ist bewusst nicht Teil
//! dieser Demo.

use eframe::egui;
use glam::Vec2;
use lamp_pull_gate::shared::VIEWBOX;
use lamp_pull_gate::{
    ui, FrameLoop, GateController, GateEvent, GateOptions, GateState, IdentityTransform,
    ViewTransform,
};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Lamp Pull Gate Demo v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 560.0])
            .with_title("Lamp Pull Gate"),
        ..Default::default()
    };

    eframe::run_native(
        "Lamp Pull Gate",
        options,
        Box::new(|_cc| Ok(Box::new(GateApp::new()))),
    )
}

/// Haupt-Anwendungsstruktur der Demo.
struct GateApp {
    state: GateState,
    controller: GateController,
    input: ui::InputState,
    frame_loop: FrameLoop,
    unlocked: bool,
    mapper_warned: bool,
}

impl GateApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let gate_options = GateOptions::load_from_file(&GateOptions::config_path());

        Self {
            state: GateState::with_options(gate_options),
            controller: GateController::new(),
            input: ui::InputState::new(),
            frame_loop: FrameLoop::new(),
            unlocked: false,
            mapper_warned: false,
        }
    }

    /// Ein UI-Frame: Input sammeln, Tick ausführen, zeichnen.
    /// Gibt die in diesem Frame entstandenen Gate-Events zurück.
    fn run_gate_frame(&mut self, ui: &mut egui::Ui, now: Instant) -> Vec<GateEvent> {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        let view = ViewTransform::new(
            Vec2::new(rect.min.x, rect.min.y),
            Vec2::new(rect.width(), rect.height()),
            Vec2::from_array(VIEWBOX),
        );
        if view.is_none() && !self.mapper_warned {
            log::warn!("Keine Viewport-Transformation verfügbar, Identity-Fallback aktiv");
            self.mapper_warned = true;
        }

        // Input → Intents (Positionen bereits in Gate-Koordinaten)
        let bead_gate_pos = self.state.rope.bead();
        let intents = match &view {
            Some(v) => {
                self.input
                    .collect_gate_events(ui, &response, v, bead_gate_pos, &self.state.options)
            }
            None => self.input.collect_gate_events(
                ui,
                &response,
                &IdentityTransform,
                bead_gate_pos,
                &self.state.options,
            ),
        };

        let mut events = Vec::new();
        for intent in intents {
            events.extend(self.controller.handle_intent(&mut self.state, intent, now));
        }

        if self.frame_loop.is_running() {
            let gate_frame = self.controller.tick(&mut self.state, now, &mut events);

            if let Some(view) = &view {
                ui::draw_gate(ui.painter(), view, &gate_frame, self.unlocked);

                let label = if self.unlocked {
                    "Unlocked"
                } else {
                    "Pull the string"
                };
                let label_pos = view.to_device(Vec2::new(150.0, 410.0));
                ui.painter().text(
                    egui::Pos2::new(label_pos.x, label_pos.y),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(14.0),
                    egui::Color32::from_rgb(0x8b, 0x90, 0x99),
                );
            }

            // Kontinuierlicher Tick-Loop bis zum Teardown
            ui.ctx().request_repaint();
        }

        events
    }

    fn process_events(&mut self, events: Vec<GateEvent>) {
        for event in events {
            match event {
                GateEvent::Unlocked => {
                    self.unlocked = true;
                    log::info!("Gate entsperrt");
                }
            }
        }
    }
}

impl eframe::App for GateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let events = egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::from_rgb(0x14, 0x16, 0x1c)))
            .show(ctx, |ui| self.run_gate_frame(ui, now))
            .inner;

        self.process_events(events);
    }
}

impl Drop for GateApp {
    fn drop(&mut self) {
        self.frame_loop.stop();
    }
}
