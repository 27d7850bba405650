//! Zeichnet das Gate in einen egui-Painter: Seilkurve, Perle,
//! Fortschrittsring und Hinweis-Pfeil.
//!
//! Reine Darstellung des Frame-Snapshots — keine Zustandsänderung.

use super::mapper::ViewTransform;
use crate::app::GateFrame;
use egui::epaint::CubicBezierShape;
use egui::{Color32, Pos2, Shape, Stroke};
use glam::Vec2;

// ── Farben (Seil und Perle) ─────────────────────────────────────────

/// Seil- und Perlenfarbe im Ruhezustand.
const STRING_COLOR: Color32 = Color32::from_rgb(0x6b, 0x70, 0x80);
/// Seil- und Perlenfarbe während des Ziehens.
const STRING_COLOR_ACTIVE: Color32 = Color32::from_rgb(0xaa, 0xb0, 0xbb);
/// Perlenfarbe während des Ziehens.
const BEAD_COLOR_ACTIVE: Color32 = Color32::from_rgb(0x9b, 0xa1, 0xae);
/// Ringfarbe bei erreichter Schwelle.
const RING_COLOR_COMPLETE: Color32 = Color32::from_rgb(0x5c, 0xb8, 0x75);

// ── Geometrie in Gate-Einheiten ─────────────────────────────────────

/// Perlenradius im Ruhezustand.
const BEAD_RADIUS: f32 = 6.0;
/// Perlenradius während des Ziehens.
const BEAD_RADIUS_ACTIVE: f32 = 8.0;
/// Radius des Fortschrittsrings.
const RING_RADIUS: f32 = 13.0;
/// Abtastpunkte für den Ring-Bogen.
const RING_ARC_STEPS: usize = 48;

/// Zeichnet den kompletten Gate-Frame.
///
/// `unlocked` steuert nur die Hinweis-Darstellung; der Glow der Lampe
/// und die umgebende Szene sind Sache des Hosts.
pub fn draw_gate(painter: &egui::Painter, view: &ViewTransform, frame: &GateFrame, unlocked: bool) {
    let scale = view.scale();

    let (string_color, string_width) = if frame.pulling {
        (STRING_COLOR_ACTIVE, 2.2 * scale)
    } else {
        (STRING_COLOR, 1.6 * scale)
    };

    draw_curve(painter, view, frame, string_color, string_width);
    draw_progress_ring(painter, view, frame, scale);
    draw_bead(painter, view, frame, scale);

    if !unlocked && !frame.pulling {
        draw_hint_arrow(painter, view, frame, scale);
    }
}

/// Seilkurve als Folge kubischer Bézier-Segmente.
fn draw_curve(
    painter: &egui::Painter,
    view: &ViewTransform,
    frame: &GateFrame,
    color: Color32,
    width: f32,
) {
    let stroke = Stroke::new(width, color);
    let mut cursor = frame.curve.start;

    for segment in &frame.curve.segments {
        painter.add(CubicBezierShape::from_points_stroke(
            [
                to_pos2(view.to_device(cursor)),
                to_pos2(view.to_device(segment.ctrl1)),
                to_pos2(view.to_device(segment.ctrl2)),
                to_pos2(view.to_device(segment.end)),
            ],
            false,
            Color32::TRANSPARENT,
            stroke,
        ));
        cursor = segment.end;
    }
}

/// Perle am Seilende (Drag-Ziel).
fn draw_bead(painter: &egui::Painter, view: &ViewTransform, frame: &GateFrame, scale: f32) {
    let (radius, color) = if frame.pulling {
        (BEAD_RADIUS_ACTIVE, BEAD_COLOR_ACTIVE)
    } else {
        (BEAD_RADIUS, STRING_COLOR)
    };
    painter.circle_filled(to_pos2(view.to_device(frame.bead)), radius * scale, color);
}

/// Fortschrittsring um die Perle: Bogen ab 12-Uhr-Position im
/// Uhrzeigersinn, Länge proportional zum Fortschritt.
fn draw_progress_ring(
    painter: &egui::Painter,
    view: &ViewTransform,
    frame: &GateFrame,
    scale: f32,
) {
    if !frame.ring_visible || frame.progress.fraction <= 0.0 {
        return;
    }

    let base = if frame.progress.complete {
        RING_COLOR_COMPLETE
    } else {
        STRING_COLOR
    };
    let color = base.gamma_multiply(0.55);

    let center = view.to_device(frame.bead);
    let radius = RING_RADIUS * scale;
    let sweep = frame.progress.fraction * std::f32::consts::TAU;

    let points: Vec<Pos2> = (0..=RING_ARC_STEPS)
        .map(|i| {
            let angle = -std::f32::consts::FRAC_PI_2 + sweep * (i as f32 / RING_ARC_STEPS as f32);
            to_pos2(center + Vec2::new(angle.cos(), angle.sin()) * radius)
        })
        .collect();

    painter.add(Shape::line(points, Stroke::new(1.6 * scale, color)));
}

/// Hinweis-Pfeil unter der ruhenden Perle ("hier ziehen").
fn draw_hint_arrow(painter: &egui::Painter, view: &ViewTransform, frame: &GateFrame, scale: f32) {
    let color = STRING_COLOR.gamma_multiply(0.45);
    let stroke = Stroke::new(1.4 * scale, color);
    let rest = frame.rest_bead;

    painter.line_segment(
        [
            to_pos2(view.to_device(rest + Vec2::new(0.0, 16.0))),
            to_pos2(view.to_device(rest + Vec2::new(0.0, 32.0))),
        ],
        stroke,
    );
    painter.add(Shape::line(
        vec![
            to_pos2(view.to_device(rest + Vec2::new(-4.0, 28.0))),
            to_pos2(view.to_device(rest + Vec2::new(0.0, 34.0))),
            to_pos2(view.to_device(rest + Vec2::new(4.0, 28.0))),
        ],
        stroke,
    ));
}

#[inline]
fn to_pos2(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}
