//! Umrechnung von Geräte-Koordinaten in Gate-Koordinaten.
//!
//! Die Zeichenfläche kann vom Layout beliebig skaliert und verschoben
//! werden; der Kern bekommt die Transformation als Capability geliefert
//! und hat damit keine Abhängigkeit auf die Rendering-Oberfläche.

use glam::Vec2;

/// Capability-Interface des Hosts: Geräteposition → Gate-Koordinaten.
pub trait PointerTransform {
    /// Rechnet eine Geräteposition in Gate-Koordinaten um.
    fn to_gate(&self, device_pos: Vec2) -> Vec2;
}

/// Uniforme Skalierung + Translation zwischen Geräte-Rechteck und
/// logischer Zeichenfläche (zentriert, Seitenverhältnis erhalten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    offset: Vec2,
    scale: f32,
}

impl ViewTransform {
    /// Erstellt die Transformation aus Geräte-Rechteck und logischer
    /// Zeichenfläche. `None` bei degenerierter Größe — der Aufrufer
    /// fällt dann auf `IdentityTransform` zurück.
    pub fn new(rect_min: Vec2, rect_size: Vec2, viewbox: Vec2) -> Option<Self> {
        if viewbox.x <= 0.0 || viewbox.y <= 0.0 {
            return None;
        }
        let scale = (rect_size.x / viewbox.x).min(rect_size.y / viewbox.y);
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }

        let content_size = viewbox * scale;
        Some(Self {
            offset: rect_min + (rect_size - content_size) * 0.5,
            scale,
        })
    }

    /// Rechnet Gate-Koordinaten zurück in Geräte-Koordinaten (fürs Zeichnen).
    #[inline]
    pub fn to_device(&self, gate_pos: Vec2) -> Vec2 {
        gate_pos * self.scale + self.offset
    }

    /// Uniformer Skalierungsfaktor Gate → Gerät.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl PointerTransform for ViewTransform {
    fn to_gate(&self, device_pos: Vec2) -> Vec2 {
        (device_pos - self.offset) / self.scale
    }
}

/// Degradierter Fallback ohne verfügbare Transformation: Geräte-Koordinaten
/// werden unverändert durchgereicht. Nie ein Fehler.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransform;

impl PointerTransform for IdentityTransform {
    fn to_gate(&self, device_pos: Vec2) -> Vec2 {
        device_pos
    }
}
