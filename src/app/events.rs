//! GateIntent- und GateEvent-Enums für den Intent/Event-Datenfluss.

use glam::Vec2;

/// Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind bereits in Gate-Koordinaten umgerechnet
/// (siehe `ui::mapper`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateIntent {
    /// Zeiger auf der Perle gedrückt (Drag-Beginn)
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt während eines aktiven Drags
    PointerMoved { pos: Vec2 },
    /// Zeiger losgelassen (Drag-Ende)
    PointerReleased,
    /// Diskrete Tastatur-Aktivierung (Enter/Leertaste)
    KeyActivated,
}

/// Nach außen sichtbare Ereignisse des Gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// Die Zuggeste wurde vollständig ausgeführt.
    /// Feuert höchstens einmal pro Gate-Instanz aus dem Drag-Pfad
    /// bzw. genau einmal pro abgeschlossener Tastatur-Aktivierung.
    Unlocked,
}
