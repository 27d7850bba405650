//! Zentrale Konfiguration für das Pull-String-Gate.
//!
//! `GateOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Seil-Geometrie ──────────────────────────────────────────────────

/// Anzahl der Seil-Segmente (Punkte = Segmente + 1).
pub const ROPE_SEGMENTS: usize = 10;
/// Gesamtlänge des Seils in Gate-Einheiten.
pub const ROPE_TOTAL_LENGTH: f32 = 90.0;
/// Fixierter Aufhängepunkt (Anker) in Gate-Koordinaten.
pub const ANCHOR: [f32; 2] = [180.0, 174.0];
/// Ruheposition der Perle (freies Seil-Ende).
pub const REST_BEAD: [f32; 2] = [183.0, 258.0];

// ── Seil-Physik ─────────────────────────────────────────────────────

/// Schwerkraft pro Frame (positive y-Richtung = nach unten).
pub const GRAVITY: f32 = 0.3;
/// Dämpfung der impliziten Verlet-Geschwindigkeit.
pub const ROPE_DAMPING: f32 = 0.98;
/// Anzahl der Constraint-Relaxations-Iterationen pro Step.
pub const CONSTRAINT_ITERATIONS: u32 = 5;
/// Massefaktor der Perle (nur für die Schwerkraft, Perle wirkt schwerer).
pub const BEAD_MASS: f32 = 1.6;

// ── Geste ───────────────────────────────────────────────────────────

/// Vertikale Auslenkung ab der ein Zug als vollständig gilt.
pub const UNLOCK_THRESHOLD: f32 = 80.0;
/// Horizontale Dämpfung der Drag-Auslenkung.
pub const DRAG_X_DAMPING: f32 = 0.35;
/// Symmetrischer Clamp der horizontalen Auslenkung (±).
pub const DRAG_X_CLAMP: f32 = 70.0;
/// Greif-Radius um die Perle in Gate-Einheiten.
pub const GRAB_RADIUS: f32 = 18.0;

// ── Spring-Back (Settling) ──────────────────────────────────────────

/// Feder-Steifigkeit der Rückstellbewegung.
pub const SPRING_STIFFNESS: f32 = 0.12;
/// Feder-Dämpfung der Rückstellbewegung.
pub const SPRING_DAMPING: f32 = 0.72;
/// Stopp-Epsilon: unterschreiten Position und Geschwindigkeit diesen Wert,
/// wird exakt auf Null gesnappt.
pub const SETTLE_EPSILON: f32 = 0.4;

// ── Tastatur-Pfad ───────────────────────────────────────────────────

/// Haltedauer der Tastatur-Aktivierung in Millisekunden.
pub const KEY_HOLD_MS: u64 = 500;
/// Vertikale Zielauslenkung während der Tastatur-Aktivierung.
pub const KEY_PULL_OFFSET: f32 = 95.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Logische Zeichenfläche des Gates (Breite, Höhe).
pub const VIEWBOX: [f32; 2] = [300.0, 440.0];
/// Mindest-Auslenkung ab der der Fortschrittsring sichtbar wird.
pub const PROGRESS_VISIBLE_MIN_DY: f32 = 5.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Gate-Optionen.
/// Wird als `lamp_pull_gate.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateOptions {
    // ── Seil ────────────────────────────────────────────────────
    /// Anzahl der Seil-Segmente
    pub rope_segments: usize,
    /// Gesamtlänge des Seils in Gate-Einheiten
    pub rope_total_length: f32,
    /// Aufhängepunkt (Anker)
    pub anchor: [f32; 2],
    /// Ruheposition der Perle
    pub rest_bead: [f32; 2],
    /// Schwerkraft pro Frame
    pub gravity: f32,
    /// Verlet-Dämpfung
    pub rope_damping: f32,
    /// Relaxations-Iterationen pro Step
    pub constraint_iterations: u32,
    /// Massefaktor der Perle
    pub bead_mass: f32,

    // ── Geste ───────────────────────────────────────────────────
    /// Entsperr-Schwelle (vertikale Auslenkung)
    pub unlock_threshold: f32,
    /// Horizontale Drag-Dämpfung
    pub drag_x_damping: f32,
    /// Horizontaler Clamp (±)
    pub drag_x_clamp: f32,
    /// Greif-Radius um die Perle
    #[serde(default = "default_grab_radius")]
    pub grab_radius: f32,

    // ── Spring-Back ─────────────────────────────────────────────
    /// Feder-Steifigkeit
    pub spring_stiffness: f32,
    /// Feder-Dämpfung
    pub spring_damping: f32,
    /// Stopp-Epsilon
    pub settle_epsilon: f32,

    // ── Tastatur ────────────────────────────────────────────────
    /// Haltedauer der Tastatur-Aktivierung in Millisekunden
    pub key_hold_ms: u64,
    /// Zielauslenkung während der Tastatur-Aktivierung
    pub key_pull_offset: f32,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            rope_segments: ROPE_SEGMENTS,
            rope_total_length: ROPE_TOTAL_LENGTH,
            anchor: ANCHOR,
            rest_bead: REST_BEAD,
            gravity: GRAVITY,
            rope_damping: ROPE_DAMPING,
            constraint_iterations: CONSTRAINT_ITERATIONS,
            bead_mass: BEAD_MASS,

            unlock_threshold: UNLOCK_THRESHOLD,
            drag_x_damping: DRAG_X_DAMPING,
            drag_x_clamp: DRAG_X_CLAMP,
            grab_radius: GRAB_RADIUS,

            spring_stiffness: SPRING_STIFFNESS,
            spring_damping: SPRING_DAMPING,
            settle_epsilon: SETTLE_EPSILON,

            key_hold_ms: KEY_HOLD_MS,
            key_pull_offset: KEY_PULL_OFFSET,
        }
    }
}

/// Serde-Default für `grab_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_grab_radius() -> f32 {
    GRAB_RADIUS
}

impl GateOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("lamp_pull_gate"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("lamp_pull_gate.toml")
    }

    /// Aufhängepunkt als Vektor.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        Vec2::from_array(self.anchor)
    }

    /// Ruheposition der Perle als Vektor.
    #[inline]
    pub fn rest_bead(&self) -> Vec2 {
        Vec2::from_array(self.rest_bead)
    }

    /// Ruhelänge eines einzelnen Seil-Segments.
    #[inline]
    pub fn segment_length(&self) -> f32 {
        self.rope_total_length / self.rope_segments as f32
    }

    /// Haltedauer der Tastatur-Aktivierung.
    #[inline]
    pub fn key_hold_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.key_hold_ms)
    }
}
