//! Verlet-Seilsimulation mit iterativer Distanz-Constraint-Relaxation.
//!
//! Das Seil besteht aus N+1 Massepunkten mit Verbindungen fester Ruhelänge.
//! Punkt 0 (Anker) ist immer fixiert, Punkt N (Perle) wird während einer
//! aktiven Geste auf die Zielposition gepinnt.

use crate::shared::GateOptions;
use glam::Vec2;

/// Minimal-Abstand gegen Division durch Null bei (nahezu) deckungsgleichen Punkten.
const MIN_SEPARATION: f32 = 0.001;

/// Ein Massepunkt des Seils. Die Vorgängerposition kodiert implizit
/// die Geschwindigkeit (Verlet-Integration, kein separates Velocity-Feld).
#[derive(Debug, Clone, Copy)]
pub struct RopePoint {
    /// Aktuelle Position
    pub pos: Vec2,
    /// Position des vorherigen Frames
    pub prev: Vec2,
}

impl RopePoint {
    /// Erstellt einen ruhenden Punkt (Position = Vorgängerposition).
    pub fn at_rest(pos: Vec2) -> Self {
        Self { pos, prev: pos }
    }
}

/// Seil aus N+1 Punkten, exklusiv im Besitz der Simulation.
/// Andere Komponenten lesen den Zustand nur als Snapshot pro Frame.
#[derive(Debug, Clone)]
pub struct Rope {
    points: Vec<RopePoint>,
    anchor: Vec2,
    segment_length: f32,
    gravity: f32,
    damping: f32,
    iterations: u32,
    bead_mass: f32,
}

impl Rope {
    /// Legt das Seil als gerade Linie vom Anker zur Ruheposition der Perle an.
    pub fn new(options: &GateOptions) -> Self {
        let anchor = options.anchor();
        let rest_bead = options.rest_bead();
        let segments = options.rope_segments.max(1);

        let points = (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                RopePoint::at_rest(anchor.lerp(rest_bead, t))
            })
            .collect();

        Self {
            points,
            anchor,
            segment_length: options.segment_length(),
            gravity: options.gravity,
            damping: options.rope_damping,
            iterations: options.constraint_iterations,
            bead_mass: options.bead_mass,
        }
    }

    /// Führt genau einen Physik-Step aus: Integration, Anker-/Perlen-Pin,
    /// dann Constraint-Relaxation.
    ///
    /// `pin`: Zielposition der Perle, solange die Geste aktiv ist.
    /// Nach Rückkehr steht der Anker exakt auf der Anker-Koordinate.
    pub fn step(&mut self, pin: Option<Vec2>) {
        let bead_pinned = pin.is_some();
        let last = self.points.len() - 1;

        // Integration: alle Punkte außer Anker (und Perle, falls gepinnt).
        // Der Massefaktor der Perle wirkt nur in ungepinnten Frames.
        for i in 1..=last {
            if bead_pinned && i == last {
                continue;
            }
            let gravity = if i == last {
                self.gravity * self.bead_mass
            } else {
                self.gravity
            };
            let p = &mut self.points[i];
            let velocity = (p.pos - p.prev) * self.damping;
            p.prev = p.pos;
            p.pos += velocity + Vec2::new(0.0, gravity);
        }

        // Anker jeden Step hart setzen (Position und Vorgängerposition,
        // damit sich keine Geschwindigkeit akkumuliert).
        self.points[0] = RopePoint::at_rest(self.anchor);

        if let Some(target) = pin {
            self.points[last] = RopePoint::at_rest(target);
        }

        for _ in 0..self.iterations {
            self.relax_pass(bead_pinned);
        }
    }

    /// Ein Relaxations-Durchlauf: verteilt den halben Längenfehler jedes
    /// Segments auf beide Endpunkte; gepinnte Endpunkte absorbieren nichts.
    fn relax_pass(&mut self, bead_pinned: bool) {
        self.points[0].pos = self.anchor;
        let last = self.points.len() - 1;

        for i in 0..last {
            let (head, tail) = self.points.split_at_mut(i + 1);
            let a = &mut head[i];
            let b = &mut tail[0];

            let delta = b.pos - a.pos;
            let dist = delta.length().max(MIN_SEPARATION);
            let correction = delta * ((self.segment_length - dist) / dist * 0.5);

            let a_fixed = i == 0;
            let b_fixed = bead_pinned && i + 1 == last;

            if !a_fixed {
                a.pos -= correction;
            }
            if !b_fixed {
                b.pos += correction;
            }
        }
    }

    /// Read-only-Snapshot aller Seilpunkte in Reihenfolge Anker → Perle.
    #[inline]
    pub fn points(&self) -> &[RopePoint] {
        &self.points
    }

    /// Aktuelle Positionen aller Punkte (für Kurven-Erzeugung).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.pos).collect()
    }

    /// Aktuelle Position der Perle (letzter Punkt).
    #[inline]
    pub fn bead(&self) -> Vec2 {
        self.points[self.points.len() - 1].pos
    }

    /// Der fixierte Aufhängepunkt.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Ruhelänge eines Segments.
    #[inline]
    pub fn segment_length(&self) -> f32 {
        self.segment_length
    }

    /// Summe der absoluten Längenfehler aller Segmente.
    /// Dient der Konvergenz-Prüfung der Relaxation.
    pub fn total_length_error(&self) -> f32 {
        self.points
            .windows(2)
            .map(|w| (w[0].pos.distance(w[1].pos) - self.segment_length).abs())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rope() -> Rope {
        Rope::new(&GateOptions::default())
    }

    #[test]
    fn test_initiales_seil_liegt_auf_gerader_linie() {
        let rope = rope();
        let options = GateOptions::default();
        assert_eq!(rope.points().len(), options.rope_segments + 1);

        let anchor = options.anchor();
        let rest = options.rest_bead();
        for (i, p) in rope.points().iter().enumerate() {
            let t = i as f32 / options.rope_segments as f32;
            let expected = anchor.lerp(rest, t);
            assert_relative_eq!(p.pos.x, expected.x, epsilon = 1e-4);
            assert_relative_eq!(p.pos.y, expected.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_anker_bleibt_nach_jedem_step_exakt_fixiert() {
        let mut rope = rope();
        let anchor = rope.anchor();
        for i in 0..200 {
            let pin = if i % 3 == 0 {
                Some(Vec2::new(183.0, 320.0))
            } else {
                None
            };
            rope.step(pin);
            assert_eq!(rope.points()[0].pos, anchor);
            assert_eq!(rope.points()[0].prev, anchor);
        }
    }

    #[test]
    fn test_perlen_pin_setzt_position_und_vorgaengerposition() {
        let mut rope = rope();
        let target = Vec2::new(183.0, 340.0);
        rope.step(Some(target));
        let bead = rope.points().last().unwrap();
        assert_eq!(bead.pos, target);
        assert_eq!(bead.prev, target);
    }

    #[test]
    fn test_relaxation_reduziert_laengenfehler_monoton() {
        let mut rope = rope();
        // Seil grob verformen: Perle weit auslenken, dann loslassen
        rope.step(Some(Vec2::new(250.0, 350.0)));
        rope.step(None);

        // Innerhalb eines Steps: Fehler über Iterationen nicht-steigend
        let mut previous = rope.total_length_error();
        for _ in 0..8 {
            rope.relax_pass(false);
            let current = rope.total_length_error();
            assert!(
                current <= previous + 1e-3,
                "Längenfehler darf nicht wachsen: {} -> {}",
                previous,
                current
            );
            previous = current;
        }
    }

    #[test]
    fn test_freies_seil_konvergiert_gegen_segmentlaenge() {
        let mut rope = rope();
        rope.step(Some(Vec2::new(240.0, 340.0)));
        for _ in 0..300 {
            rope.step(None);
        }
        // Unter Schwerkraft hängt das Seil gespannt: Segmentfehler klein
        let mean_error = rope.total_length_error() / rope.points().len() as f32;
        assert!(
            mean_error < 0.5,
            "mittlerer Segmentfehler zu groß: {}",
            mean_error
        );
    }

    #[test]
    fn test_deckungsgleiche_punkte_erzeugen_keine_nan() {
        let mut rope = rope();
        // Alle Punkte auf den Anker zwingen (degenerierter Zustand)
        let anchor = rope.anchor();
        for p in &mut rope.points {
            *p = RopePoint::at_rest(anchor);
        }
        rope.step(None);
        for p in rope.points() {
            assert!(p.pos.is_finite(), "Position muss endlich bleiben");
        }
    }

    #[test]
    fn test_gepinnte_perle_bleibt_ueber_mehrere_steps_auf_ziel() {
        let mut rope = rope();
        let target = Vec2::new(190.0, 330.0);
        for _ in 0..50 {
            rope.step(Some(target));
            assert_eq!(rope.bead(), target);
        }
    }
}
