//! Reine Geometrie-Funktionen: Seilpunkte → glatte kubische Bézier-Kurve.
//!
//! Layer-neutral: kann von `app`, `ui` und Tests importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Keine Zustände, keine Seiteneffekte.

use glam::Vec2;

/// Ein kubisches Bézier-Segment. Der Startpunkt ist der Endpunkt des
/// Vorgängersegments bzw. `CurvePath::start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Erster Kontrollpunkt
    pub ctrl1: Vec2,
    /// Zweiter Kontrollpunkt
    pub ctrl2: Vec2,
    /// Endpunkt des Segments
    pub end: Vec2,
}

/// Kurvenbeschreibung: Startpunkt plus Folge kubischer Segmente,
/// die alle Seilpunkte interpolieren.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurvePath {
    /// Startpunkt der Kurve (erster Seilpunkt)
    pub start: Vec2,
    /// Kubische Segmente, eines pro Punktepaar
    pub segments: Vec<CubicSegment>,
}

/// Erzeugt aus einer Punktfolge eine glatte Kurve mit Catmull-Rom-artiger
/// Tangentenschätzung (Kontrollpunkte aus Vor- und Nachfolgepunkt,
/// an den Rändern durch Wiederholen des ersten/letzten Punkts geklemmt).
///
/// Deterministisch und frei von Seiteneffekten — sicher pro Frame aufrufbar.
pub fn rope_to_curve(points: &[Vec2]) -> CurvePath {
    let Some(&start) = points.first() else {
        return CurvePath::default();
    };
    if points.len() < 2 {
        return CurvePath {
            start,
            segments: Vec::new(),
        };
    }

    let n = points.len();
    let mut segments = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];

        segments.push(CubicSegment {
            ctrl1: p1 + (p2 - p0) / 6.0,
            ctrl2: p2 - (p3 - p1) / 6.0,
            end: p2,
        });
    }

    CurvePath { start, segments }
}

/// Wertet ein kubisches Bézier-Segment bei `t ∈ [0, 1]` aus.
pub fn sample_segment(start: Vec2, segment: &CubicSegment, t: f32) -> Vec2 {
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;
    start * (u2 * u)
        + segment.ctrl1 * (3.0 * u2 * t)
        + segment.ctrl2 * (3.0 * u * t2)
        + segment.end * (t2 * t)
}

impl CurvePath {
    /// Tastet die gesamte Kurve mit `samples_per_segment` Zwischenpunkten ab
    /// (inklusive Start- und Endpunkt).
    pub fn sample(&self, samples_per_segment: usize) -> Vec<Vec2> {
        let mut result = Vec::with_capacity(self.segments.len() * samples_per_segment + 1);
        result.push(self.start);

        let mut cursor = self.start;
        for segment in &self.segments {
            for i in 1..=samples_per_segment {
                let t = i as f32 / samples_per_segment as f32;
                result.push(sample_segment(cursor, segment, t));
            }
            cursor = segment.end;
        }
        result
    }
}
