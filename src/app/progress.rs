//! Abgeleiteter Fortschritt der Zuggeste — pro Frame neu berechnet,
//! nie gespeichert.

/// Normierter Fortschritt der Zuggeste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Anteil der Schwelle in [0, 1]
    pub fraction: f32,
    /// `true` sobald die Schwelle erreicht oder überschritten ist
    pub complete: bool,
}

/// Berechnet den Fortschritt aus der vertikalen Perlen-Auslenkung.
///
/// `fraction = clamp((bead_y − rest_y) / threshold, 0, 1)`;
/// exakt auf der Schwelle gilt der Zug als vollständig.
pub fn compute(bead_y: f32, rest_y: f32, threshold: f32) -> Progress {
    let fraction = ((bead_y - rest_y) / threshold).clamp(0.0, 1.0);
    Progress {
        fraction,
        complete: fraction >= 1.0,
    }
}
