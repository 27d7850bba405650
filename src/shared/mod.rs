//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und reine Geometrie, die von `app`, `ui` und Tests
//! importiert werden ohne Zirkel-Abhängigkeiten zu erzeugen.

pub mod curve_geometry;
pub mod options;

pub use curve_geometry::{rope_to_curve, sample_segment, CubicSegment, CurvePath};
pub use options::{GateOptions, PROGRESS_VISIBLE_MIN_DY, VIEWBOX};
