//! Lamp Pull Gate Library.
//! Gesten-getriebenes Verifikations-Widget: eine simulierte Lampenschnur
//! muss über die Schwelle gezogen werden, um eine Aktion zu entsperren.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    FrameLoop, GateController, GateEvent, GateFrame, GateIntent, GateState, GesturePhase,
    GestureState, Progress,
};
pub use core::{Rope, RopePoint};
pub use shared::{rope_to_curve, CubicSegment, CurvePath, GateOptions};
pub use ui::{IdentityTransform, InputState, PointerTransform, ViewTransform};
