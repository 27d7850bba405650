//! UI-Schicht: Koordinaten-Mapping, Input-Handling und Zeichnen.

pub mod input;
pub mod mapper;
pub mod widget;

pub use input::InputState;
pub use mapper::{IdentityTransform, PointerTransform, ViewTransform};
pub use widget::draw_gate;
