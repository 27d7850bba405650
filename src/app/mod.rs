//! Application-Layer: Controller, State, Events, Geste und Frame-Loop.

pub mod controller;
pub mod events;
pub mod frame_loop;
mod gesture;
pub mod progress;
pub mod state;

pub use controller::{GateController, GateFrame};
pub use events::{GateEvent, GateIntent};
pub use frame_loop::FrameLoop;
pub use progress::Progress;
pub use state::{GateState, GesturePhase, GestureState};
