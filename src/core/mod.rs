//! Core-Domäne: Verlet-Seilsimulation.

pub mod rope;

pub use rope::{Rope, RopePoint};
