//! Simulation engine for the jumping creatures.
//!
//! A population of point creatures lives on the horizon `[0, horizon_size]`.
//! Each iteration every creature jumps; a creature that would leave the
//! horizon bounces back off the boundary.

pub mod engine;
pub mod jump;
pub mod run;

pub use engine::SimulationEngine;
pub use jump::{reflect, JumpPolicy, UniformJump};
pub use run::{RunRequest, RunResult};
