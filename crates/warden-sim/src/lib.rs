//! Headless scene runner: one guard driven by a preset tree, an approaching
//! player and two allies, stepped at a fixed `dt`.

#![forbid(unsafe_code)]

pub mod scene;
pub mod sim;

pub use scene::{Entity, Role, SimWorld, GUARD, LOOKOUT, PLAYER, RUNNER};
pub use sim::{SimConfig, Simulation, TickRecord};
