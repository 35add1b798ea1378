//! Agent, world and blackboard primitives shared by the warden behavior tree engine.
//!
//! The engine never owns agent state. Everything it knows about an agent is
//! reached through [`WorldView`] / [`WorldMut`], and optional behaviors
//! (taking damage, playing effects, receiving alerts) are probed through
//! capability accessors that return `None` when unsupported.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod blackboard;
pub mod capability;
pub mod clock;
pub mod math;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use blackboard::{keys, BbValue, Blackboard};
pub use capability::{AlertListener, Animatable, Damageable, TargetSeeker};
pub use clock::{Clock, MonotonicClock, SimClock};
pub use math::Vec2;
pub use tick::TickContext;
pub use world::{Health, Roster, WorldMut, WorldView};
