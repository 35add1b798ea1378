//! Umbrella crate that re-exports the `warden-*` building blocks.
//!
//! - `core`: agent ids, world traits, capabilities, blackboard, clocks
//! - `bt`: the tick-driven engine (`Tree`, composites, decorators)
//! - `agents`: stock conditions/actions, tuning and preset trees

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use warden_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use warden_bt as bt;

#[cfg(feature = "agents")]
#[cfg_attr(docsrs, doc(cfg(feature = "agents")))]
pub use warden_agents as agents;

/// The handful of names most drivers need.
#[cfg(feature = "agents")]
#[cfg_attr(docsrs, doc(cfg(feature = "agents")))]
pub mod prelude {
    pub use warden_agents::presets::{BehaviorTree, Preset};
    pub use warden_agents::BehaviorTuning;
    pub use warden_bt::{BoxedNode, BtNode, BtStatus, Tree};
    pub use warden_core::{
        keys, AlertListener, Animatable, Blackboard, Damageable, Health, Roster, TargetSeeker,
        Vec2, WorldMut, WorldView,
    };
}
