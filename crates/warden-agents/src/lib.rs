//! Stock behaviors for warden agents.
//!
//! - **Conditions** ([`conditions`]): per-tick checks that may publish the
//!   current target to the blackboard.
//! - **Actions** ([`actions`]): stateful behaviors that steer the agent and
//!   act on the world through its capability probes.
//! - **Tuning** ([`tuning`]): serde-loadable parameters for every leaf.
//! - **Subtrees / presets**: ready-made shapes assembled from the leaves.
//!
//! Each leaf documents its own policy for a missing target or capability.
//! The policies differ on purpose (a chase with nothing to chase fails, a
//! flee from nothing succeeds) and are not unified.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod actions;
pub mod conditions;
pub mod error;
pub mod presets;
pub mod subtrees;
pub mod targeting;
pub mod tuning;

pub use actions::{Alert, Attack, Chase, Flee, Patrol};
pub use conditions::{InRange, LowHealth, TargetVisible};
pub use error::{Result, TuningError};
pub use tuning::{
    AlertTuning, AttackTuning, BehaviorTuning, ChaseTuning, FleeTuning, PatrolTuning,
    PerceptionTuning,
};
