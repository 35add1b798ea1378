//! Tick-driven behavior tree engine built on `warden-core`.
//!
//! An external driver calls [`Tree::tick`] once per simulation step. Nodes
//! never block: anything that takes more than one frame returns
//! [`BtStatus::Running`] and is resumed on the next tick. `Sequence` and
//! `Selector` keep a cursor on the child in progress, so a resumed composite
//! continues where it left off instead of re-running earlier siblings.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod bt;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod tree;

pub use bt::{BoxedNode, BtNode, BtStatus, WorldBlackboard};
pub use composite::{Composite, ReactiveSelector, Selector, Sequence};
pub use decorator::{Inverter, RepeatLimit, Repeater};
pub use leaf::{Binding, Condition};
pub use tree::Tree;
