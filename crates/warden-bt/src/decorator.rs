//! Decorator nodes.
//!
//! A decorator owns at most one child. Ticking a decorator that has no child
//! is a `Failure`, never a panic.

use warden_core::{TickContext, WorldMut};

use crate::bt::{BoxedNode, BtNode, BtStatus, WorldBlackboard};

/// Swaps the child's `Success` and `Failure`; `Running` passes through.
pub struct Inverter<W>
where
    W: WorldMut + 'static,
{
    child: Option<BoxedNode<W>>,
}

impl<W> Inverter<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: BoxedNode<W>) -> Self {
        Self { child: Some(child) }
    }

    /// Inverter with no child yet; ticks as `Failure` until one is set.
    pub fn empty() -> Self {
        Self { child: None }
    }

    pub fn set_child(&mut self, child: BoxedNode<W>) {
        self.child = Some(child);
    }
}

impl<W> BtNode<W> for Inverter<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        match self.child.as_mut() {
            Some(child) => child.tick(ctx, world, blackboard).invert(),
            None => BtStatus::Failure,
        }
    }

    fn initialize(&mut self, agent: W::Agent) {
        if let Some(child) = self.child.as_mut() {
            child.initialize(agent);
        }
    }

    fn reset(&mut self) {
        if let Some(child) = self.child.as_mut() {
            child.reset();
        }
    }

    fn enter(&mut self) {
        if let Some(child) = self.child.as_mut() {
            child.enter();
        }
    }

    fn exit(&mut self) {
        if let Some(child) = self.child.as_mut() {
            child.exit();
        }
    }
}

/// How many times a [`Repeater`] runs its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatLimit {
    Times(u32),
    /// Never concludes on its own; only preemption or a tree reset stops it.
    Infinite,
}

/// Runs its child again every time it concludes.
///
/// Each conclusion (success or failure alike) resets the child and counts as
/// one repetition. Until the limit is reached the repeater reports `Running`;
/// the tick that reaches it reports `Success` and zeroes the counter.
pub struct Repeater<W>
where
    W: WorldMut + 'static,
{
    child: Option<BoxedNode<W>>,
    limit: RepeatLimit,
    count: u32,
    child_entered: bool,
}

impl<W> Repeater<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: BoxedNode<W>, limit: RepeatLimit) -> Self {
        Self {
            child: Some(child),
            limit,
            count: 0,
            child_entered: false,
        }
    }

    pub fn times(child: BoxedNode<W>, times: u32) -> Self {
        Self::new(child, RepeatLimit::Times(times))
    }

    pub fn forever(child: BoxedNode<W>) -> Self {
        Self::new(child, RepeatLimit::Infinite)
    }

    pub fn empty(limit: RepeatLimit) -> Self {
        Self {
            child: None,
            limit,
            count: 0,
            child_entered: false,
        }
    }

    pub fn set_child(&mut self, child: BoxedNode<W>) {
        self.child = Some(child);
        self.count = 0;
        self.child_entered = false;
    }

    /// Completed repetitions in the current run.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> RepeatLimit {
        self.limit
    }
}

impl<W> BtNode<W> for Repeater<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        let Some(child) = self.child.as_mut() else {
            return BtStatus::Failure;
        };

        if self.limit == RepeatLimit::Times(0) {
            return BtStatus::Success;
        }

        if !self.child_entered {
            child.enter();
            self.child_entered = true;
        }

        let status = child.tick(ctx, world, blackboard);
        if status.is_running() {
            return BtStatus::Running;
        }

        child.exit();
        child.reset();
        self.child_entered = false;
        self.count = self.count.saturating_add(1);

        match self.limit {
            RepeatLimit::Times(n) if self.count >= n => {
                self.count = 0;
                BtStatus::Success
            }
            _ => BtStatus::Running,
        }
    }

    fn initialize(&mut self, agent: W::Agent) {
        if let Some(child) = self.child.as_mut() {
            child.initialize(agent);
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        if let Some(child) = self.child.as_mut() {
            if self.child_entered {
                child.exit();
            }
            child.reset();
        }
        self.child_entered = false;
    }
}
