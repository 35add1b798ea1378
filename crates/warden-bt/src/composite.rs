//! Composite nodes.
//!
//! [`Sequence`] and [`Selector`] keep a cursor on the child in progress. The
//! cursor only moves forward while the composite is running and returns to
//! `0` when the composite concludes or is reset, so a `Running` child resumes
//! on the next tick without re-ticking the siblings before it.
//!
//! [`ReactiveSelector`] is the exception: it re-checks its children in
//! priority order every tick.

use warden_core::{TickContext, WorldMut};

use crate::bt::{BoxedNode, BtNode, BtStatus, WorldBlackboard};

/// Ordered children plus the resume cursor shared by [`Sequence`] and
/// [`Selector`].
pub struct Composite<W>
where
    W: WorldMut + 'static,
{
    children: Vec<BoxedNode<W>>,
    cursor: usize,
    // Whether `enter` has been sent to the child under the cursor.
    entered: bool,
    agent: Option<W::Agent>,
}

impl<W> Composite<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxedNode<W>>) -> Self {
        Self {
            children,
            cursor: 0,
            entered: false,
            agent: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child; it runs after all existing children. A composite
    /// that is already bound binds the new child to the same agent.
    pub fn push(&mut self, mut child: BoxedNode<W>) {
        if let Some(agent) = self.agent {
            child.initialize(agent);
        }
        self.children.push(child);
    }

    /// Ticks children from the cursor onward.
    ///
    /// A child returning `advance_on` moves the cursor to the next child in
    /// the same tick; `Running` is returned as-is with the cursor retained;
    /// the opposite conclusion is returned immediately after a reset. When
    /// every child has produced `advance_on`, the composite resets and
    /// reports `advance_on`.
    fn tick_from_cursor(
        &mut self,
        advance_on: BtStatus,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        while self.cursor < self.children.len() {
            let child = &mut self.children[self.cursor];
            if !self.entered {
                child.enter();
                self.entered = true;
            }

            let status = child.tick(ctx, world, blackboard);
            if status.is_running() {
                return BtStatus::Running;
            }

            child.exit();
            self.entered = false;

            if status != advance_on {
                self.reset();
                return status;
            }
            self.cursor += 1;
        }

        self.reset();
        advance_on
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.agent = Some(agent);
        for child in self.children.iter_mut() {
            child.initialize(agent);
        }
    }

    fn reset(&mut self) {
        if self.entered {
            if let Some(child) = self.children.get_mut(self.cursor) {
                child.exit();
            }
            self.entered = false;
        }
        self.cursor = 0;
        for child in self.children.iter_mut() {
            child.reset();
        }
    }
}

/// "Do A, then B, then C": fails as soon as one child fails.
///
/// An empty sequence succeeds.
pub struct Sequence<W>
where
    W: WorldMut + 'static,
{
    inner: Composite<W>,
}

impl<W> Sequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxedNode<W>>) -> Self {
        Self {
            inner: Composite::new(children),
        }
    }

    pub fn cursor(&self) -> usize {
        self.inner.cursor()
    }

    pub fn composite(&self) -> &Composite<W> {
        &self.inner
    }

    pub fn push(&mut self, child: BoxedNode<W>) {
        self.inner.push(child);
    }
}

impl<W> BtNode<W> for Sequence<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        self.inner
            .tick_from_cursor(BtStatus::Success, ctx, world, blackboard)
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.inner.initialize(agent);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Priority fallback: succeeds as soon as one child succeeds.
///
/// An empty selector fails.
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    inner: Composite<W>,
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxedNode<W>>) -> Self {
        Self {
            inner: Composite::new(children),
        }
    }

    pub fn cursor(&self) -> usize {
        self.inner.cursor()
    }

    pub fn composite(&self) -> &Composite<W> {
        &self.inner
    }

    pub fn push(&mut self, child: BoxedNode<W>) {
        self.inner.push(child);
    }
}

impl<W> BtNode<W> for Selector<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        self.inner
            .tick_from_cursor(BtStatus::Failure, ctx, world, blackboard)
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.inner.initialize(agent);
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Priority selector that re-evaluates from the first child every tick.
///
/// Unlike [`Selector`] it does not resume at a cursor: higher-priority
/// children get a chance to run on every tick, and when one of them starts
/// running (or succeeds) the lower-priority child that was running is exited
/// and reset. Leaf state that survives `reset` (patrol index, cooldowns) is
/// kept, so a preempted branch picks up close to where it stopped.
pub struct ReactiveSelector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<BoxedNode<W>>,
    running: Option<usize>,
}

impl<W> ReactiveSelector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<BoxedNode<W>>) -> Self {
        Self {
            children,
            running: None,
        }
    }

    /// Index of the child that returned `Running` on the last tick.
    pub fn running(&self) -> Option<usize> {
        self.running
    }
}

impl<W> BtNode<W> for ReactiveSelector<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        for i in 0..self.children.len() {
            let resumed = self.running == Some(i);
            let child = &mut self.children[i];
            if !resumed {
                child.enter();
            }

            let status = child.tick(ctx, world, blackboard);
            match status {
                BtStatus::Running => {
                    if !resumed {
                        if let Some(prev) = self.running.replace(i) {
                            let preempted = &mut self.children[prev];
                            preempted.exit();
                            preempted.reset();
                        }
                    }
                    return BtStatus::Running;
                }
                BtStatus::Success => {
                    child.exit();
                    if resumed {
                        self.running = None;
                    }
                    self.reset();
                    return BtStatus::Success;
                }
                BtStatus::Failure => {
                    child.exit();
                    if resumed {
                        self.running = None;
                    }
                }
            }
        }

        self.reset();
        BtStatus::Failure
    }

    fn initialize(&mut self, agent: W::Agent) {
        for child in self.children.iter_mut() {
            child.initialize(agent);
        }
    }

    fn reset(&mut self) {
        if let Some(prev) = self.running.take() {
            if let Some(child) = self.children.get_mut(prev) {
                child.exit();
            }
        }
        for child in self.children.iter_mut() {
            child.reset();
        }
    }
}
