use warden_core::{Blackboard, TickContext, WorldMut};

use crate::bt::{BtNode, BtStatus, WorldBlackboard};

/// The agent a leaf acts for. Empty until `initialize` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<A> {
    agent: Option<A>,
}

impl<A: Copy> Binding<A> {
    pub const fn unbound() -> Self {
        Self { agent: None }
    }

    pub fn bind(&mut self, agent: A) {
        self.agent = Some(agent);
    }

    pub fn agent(&self) -> Option<A> {
        self.agent
    }

    pub fn is_bound(&self) -> bool {
        self.agent.is_some()
    }
}

impl<A: Copy> Default for Binding<A> {
    fn default() -> Self {
        Self::unbound()
    }
}

/// Leaf backed by a predicate closure: `Success` when it returns `true`.
pub struct Condition<W, F>
where
    W: WorldMut + 'static,
{
    cond: F,
    binding: Binding<W::Agent>,
}

impl<W, F> Condition<W, F>
where
    W: WorldMut + 'static,
    F: FnMut(&TickContext, W::Agent, &W, &Blackboard<W::Agent>) -> bool + 'static,
{
    pub fn new(cond: F) -> Self {
        Self {
            cond,
            binding: Binding::unbound(),
        }
    }
}

impl<W, F> BtNode<W> for Condition<W, F>
where
    W: WorldMut + 'static,
    F: FnMut(&TickContext, W::Agent, &W, &Blackboard<W::Agent>) -> bool + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        let Some(agent) = self.binding.agent() else {
            return BtStatus::Failure;
        };
        if (self.cond)(ctx, agent, &*world, &*blackboard) {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}
