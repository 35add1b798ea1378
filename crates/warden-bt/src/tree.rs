use warden_core::{AgentId, Blackboard, Clock, SimClock, TickContext, WorldMut};

use crate::bt::{BoxedNode, BtStatus, WorldBlackboard};

/// Owns a root node, the controlled agent, the blackboard and the clock.
///
/// The owning system calls [`Tree::tick`] once per simulation step. An
/// inactive tree, or one without a root, reports `Failure` without touching
/// any state. Deactivating does not reset anything: reactivating resumes
/// every composite at the cursor it was left on.
///
/// The root is entered on the first tick of each run and exited when it
/// concludes, is reset or is replaced.
pub struct Tree<W>
where
    W: WorldMut + 'static,
{
    root: Option<BoxedNode<W>>,
    root_entered: bool,
    agent: Option<W::Agent>,
    blackboard: WorldBlackboard<W>,
    clock: Box<dyn Clock>,
    active: bool,
    tick_count: u64,
    last_status: Option<BtStatus>,
}

impl<W> Tree<W>
where
    W: WorldMut + 'static,
{
    /// Empty, active tree driven by a [`SimClock`].
    pub fn new() -> Self {
        Self {
            root: None,
            root_entered: false,
            agent: None,
            blackboard: Blackboard::new(),
            clock: Box::new(SimClock::new()),
            active: true,
            tick_count: 0,
            last_status: None,
        }
    }

    pub fn with_root(root: BoxedNode<W>) -> Self {
        let mut tree = Self::new();
        tree.root = Some(root);
        tree
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Binds `agent` into the tree and every node under the root.
    pub fn initialize(&mut self, agent: W::Agent) {
        self.agent = Some(agent);
        if let Some(root) = self.root.as_mut() {
            root.initialize(agent);
        }
        tracing::debug!(agent = agent.stable_id(), "behavior tree initialized");
    }

    /// Replaces the root. The new subtree is bound to the agent right away
    /// when the tree is already initialized. An old root that was mid-run is
    /// exited first.
    pub fn set_root(&mut self, mut root: BoxedNode<W>) {
        if let Some(agent) = self.agent {
            root.initialize(agent);
        }
        self.exit_root();
        self.root = Some(root);
        self.last_status = None;
    }

    /// Detaches the root, exiting it if it was mid-run. The tree fails every
    /// tick until a new root is set.
    pub fn take_root(&mut self) -> Option<BoxedNode<W>> {
        self.exit_root();
        self.last_status = None;
        self.root.take()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    pub fn agent(&self) -> Option<W::Agent> {
        self.agent
    }

    /// Runs one step. Returns `Failure` with no side effects when the tree
    /// is inactive or has no root.
    pub fn tick(&mut self, world: &mut W, dt_seconds: f32) -> BtStatus {
        if !self.active {
            return BtStatus::Failure;
        }
        let Some(root) = self.root.as_mut() else {
            return BtStatus::Failure;
        };

        if !self.root_entered {
            root.enter();
            self.root_entered = true;
        }

        self.clock.advance(dt_seconds);
        let ctx = TickContext::new(self.tick_count, dt_seconds, self.clock.now_seconds());
        self.tick_count = self.tick_count.saturating_add(1);

        let status = root.tick(&ctx, world, &mut self.blackboard);
        tracing::trace!(tick = ctx.tick, status = ?status, "behavior tree ticked");

        if status.is_concluded() {
            root.exit();
            self.root_entered = false;
            root.reset();
            if self.last_status != Some(status) {
                tracing::debug!(
                    agent = self.agent.map(AgentId::stable_id),
                    status = ?status,
                    "behavior tree root concluded"
                );
            }
        }
        self.last_status = Some(status);
        status
    }

    /// Clears progress in the whole tree. The blackboard is left alone.
    pub fn reset(&mut self) {
        self.exit_root();
        if let Some(root) = self.root.as_mut() {
            root.reset();
        }
        self.last_status = None;
    }

    fn exit_root(&mut self) {
        if std::mem::take(&mut self.root_entered) {
            if let Some(root) = self.root.as_mut() {
                root.exit();
            }
        }
    }

    /// Pauses or resumes execution without resetting anything.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            tracing::debug!(
                agent = self.agent.map(AgentId::stable_id),
                active,
                "behavior tree activation changed"
            );
        }
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn blackboard(&self) -> &WorldBlackboard<W> {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut WorldBlackboard<W> {
        &mut self.blackboard
    }

    pub fn clear_blackboard(&mut self) {
        self.blackboard.clear();
    }

    /// Ticks that actually reached the root.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn last_status(&self) -> Option<BtStatus> {
        self.last_status
    }

    pub fn now_seconds(&self) -> f64 {
        self.clock.now_seconds()
    }
}

impl<W> Default for Tree<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
