use warden_core::{Blackboard, TickContext, WorldMut, WorldView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

impl BtStatus {
    pub fn is_running(self) -> bool {
        matches!(self, BtStatus::Running)
    }

    /// `true` for `Success` and `Failure`.
    pub fn is_concluded(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`; `Running` is unchanged.
    pub fn invert(self) -> Self {
        match self {
            BtStatus::Success => BtStatus::Failure,
            BtStatus::Failure => BtStatus::Success,
            BtStatus::Running => BtStatus::Running,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BtStatus::Running => "running",
            BtStatus::Success => "success",
            BtStatus::Failure => "failure",
        }
    }
}

impl std::fmt::Display for BtStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blackboard type used by trees over world `W`.
pub type WorldBlackboard<W> = Blackboard<<W as WorldView>::Agent>;

/// Owned, type-erased node.
pub type BoxedNode<W> = Box<dyn BtNode<W>>;

/// A behavior tree node.
///
/// Contract:
/// - `initialize` binds the controlled agent and must reach every owned
///   child. It may be called again when a subtree is re-parented.
/// - `tick` performs one step of work and never blocks. A node that has not
///   been initialized returns `Failure`.
/// - `reset` clears progress markers so the subtree can start over. Leaf
///   state that is documented to outlive a run (cooldowns, patrol index) is
///   kept.
/// - `enter` / `exit` bracket a run of the node as seen by its parent.
pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus;

    fn initialize(&mut self, agent: W::Agent);

    fn reset(&mut self) {}

    fn enter(&mut self) {}

    fn exit(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_keeps_running() {
        assert_eq!(BtStatus::Success.invert(), BtStatus::Failure);
        assert_eq!(BtStatus::Failure.invert(), BtStatus::Success);
        assert_eq!(BtStatus::Running.invert(), BtStatus::Running);
    }
}
