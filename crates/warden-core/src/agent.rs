use core::fmt::Debug;

/// Stable identifier for an agent or any other entity the world tracks.
///
/// Identifiers are cheap handles: the engine copies them freely, stores them
/// in the blackboard, and hands them back to the world for every query.
/// `stable_id` is used for log fields and deterministic ordering.
pub trait AgentId: Copy + Ord + Eq + Debug + 'static {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}

impl AgentId for usize {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
