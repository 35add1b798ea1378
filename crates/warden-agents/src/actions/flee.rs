use warden_bt::{Binding, BtNode, BtStatus, WorldBlackboard};
use warden_core::{Roster, TickContext, Vec2, WorldMut};

use super::stop;
use crate::targeting::resolve_target;
use crate::tuning::FleeTuning;

/// Runs directly away from the resolved target until `safe_distance`.
///
/// With nothing to flee from the agent is already safe: `Success` without
/// touching its velocity.
pub struct Flee<W>
where
    W: WorldMut + 'static,
{
    speed: f32,
    safe_distance: f32,
    binding: Binding<W::Agent>,
}

impl<W> Flee<W>
where
    W: WorldMut + Roster + 'static,
{
    pub fn new(speed: f32, safe_distance: f32) -> Self {
        Self {
            speed,
            safe_distance,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &FleeTuning) -> Self {
        Self::new(tuning.speed, tuning.safe_distance)
    }
}

impl<W> BtNode<W> for Flee<W>
where
    W: WorldMut + Roster + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        let Some(agent) = self.binding.agent() else {
            return BtStatus::Failure;
        };
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some((_, threat)) = resolve_target(&*world, blackboard) else {
            return BtStatus::Success;
        };

        if pos.distance(threat) >= self.safe_distance {
            stop(world, agent);
            return BtStatus::Success;
        }

        let away = pos - threat;
        // Standing on the threat: any direction will do.
        let heading = if away.is_zero() { Vec2::X } else { away.normalized() };
        world.set_velocity(agent, heading * self.speed);
        BtStatus::Running
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}
