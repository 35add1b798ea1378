use warden_bt::{Binding, BtNode, BtStatus, WorldBlackboard};
use warden_core::{Roster, TickContext, WorldMut};

use super::{stop, toward};
use crate::targeting::resolve_target;
use crate::tuning::ChaseTuning;

/// Closes in on the resolved target.
///
/// - no target: `Failure`
/// - farther than `give_up_distance`: `Failure` (target lost), agent stopped
/// - within `attack_range`: `Success`, agent stopped
/// - otherwise `Running` while moving towards the target
pub struct Chase<W>
where
    W: WorldMut + 'static,
{
    speed: f32,
    attack_range: f32,
    give_up_distance: f32,
    binding: Binding<W::Agent>,
}

impl<W> Chase<W>
where
    W: WorldMut + Roster + 'static,
{
    pub fn new(speed: f32, attack_range: f32, give_up_distance: f32) -> Self {
        Self {
            speed,
            attack_range,
            give_up_distance,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &ChaseTuning) -> Self {
        Self::new(tuning.speed, tuning.attack_range, tuning.give_up_distance)
    }
}

impl<W> BtNode<W> for Chase<W>
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
        let Some((_, target_pos)) = resolve_target(&*world, blackboard) else {
            return BtStatus::Failure;
        };

        let distance = pos.distance(target_pos);
        if distance > self.give_up_distance {
            tracing::debug!(distance, "chase target lost");
            stop(world, agent);
            return BtStatus::Failure;
        }
        if distance <= self.attack_range {
            stop(world, agent);
            return BtStatus::Success;
        }

        world.set_velocity(agent, toward(pos, target_pos, self.speed));
        BtStatus::Running
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}
