use warden_bt::{Binding, BtNode, BtStatus, WorldBlackboard};
use warden_core::{Roster, TickContext, WorldMut};

use super::on_cooldown;
use crate::targeting::resolve_target;
use crate::tuning::AttackTuning;

/// Deals `damage` to a target within `range`, at most once per cooldown.
///
/// While the cooldown runs and the target is still in range the attack
/// reports `Running`, holding its branch instead of letting a parent
/// selector fall through. The cooldown timestamp survives `reset`.
///
/// A target that cannot take damage makes the attack fail.
pub struct Attack<W>
where
    W: WorldMut + 'static,
{
    range: f32,
    damage: f32,
    cooldown_seconds: f64,
    last_attack: Option<f64>,
    binding: Binding<W::Agent>,
}

impl<W> Attack<W>
where
    W: WorldMut + Roster + 'static,
{
    pub fn new(range: f32, damage: f32, cooldown_seconds: f64) -> Self {
        Self {
            range,
            damage,
            cooldown_seconds,
            last_attack: None,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &AttackTuning) -> Self {
        Self::new(tuning.range, tuning.damage, tuning.cooldown_seconds)
    }

    /// Clock time of the last landed hit.
    pub fn last_attack(&self) -> Option<f64> {
        self.last_attack
    }
}

impl<W> BtNode<W> for Attack<W>
where
    W: WorldMut + Roster + 'static,
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
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some((target, target_pos)) = resolve_target(&*world, blackboard) else {
            return BtStatus::Failure;
        };
        if pos.distance(target_pos) > self.range {
            return BtStatus::Failure;
        }

        let now = ctx.now_seconds;
        if on_cooldown(self.last_attack, self.cooldown_seconds, now) {
            return BtStatus::Running;
        }

        let Some(victim) = world.damageable(target) else {
            return BtStatus::Failure;
        };
        victim.take_damage(self.damage);
        self.last_attack = Some(now);

        if let Some(anim) = world.animatable(agent) {
            anim.play_attack_animation();
        }
        tracing::debug!(?target, damage = self.damage, now, "hit landed");
        BtStatus::Success
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}
