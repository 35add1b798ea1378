use warden_bt::{Binding, BtNode, BtStatus, WorldBlackboard};
use warden_core::{keys, Roster, TickContext, Vec2, WorldMut};

use super::on_cooldown;
use crate::targeting::blackboard_target;
use crate::tuning::AlertTuning;

/// Tells hostile allies within `radius` about the blackboard target.
///
/// Each neighbour is notified through exactly one capability:
/// [`AlertListener`](warden_core::AlertListener) when it has one, otherwise
/// [`TargetSeeker`](warden_core::TargetSeeker). Neighbours with neither are
/// skipped and do not count.
///
/// Fails when on cooldown, without a blackboard target, or when nobody was
/// notified. Unlike [`Attack`](super::Attack), a pending cooldown is a
/// failure so that siblings get their turn. The timestamp survives `reset`.
pub struct Alert<W>
where
    W: WorldMut + 'static,
{
    radius: f32,
    cooldown_seconds: f64,
    last_alert: Option<f64>,
    binding: Binding<W::Agent>,
}

impl<W> Alert<W>
where
    W: WorldMut + Roster + 'static,
{
    pub fn new(radius: f32, cooldown_seconds: f64) -> Self {
        Self {
            radius,
            cooldown_seconds,
            last_alert: None,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &AlertTuning) -> Self {
        Self::new(tuning.radius, tuning.cooldown_seconds)
    }

    pub fn last_alert(&self) -> Option<f64> {
        self.last_alert
    }
}

impl<W> BtNode<W> for Alert<W>
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
        let now = ctx.now_seconds;
        if on_cooldown(self.last_alert, self.cooldown_seconds, now) {
            return BtStatus::Failure;
        }
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some((target, _)) = blackboard_target(&*world, blackboard) else {
            return BtStatus::Failure;
        };

        let neighbours: Vec<W::Agent> = world
            .hostiles()
            .into_iter()
            .filter(|&other| other != agent && other != target)
            .filter(|&other| {
                world
                    .position(other)
                    .is_some_and(|p| p.distance(pos) <= self.radius)
            })
            .collect();

        let mut notified = 0usize;
        for neighbour in neighbours {
            if notify(world, neighbour, target, pos) {
                notified += 1;
            }
        }
        if notified == 0 {
            return BtStatus::Failure;
        }

        self.last_alert = Some(now);
        blackboard.set_flag(keys::ALERTED, true);
        if let Some(anim) = world.animatable(agent) {
            anim.play_alert_effect();
        }
        tracing::debug!(?target, notified, "alert broadcast");
        BtStatus::Success
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}

fn notify<W: WorldMut>(world: &mut W, neighbour: W::Agent, target: W::Agent, source: Vec2) -> bool {
    if let Some(listener) = world.alert_listener(neighbour) {
        listener.receive_alert(target, source);
        return true;
    }
    if let Some(seeker) = world.target_seeker(neighbour) {
        seeker.set_target(target);
        return true;
    }
    false
}
