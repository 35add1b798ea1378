//! Condition leaves. None of them keep state between ticks beyond their
//! agent binding.

use warden_bt::{Binding, BtNode, BtStatus, WorldBlackboard};
use warden_core::{keys, Roster, TickContext, WorldMut};

use crate::targeting::blackboard_target;
use crate::tuning::{AttackTuning, FleeTuning, PerceptionTuning};

/// Success when the target is within `detection_radius` of the agent.
///
/// The target is the designated entity when one is set, otherwise the
/// roster's primary target. On success the target and its position are
/// published under [`keys::TARGET`] and [`keys::LAST_KNOWN_TARGET_POSITION`].
///
/// Distance only; occlusion is not checked.
pub struct TargetVisible<W>
where
    W: WorldMut + 'static,
{
    detection_radius: f32,
    designated: Option<W::Agent>,
    binding: Binding<W::Agent>,
}

impl<W> TargetVisible<W>
where
    W: WorldMut + Roster + 'static,
{
    pub fn new(detection_radius: f32) -> Self {
        Self {
            detection_radius,
            designated: None,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &PerceptionTuning) -> Self {
        Self::new(tuning.detection_radius)
    }

    /// Watch a specific entity instead of the roster's primary target.
    pub fn watching(mut self, target: W::Agent) -> Self {
        self.designated = Some(target);
        self
    }

    pub fn detection_radius(&self) -> f32 {
        self.detection_radius
    }
}

impl<W> BtNode<W> for TargetVisible<W>
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
        let Some(target) = self.designated.or_else(|| world.primary_target()) else {
            return BtStatus::Failure;
        };
        let Some(target_pos) = world.position(target) else {
            return BtStatus::Failure;
        };

        if pos.distance(target_pos) > self.detection_radius {
            return BtStatus::Failure;
        }

        blackboard.set_entity(keys::TARGET, target);
        blackboard.set_position(keys::LAST_KNOWN_TARGET_POSITION, target_pos);
        BtStatus::Success
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}

/// Success when the agent's health ratio is at or below `threshold`.
///
/// Agents without health (or with a non-positive maximum) fail.
pub struct LowHealth<W>
where
    W: WorldMut + 'static,
{
    threshold: f32,
    binding: Binding<W::Agent>,
}

impl<W> LowHealth<W>
where
    W: WorldMut + 'static,
{
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &FleeTuning) -> Self {
        Self::new(tuning.health_threshold)
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl<W> BtNode<W> for LowHealth<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        _ctx: &TickContext,
        world: &mut W,
        _blackboard: &mut WorldBlackboard<W>,
    ) -> BtStatus {
        let Some(agent) = self.binding.agent() else {
            return BtStatus::Failure;
        };
        match world.health(agent).and_then(|h| h.ratio()) {
            Some(ratio) if ratio <= self.threshold => BtStatus::Success,
            _ => BtStatus::Failure,
        }
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}

/// Success when the blackboard target is within `range` of the agent.
pub struct InRange<W>
where
    W: WorldMut + 'static,
{
    range: f32,
    binding: Binding<W::Agent>,
}

impl<W> InRange<W>
where
    W: WorldMut + 'static,
{
    pub fn new(range: f32) -> Self {
        Self {
            range,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(tuning: &AttackTuning) -> Self {
        Self::new(tuning.range)
    }

    pub fn range(&self) -> f32 {
        self.range
    }
}

impl<W> BtNode<W> for InRange<W>
where
    W: WorldMut + 'static,
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
        let Some((_, target_pos)) = blackboard_target(&*world, blackboard) else {
            return BtStatus::Failure;
        };

        if pos.distance(target_pos) <= self.range {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}
