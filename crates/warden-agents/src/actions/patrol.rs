use warden_bt::{Binding, BtNode, BtStatus, WorldBlackboard};
use warden_core::{TickContext, Vec2, WorldMut};

use super::toward;
use crate::tuning::PatrolTuning;

/// Walks a closed route of waypoints forever.
///
/// Never concludes on its own: it only gives up control when a sibling
/// preempts it. The waypoint index is not touched by `reset`, so a patrol
/// that gets interrupted resumes towards the waypoint it was heading for.
/// An empty route fails.
pub struct Patrol<W>
where
    W: WorldMut + 'static,
{
    waypoints: Vec<Vec2>,
    index: usize,
    speed: f32,
    arrival_tolerance: f32,
    binding: Binding<W::Agent>,
}

impl<W> Patrol<W>
where
    W: WorldMut + 'static,
{
    pub fn new(waypoints: Vec<Vec2>, speed: f32, arrival_tolerance: f32) -> Self {
        Self {
            waypoints,
            index: 0,
            speed,
            arrival_tolerance,
            binding: Binding::unbound(),
        }
    }

    pub fn from_tuning(waypoints: Vec<Vec2>, tuning: &PatrolTuning) -> Self {
        Self::new(waypoints, tuning.speed, tuning.arrival_tolerance)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.index).copied()
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }
}

impl<W> BtNode<W> for Patrol<W>
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
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let Some(mut waypoint) = self.current_waypoint() else {
            return BtStatus::Failure;
        };

        if pos.distance(waypoint) <= self.arrival_tolerance {
            self.index = (self.index + 1) % self.waypoints.len();
            tracing::debug!(index = self.index, "waypoint reached");
            waypoint = self.waypoints[self.index];
        }

        world.set_velocity(agent, toward(pos, waypoint, self.speed));
        BtStatus::Running
    }

    fn initialize(&mut self, agent: W::Agent) {
        self.binding.bind(agent);
    }
}
