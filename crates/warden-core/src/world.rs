use crate::{AgentId, AlertListener, Animatable, Damageable, TargetSeeker, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Current / maximum hit points of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(current: f32, maximum: f32) -> Self {
        Self { current, maximum }
    }

    /// `current / maximum`, or `None` when the maximum is not positive.
    pub fn ratio(self) -> Option<f32> {
        if self.maximum <= 0.0 {
            None
        } else {
            Some(self.current / self.maximum)
        }
    }
}

/// Read-only world access.
///
/// `position` doubles as the validity check: an entity that has been
/// despawned (or never existed) has no position.
pub trait WorldView {
    type Agent: AgentId;

    fn position(&self, agent: Self::Agent) -> Option<Vec2>;

    /// Health attributes, or `None` for entities that do not track health.
    fn health(&self, _agent: Self::Agent) -> Option<Health> {
        None
    }

    fn is_valid(&self, agent: Self::Agent) -> bool {
        self.position(agent).is_some()
    }
}

/// Write access / effect sink, plus capability probes.
pub trait WorldMut: WorldView {
    /// Desired velocity for the next integration step.
    fn set_velocity(&mut self, agent: Self::Agent, velocity: Vec2);

    fn damageable(&mut self, _agent: Self::Agent) -> Option<&mut dyn Damageable> {
        None
    }

    fn animatable(&mut self, _agent: Self::Agent) -> Option<&mut dyn Animatable> {
        None
    }

    fn alert_listener(
        &mut self,
        _agent: Self::Agent,
    ) -> Option<&mut dyn AlertListener<Self::Agent>> {
        None
    }

    fn target_seeker(&mut self, _agent: Self::Agent) -> Option<&mut dyn TargetSeeker<Self::Agent>> {
        None
    }
}

/// Entity lookups that replace scene-global tag queries.
pub trait Roster: WorldView {
    /// First entity tagged as the primary target (usually the player).
    fn primary_target(&self) -> Option<Self::Agent>;

    /// All entities tagged hostile, in a stable order.
    fn hostiles(&self) -> Vec<Self::Agent>;
}
