#![allow(dead_code)]

use std::collections::BTreeMap;

use warden_core::{
    AlertListener, Animatable, Damageable, Health, Roster, TargetSeeker, TickContext, Vec2,
    WorldMut, WorldView,
};

/// One entity in the [`Arena`]. Capabilities are opt-in per body.
#[derive(Debug, Clone, Default)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: Option<Health>,
    pub damageable: bool,
    pub listens: bool,
    pub seeks: bool,
    pub hostile: bool,
    pub primary: bool,

    pub damage_taken: f32,
    pub alerts: Vec<(u64, Vec2)>,
    pub pursuing: Option<u64>,
    pub attack_animations: u32,
    pub alert_effects: u32,
}

impl Body {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn hostile(mut self) -> Self {
        self.hostile = true;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn health(mut self, current: f32, maximum: f32) -> Self {
        self.health = Some(Health::new(current, maximum));
        self
    }

    pub fn damageable(mut self) -> Self {
        self.damageable = true;
        self
    }

    pub fn listener(mut self) -> Self {
        self.listens = true;
        self
    }

    pub fn seeker(mut self) -> Self {
        self.seeks = true;
        self
    }
}

impl Damageable for Body {
    fn take_damage(&mut self, amount: f32) {
        self.damage_taken += amount;
        if let Some(health) = self.health.as_mut() {
            health.current = (health.current - amount).max(0.0);
        }
    }
}

impl Animatable for Body {
    fn play_attack_animation(&mut self) {
        self.attack_animations += 1;
    }

    fn play_alert_effect(&mut self) {
        self.alert_effects += 1;
    }
}

impl AlertListener<u64> for Body {
    fn receive_alert(&mut self, target: u64, source_position: Vec2) {
        self.alerts.push((target, source_position));
    }
}

impl TargetSeeker<u64> for Body {
    fn set_target(&mut self, target: u64) {
        self.pursuing = Some(target);
    }
}

/// Small in-memory world with a roster and every capability.
#[derive(Debug, Default)]
pub struct Arena {
    pub bodies: BTreeMap<u64, Body>,
    pub velocity_writes: u32,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: u64, body: Body) -> Self {
        self.bodies.insert(id, body);
        self
    }

    pub fn body(&self, id: u64) -> &Body {
        &self.bodies[&id]
    }

    pub fn body_mut(&mut self, id: u64) -> &mut Body {
        self.bodies.get_mut(&id).expect("unknown body")
    }

    pub fn move_to(&mut self, id: u64, x: f32, y: f32) {
        self.body_mut(id).pos = Vec2::new(x, y);
    }

    pub fn velocity(&self, id: u64) -> Vec2 {
        self.body(id).vel
    }

    /// Integrate velocities over `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        for body in self.bodies.values_mut() {
            body.pos += body.vel * dt;
        }
    }
}

impl WorldView for Arena {
    type Agent = u64;

    fn position(&self, agent: u64) -> Option<Vec2> {
        self.bodies.get(&agent).map(|b| b.pos)
    }

    fn health(&self, agent: u64) -> Option<Health> {
        self.bodies.get(&agent).and_then(|b| b.health)
    }
}

impl WorldMut for Arena {
    fn set_velocity(&mut self, agent: u64, velocity: Vec2) {
        if let Some(body) = self.bodies.get_mut(&agent) {
            body.vel = velocity;
            self.velocity_writes += 1;
        }
    }

    fn damageable(&mut self, agent: u64) -> Option<&mut dyn Damageable> {
        self.bodies
            .get_mut(&agent)
            .filter(|b| b.damageable)
            .map(|b| b as &mut dyn Damageable)
    }

    fn animatable(&mut self, agent: u64) -> Option<&mut dyn Animatable> {
        self.bodies
            .get_mut(&agent)
            .map(|b| b as &mut dyn Animatable)
    }

    fn alert_listener(&mut self, agent: u64) -> Option<&mut dyn AlertListener<u64>> {
        self.bodies
            .get_mut(&agent)
            .filter(|b| b.listens)
            .map(|b| b as &mut dyn AlertListener<u64>)
    }

    fn target_seeker(&mut self, agent: u64) -> Option<&mut dyn TargetSeeker<u64>> {
        self.bodies
            .get_mut(&agent)
            .filter(|b| b.seeks)
            .map(|b| b as &mut dyn TargetSeeker<u64>)
    }
}

impl Roster for Arena {
    fn primary_target(&self) -> Option<u64> {
        self.bodies
            .iter()
            .find(|(_, b)| b.primary)
            .map(|(&id, _)| id)
    }

    fn hostiles(&self) -> Vec<u64> {
        self.bodies
            .iter()
            .filter(|(_, b)| b.hostile)
            .map(|(&id, _)| id)
            .collect()
    }
}

pub fn ctx_at(now_seconds: f64) -> TickContext {
    TickContext::new(0, 0.1, now_seconds)
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
