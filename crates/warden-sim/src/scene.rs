//! The demo scene and its world implementation.

use std::collections::BTreeMap;

use warden_core::{
    AlertListener, Animatable, Damageable, Health, Roster, TargetSeeker, Vec2, WorldMut,
    WorldView,
};

pub const GUARD: u32 = 0;
pub const PLAYER: u32 = 1;
/// Ally that understands alerts.
pub const LOOKOUT: u32 = 2;
/// Ally that can only be told whom to pursue.
pub const RUNNER: u32 = 3;

const PLAYER_SPEED: f32 = 30.0;
const PLAYER_REACH: f32 = 30.0;
const PLAYER_DAMAGE: f32 = 8.0;
const PLAYER_COOLDOWN: f64 = 1.0;
const ALLY_SPEED: f32 = 90.0;
const ALLY_STOP_DISTANCE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Guard,
    Player,
    Ally,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub role: Role,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: Health,
    /// Ally notification style: `AlertListener` when set, `TargetSeeker`
    /// otherwise.
    pub listens: bool,
    pub pursuing: Option<u32>,
    pub attack_animations: u32,
    pub alert_effects: u32,
}

impl Entity {
    fn new(role: Role, x: f32, y: f32, hit_points: f32) -> Self {
        Self {
            role,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            health: Health::new(hit_points, hit_points),
            listens: false,
            pursuing: None,
            attack_animations: 0,
            alert_effects: 0,
        }
    }
}

impl Damageable for Entity {
    fn take_damage(&mut self, amount: f32) {
        self.health.current = (self.health.current - amount).max(0.0);
    }
}

impl Animatable for Entity {
    fn play_attack_animation(&mut self) {
        self.attack_animations += 1;
    }

    fn play_alert_effect(&mut self) {
        self.alert_effects += 1;
    }
}

impl AlertListener<u32> for Entity {
    fn receive_alert(&mut self, target: u32, source_position: Vec2) {
        tracing::debug!(
            target_id = target,
            x = source_position.x,
            y = source_position.y,
            "ally alerted"
        );
        self.pursuing = Some(target);
    }
}

impl TargetSeeker<u32> for Entity {
    fn set_target(&mut self, target: u32) {
        self.pursuing = Some(target);
    }
}

/// Entities by id. Dead entities are removed, which makes them invalid for
/// every tree that still references them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimWorld {
    entities: BTreeMap<u32, Entity>,
    last_player_hit: Option<f64>,
}

impl SimWorld {
    /// Guard on its route, player approaching from the east, two allies.
    pub fn scene() -> Self {
        let mut lookout = Entity::new(Role::Ally, -80.0, 40.0, 60.0);
        lookout.listens = true;

        let entities = BTreeMap::from([
            (GUARD, Entity::new(Role::Guard, 0.0, 0.0, 100.0)),
            (PLAYER, Entity::new(Role::Player, 500.0, 60.0, 100.0)),
            (LOOKOUT, lookout),
            (RUNNER, Entity::new(Role::Ally, 60.0, -150.0, 60.0)),
        ]);
        Self {
            entities,
            last_player_hit: None,
        }
    }

    /// The guard's patrol route.
    pub fn patrol_route() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(120.0, 0.0),
            Vec2::new(120.0, 120.0),
            Vec2::new(0.0, 120.0),
        ]
    }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = (u32, &Entity)> {
        self.entities.iter().map(|(&id, e)| (id, e))
    }

    /// Moves everything that is not tree-driven, integrates velocities and
    /// removes the dead.
    pub fn step(&mut self, dt: f32, now: f64) {
        self.drive_player(now);
        self.drive_allies();

        for entity in self.entities.values_mut() {
            entity.pos += entity.vel * dt;
        }

        let dead: Vec<u32> = self
            .entities
            .iter()
            .filter(|(_, e)| e.health.current <= 0.0)
            .map(|(&id, _)| id)
            .collect();
        for id in dead {
            if let Some(entity) = self.entities.remove(&id) {
                tracing::info!(id, role = ?entity.role, now, "entity down");
            }
        }
    }

    /// The player walks at the guard and hits it when close enough.
    fn drive_player(&mut self, now: f64) {
        let Some(guard_pos) = self.position(GUARD) else {
            self.set_velocity(PLAYER, Vec2::ZERO);
            return;
        };
        let Some(player_pos) = self.position(PLAYER) else {
            return;
        };

        if player_pos.distance(guard_pos) > PLAYER_REACH {
            self.set_velocity(PLAYER, (guard_pos - player_pos).normalized() * PLAYER_SPEED);
            return;
        }

        self.set_velocity(PLAYER, Vec2::ZERO);
        let ready = self
            .last_player_hit
            .is_none_or(|t| now - t >= PLAYER_COOLDOWN);
        if ready {
            if let Some(guard) = self.entities.get_mut(&GUARD) {
                guard.take_damage(PLAYER_DAMAGE);
                self.last_player_hit = Some(now);
            }
        }
    }

    /// Alerted allies converge on whoever they were told to pursue.
    fn drive_allies(&mut self) {
        let positions: BTreeMap<u32, Vec2> =
            self.entities.iter().map(|(&id, e)| (id, e.pos)).collect();

        for entity in self.entities.values_mut() {
            if entity.role != Role::Ally {
                continue;
            }
            let target_pos = entity.pursuing.and_then(|t| positions.get(&t).copied());
            entity.vel = match target_pos {
                Some(p) if entity.pos.distance(p) > ALLY_STOP_DISTANCE => {
                    (p - entity.pos).normalized() * ALLY_SPEED
                }
                _ => Vec2::ZERO,
            };
        }
    }
}

impl WorldView for SimWorld {
    type Agent = u32;

    fn position(&self, agent: u32) -> Option<Vec2> {
        self.entities.get(&agent).map(|e| e.pos)
    }

    fn health(&self, agent: u32) -> Option<Health> {
        self.entities.get(&agent).map(|e| e.health)
    }
}

impl WorldMut for SimWorld {
    fn set_velocity(&mut self, agent: u32, velocity: Vec2) {
        if let Some(entity) = self.entities.get_mut(&agent) {
            entity.vel = velocity;
        }
    }

    fn damageable(&mut self, agent: u32) -> Option<&mut dyn Damageable> {
        self.entities
            .get_mut(&agent)
            .map(|e| e as &mut dyn Damageable)
    }

    fn animatable(&mut self, agent: u32) -> Option<&mut dyn Animatable> {
        self.entities
            .get_mut(&agent)
            .map(|e| e as &mut dyn Animatable)
    }

    fn alert_listener(&mut self, agent: u32) -> Option<&mut dyn AlertListener<u32>> {
        self.entities
            .get_mut(&agent)
            .filter(|e| e.role == Role::Ally && e.listens)
            .map(|e| e as &mut dyn AlertListener<u32>)
    }

    fn target_seeker(&mut self, agent: u32) -> Option<&mut dyn TargetSeeker<u32>> {
        self.entities
            .get_mut(&agent)
            .filter(|e| e.role == Role::Ally)
            .map(|e| e as &mut dyn TargetSeeker<u32>)
    }
}

impl Roster for SimWorld {
    fn primary_target(&self) -> Option<u32> {
        self.entities
            .iter()
            .find(|(_, e)| e.role == Role::Player)
            .map(|(&id, _)| id)
    }

    fn hostiles(&self) -> Vec<u32> {
        self.entities
            .iter()
            .filter(|(_, e)| matches!(e.role, Role::Guard | Role::Ally))
            .map(|(&id, _)| id)
            .collect()
    }
}
