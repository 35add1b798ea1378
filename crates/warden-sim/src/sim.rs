use std::fmt;

use serde::Serialize;
use warden_agents::presets::Preset;
use warden_agents::BehaviorTuning;
use warden_bt::Tree;
use warden_core::{keys, Vec2, WorldView};

use crate::scene::{SimWorld, GUARD, PLAYER};

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub preset: Preset,
    pub ticks: u64,
    pub dt: f32,
    pub tuning: BehaviorTuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Grunt,
            ticks: 300,
            dt: 0.1,
            tuning: BehaviorTuning::default(),
        }
    }
}

/// Snapshot taken after each tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickRecord {
    pub tick: u64,
    pub time: f64,
    pub status: &'static str,
    pub guard: Option<Vec2>,
    pub guard_health: Option<f32>,
    pub player: Option<Vec2>,
    pub player_health: Option<f32>,
    pub target_acquired: bool,
}

impl fmt::Display for TickRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<4} t={:>6.2}s  {:<7}", self.tick, self.time, self.status)?;
        write_body(f, "guard", self.guard, self.guard_health)?;
        write_body(f, "player", self.player, self.player_health)
    }
}

fn write_body(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    pos: Option<Vec2>,
    health: Option<f32>,
) -> fmt::Result {
    match (pos, health) {
        (Some(p), Some(hp)) => write!(f, "  {label}=({:>7.1},{:>7.1}) hp={hp:>5.1}", p.x, p.y),
        _ => write!(f, "  {label}=down"),
    }
}

/// The scene plus the guard's tree.
pub struct Simulation {
    world: SimWorld,
    tree: Tree<SimWorld>,
    dt: f32,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Self {
        let root = config
            .preset
            .build(SimWorld::patrol_route(), &config.tuning);
        let mut tree: Tree<SimWorld> = Tree::with_root(root);
        tree.initialize(GUARD);
        tracing::info!(preset = %config.preset, dt = config.dt, "simulation ready");

        Self {
            world: SimWorld::scene(),
            tree,
            dt: config.dt,
        }
    }

    pub fn world(&self) -> &SimWorld {
        &self.world
    }

    pub fn tree(&self) -> &Tree<SimWorld> {
        &self.tree
    }

    /// Ticks the guard's tree, then advances the scene by one `dt`.
    pub fn step(&mut self) -> TickRecord {
        let status = self.tree.tick(&mut self.world, self.dt);
        let now = self.tree.now_seconds();
        self.world.step(self.dt, now);

        TickRecord {
            tick: self.tree.tick_count(),
            time: now,
            status: status.as_str(),
            guard: self.world.position(GUARD),
            guard_health: self.world.health(GUARD).map(|h| h.current),
            player: self.world.position(PLAYER),
            player_health: self.world.health(PLAYER).map(|h| h.current),
            target_acquired: self.tree.blackboard().contains(keys::TARGET),
        }
    }

    /// Runs `config.ticks` steps and collects every record.
    pub fn run(config: &SimConfig) -> Vec<TickRecord> {
        let mut sim = Self::new(config);
        (0..config.ticks).map(|_| sim.step()).collect()
    }
}
