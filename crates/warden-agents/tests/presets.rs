mod common;

use common::{assert_close, Arena, Body};
use warden_agents::presets::{self, Preset};
use warden_agents::BehaviorTuning;
use warden_bt::{BtStatus, Tree};
use warden_core::{keys, Health, Vec2};

use BtStatus::{Running, Success};

const GUARD: u64 = 1;
const PLAYER: u64 = 2;
const ALLY: u64 = 3;
const DT: f32 = 0.1;

fn route() -> Vec<Vec2> {
    vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]
}

fn arena() -> Arena {
    Arena::new()
        .with(GUARD, Body::at(0.0, 0.0).hostile().health(100.0, 100.0))
        .with(
            PLAYER,
            Body::at(1000.0, 0.0).primary().damageable().health(100.0, 100.0),
        )
}

fn guard_tree(preset: Preset) -> Tree<Arena> {
    let mut tree: Tree<Arena> = Tree::with_root(preset.build(route(), &BehaviorTuning::default()));
    tree.initialize(GUARD);
    tree
}

#[test]
fn grunt_patrols_chases_attacks_and_flees() {
    let mut world = arena();
    let mut tree = guard_tree(Preset::Grunt);

    // Nothing in sight: walk the route.
    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_close(world.velocity(GUARD).x, 60.0);
    assert!(!tree.blackboard().contains(keys::TARGET));

    // Player spotted: the chase preempts the patrol.
    world.move_to(PLAYER, 200.0, 0.0);
    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_close(world.velocity(GUARD).x, 120.0);
    assert_eq!(tree.blackboard().entity(keys::TARGET), Some(PLAYER));

    // Close enough: the chase concludes and the guard stops.
    world.move_to(PLAYER, 30.0, 0.0);
    assert_eq!(tree.tick(&mut world, DT), Success);
    assert_eq!(world.velocity(GUARD), Vec2::ZERO);

    // Next tick lands a hit, the one after waits for the cooldown.
    assert_eq!(tree.tick(&mut world, DT), Success);
    assert_eq!(world.body(PLAYER).damage_taken, 10.0);
    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_eq!(world.body(PLAYER).damage_taken, 10.0);

    // Badly hurt: running away takes priority over the attack.
    world.body_mut(GUARD).health = Some(Health::new(10.0, 100.0));
    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_close(world.velocity(GUARD).x, -140.0);
}

#[test]
fn sentry_alerts_allies_before_engaging() {
    let mut world = arena().with(ALLY, Body::at(100.0, 0.0).hostile().listener());
    let mut tree = guard_tree(Preset::Sentry);

    world.move_to(PLAYER, 200.0, 0.0);
    assert_eq!(tree.tick(&mut world, DT), Success);
    assert_eq!(world.body(ALLY).alerts, vec![(PLAYER, Vec2::ZERO)]);
    assert_eq!(world.body(GUARD).alert_effects, 1);

    // Alert is cooling down, so the sentry falls through to the chase.
    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_close(world.velocity(GUARD).x, 120.0);
    assert_eq!(world.body(ALLY).alerts.len(), 1);
}

#[test]
fn coward_runs_from_anything_it_sees() {
    let mut world = arena();
    let mut tree = guard_tree(Preset::Coward);

    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_close(world.velocity(GUARD).x, 60.0);

    world.move_to(PLAYER, 200.0, 0.0);
    assert_eq!(tree.tick(&mut world, DT), Running);
    assert_close(world.velocity(GUARD).x, -140.0);
}

#[test]
fn berserker_idles_without_target_and_attacks_on_cooldown() {
    let mut world = arena();
    let mut tree = guard_tree(Preset::Berserker);

    for _ in 0..5 {
        assert_eq!(tree.tick(&mut world, DT), Running);
    }
    assert_eq!(world.velocity_writes, 0);

    // Hits land at roughly t = 0.6, 1.6 and 2.6.
    world.move_to(PLAYER, 30.0, 0.0);
    for _ in 0..25 {
        assert_eq!(tree.tick(&mut world, DT), Running);
    }
    assert_eq!(world.body(PLAYER).damage_taken, 30.0);
}

#[test]
fn presets_parse_from_their_names() {
    for preset in Preset::ALL {
        assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
    }
    assert_eq!("GRUNT".parse::<Preset>(), Ok(Preset::Grunt));
    assert!("paladin".parse::<Preset>().is_err());
}

#[test]
fn preset_functions_build_unbound_trees() {
    let tuning = BehaviorTuning::default();
    let mut world = arena();

    // Without initialize every leaf is unbound and the tree does nothing.
    let mut tree: Tree<Arena> = Tree::with_root(presets::grunt(route(), &tuning));
    assert_eq!(tree.tick(&mut world, DT), BtStatus::Failure);
    assert_eq!(world.velocity_writes, 0);
}
