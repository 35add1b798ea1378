//! Target resolution shared by the action leaves.

use warden_core::{keys, Blackboard, Roster, Vec2, WorldView};

/// Blackboard target if it is still valid, otherwise the roster's primary
/// target. Returns the entity together with its current position.
pub fn resolve_target<W>(world: &W, blackboard: &Blackboard<W::Agent>) -> Option<(W::Agent, Vec2)>
where
    W: Roster,
{
    if let Some(target) = blackboard.entity(keys::TARGET) {
        if let Some(pos) = world.position(target) {
            return Some((target, pos));
        }
    }

    let fallback = world.primary_target()?;
    world.position(fallback).map(|pos| (fallback, pos))
}

/// Blackboard target only, with no roster fallback.
pub fn blackboard_target<W>(world: &W, blackboard: &Blackboard<W::Agent>) -> Option<(W::Agent, Vec2)>
where
    W: WorldView,
{
    let target = blackboard.entity(keys::TARGET)?;
    world.position(target).map(|pos| (target, pos))
}
