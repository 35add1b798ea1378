//! Small reusable subtrees: one condition guarding one behavior.
//!
//! Names follow `action_when_condition()` where there is a guard. Each
//! function returns a fresh, unbound subtree; binding happens when the tree
//! that owns it is initialized.

use warden_bt::builder::{selector, sequence};
use warden_bt::BoxedNode;
use warden_core::{Roster, Vec2, WorldMut};

use crate::actions::{Alert, Attack, Chase, Flee, Patrol};
use crate::conditions::{InRange, LowHealth, TargetVisible};
use crate::tuning::BehaviorTuning;

// ============================================================================
// Survival
// ============================================================================

/// Run from the target while health is at or below `flee.health_threshold`.
pub fn flee_when_low_health<W>(tuning: &BehaviorTuning) -> BoxedNode<W>
where
    W: WorldMut + Roster + 'static,
{
    sequence(vec![
        Box::new(LowHealth::from_tuning(&tuning.flee)),
        Box::new(Flee::from_tuning(&tuning.flee)),
    ])
}

// ============================================================================
// Combat
// ============================================================================

/// Hit the blackboard target when it is within `attack.range`.
///
/// Keeps running through the attack cooldown as long as the target stays in
/// range.
pub fn attack_when_in_range<W>(tuning: &BehaviorTuning) -> BoxedNode<W>
where
    W: WorldMut + Roster + 'static,
{
    sequence(vec![
        Box::new(InRange::from_tuning(&tuning.attack)),
        Box::new(Attack::from_tuning(&tuning.attack)),
    ])
}

/// Chase the target once it has been seen.
pub fn chase_visible_target<W>(tuning: &BehaviorTuning) -> BoxedNode<W>
where
    W: WorldMut + Roster + 'static,
{
    sequence(vec![
        Box::new(TargetVisible::from_tuning(&tuning.perception)),
        Box::new(Chase::from_tuning(&tuning.chase)),
    ])
}

/// See the target, then attack it if close enough or close in otherwise.
///
/// ```text
/// Sequence
///   ├─ TargetVisible
///   └─ Selector
///       ├─ attack_when_in_range
///       └─ Chase
/// ```
pub fn engage<W>(tuning: &BehaviorTuning) -> BoxedNode<W>
where
    W: WorldMut + Roster + 'static,
{
    sequence(vec![
        Box::new(TargetVisible::from_tuning(&tuning.perception)),
        selector(vec![
            attack_when_in_range(tuning),
            Box::new(Chase::from_tuning(&tuning.chase)),
        ]),
    ])
}

/// Call nearby allies on a visible target. Fails while the alert cools down.
pub fn alert_allies<W>(tuning: &BehaviorTuning) -> BoxedNode<W>
where
    W: WorldMut + Roster + 'static,
{
    sequence(vec![
        Box::new(TargetVisible::from_tuning(&tuning.perception)),
        Box::new(Alert::from_tuning(&tuning.alert)),
    ])
}

// ============================================================================
// Movement
// ============================================================================

pub fn patrol_route<W>(waypoints: Vec<Vec2>, tuning: &BehaviorTuning) -> BoxedNode<W>
where
    W: WorldMut + 'static,
{
    Box::new(Patrol::from_tuning(waypoints, &tuning.patrol))
}
