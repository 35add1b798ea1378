//! Complete trees for common guard archetypes.
//!
//! Every preset except the berserker is rooted in a
//! [`ReactiveSelector`](warden_bt::ReactiveSelector), so survival and combat
//! branches are checked every tick and can cut a running patrol short.
//!
//! ```text
//! sentry()
//!   └─ ReactiveSelector
//!       ├─ flee_when_low_health
//!       ├─ alert_allies
//!       ├─ engage
//!       └─ patrol_route
//! ```

use std::fmt;
use std::str::FromStr;

use warden_bt::builder::{reactive_selector, repeat_forever, sequence};
use warden_bt::BoxedNode;
use warden_core::{Roster, Vec2, WorldMut};

use crate::actions::Flee;
use crate::conditions::TargetVisible;
use crate::subtrees;
use crate::tuning::BehaviorTuning;

pub type BehaviorTree<W> = BoxedNode<W>;

/// Melee guard: flee when hurt, fight what it sees, patrol otherwise.
pub fn grunt<W>(waypoints: Vec<Vec2>, tuning: &BehaviorTuning) -> BehaviorTree<W>
where
    W: WorldMut + Roster + 'static,
{
    reactive_selector(vec![
        subtrees::flee_when_low_health(tuning),
        subtrees::engage(tuning),
        subtrees::patrol_route(waypoints, tuning),
    ])
}

/// Grunt that first raises the alarm for allies around it.
pub fn sentry<W>(waypoints: Vec<Vec2>, tuning: &BehaviorTuning) -> BehaviorTree<W>
where
    W: WorldMut + Roster + 'static,
{
    reactive_selector(vec![
        subtrees::flee_when_low_health(tuning),
        subtrees::alert_allies(tuning),
        subtrees::engage(tuning),
        subtrees::patrol_route(waypoints, tuning),
    ])
}

/// Never fights: runs from anything it sees, regardless of health.
pub fn coward<W>(waypoints: Vec<Vec2>, tuning: &BehaviorTuning) -> BehaviorTree<W>
where
    W: WorldMut + Roster + 'static,
{
    reactive_selector(vec![
        sequence(vec![
            Box::new(TargetVisible::from_tuning(&tuning.perception)),
            Box::new(Flee::from_tuning(&tuning.flee)),
        ]),
        subtrees::patrol_route(waypoints, tuning),
    ])
}

/// Engages forever and never flees. The route is ignored.
pub fn berserker<W>(_waypoints: Vec<Vec2>, tuning: &BehaviorTuning) -> BehaviorTree<W>
where
    W: WorldMut + Roster + 'static,
{
    repeat_forever(subtrees::engage(tuning))
}

/// Preset selector for callers that pick a tree by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Grunt,
    Sentry,
    Coward,
    Berserker,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Grunt,
        Preset::Sentry,
        Preset::Coward,
        Preset::Berserker,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Grunt => "grunt",
            Preset::Sentry => "sentry",
            Preset::Coward => "coward",
            Preset::Berserker => "berserker",
        }
    }

    pub fn build<W>(self, waypoints: Vec<Vec2>, tuning: &BehaviorTuning) -> BehaviorTree<W>
    where
        W: WorldMut + Roster + 'static,
    {
        match self {
            Preset::Grunt => grunt(waypoints, tuning),
            Preset::Sentry => sentry(waypoints, tuning),
            Preset::Coward => coward(waypoints, tuning),
            Preset::Berserker => berserker(waypoints, tuning),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset `{s}` (expected one of: {})", known.join(", "))
            })
    }
}
