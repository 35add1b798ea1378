//! Action leaves.
//!
//! Actions resolve their target each tick (blackboard first, roster second)
//! and drive the agent by writing a desired velocity. Some of their state
//! deliberately survives [`BtNode::reset`](warden_bt::BtNode::reset):
//!
//! | leaf     | kept across reset      |
//! |----------|------------------------|
//! | `Patrol` | current waypoint index |
//! | `Attack` | last attack timestamp  |
//! | `Alert`  | last alert timestamp   |

mod alert;
mod attack;
mod chase;
mod flee;
mod patrol;

pub use alert::Alert;
pub use attack::Attack;
pub use chase::Chase;
pub use flee::Flee;
pub use patrol::Patrol;

use warden_core::{Vec2, WorldMut};

/// Velocity of magnitude `speed` pointing from `from` to `to` (zero when the
/// points coincide).
fn toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalized() * speed
}

fn stop<W: WorldMut>(world: &mut W, agent: W::Agent) {
    world.set_velocity(agent, Vec2::ZERO);
}

/// `true` while `last` is less than `cooldown` seconds before `now`.
fn on_cooldown(last: Option<f64>, cooldown: f64, now: f64) -> bool {
    last.is_some_and(|t| now - t < cooldown)
}
