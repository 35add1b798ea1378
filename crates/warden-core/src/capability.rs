//! Optional agent capabilities.
//!
//! A world exposes these per entity through the probe methods on
//! [`crate::WorldMut`]. Entities that do not support a capability simply
//! return `None` and callers skip the effect.

use crate::Vec2;

/// Entity that can be hurt by an attack.
pub trait Damageable {
    fn take_damage(&mut self, amount: f32);
}

/// Best-effort visual hooks. Both default to doing nothing.
pub trait Animatable {
    fn play_attack_animation(&mut self) {}

    fn play_alert_effect(&mut self) {}
}

/// Entity that reacts to an ally raising the alarm.
pub trait AlertListener<A> {
    fn receive_alert(&mut self, target: A, source_position: Vec2);
}

/// Fallback alert hook: the entity only understands "pursue this target".
pub trait TargetSeeker<A> {
    fn set_target(&mut self, target: A);
}
