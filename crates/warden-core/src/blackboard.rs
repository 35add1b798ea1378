use std::collections::BTreeMap;

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Well-known keys written by the stock condition / action leaves.
pub mod keys {
    /// Entity currently being pursued (`BbValue::Entity`).
    pub const TARGET: &str = "target";
    /// Where the target was last seen (`BbValue::Position`).
    pub const LAST_KNOWN_TARGET_POSITION: &str = "last_known_target_position";
    /// Set on the alerting agent's own blackboard once `Alert` has reached
    /// at least one ally (`BbValue::Flag`).
    pub const ALERTED: &str = "alerted";
}

/// The value kinds a blackboard can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BbValue<E> {
    Entity(E),
    Float(f32),
    Flag(bool),
    Position(Vec2),
}

/// Shared key/value context for one tree instance.
///
/// Keys are created lazily by whichever node writes first. Every read is
/// optional: a missing key, or a key holding a different kind of value than
/// the typed accessor asks for, reads as "no data".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Blackboard<E> {
    values: BTreeMap<String, BbValue<E>>,
}

impl<E> Default for Blackboard<E> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<E: Copy> Blackboard<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: BbValue<E>) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<BbValue<E>> {
        self.values.get(key).copied()
    }

    pub fn remove(&mut self, key: &str) -> Option<BbValue<E>> {
        self.values.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn set_entity(&mut self, key: impl Into<String>, entity: E) {
        self.set(key, BbValue::Entity(entity));
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.set(key, BbValue::Float(value));
    }

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, BbValue::Flag(value));
    }

    pub fn set_position(&mut self, key: impl Into<String>, position: Vec2) {
        self.set(key, BbValue::Position(position));
    }

    pub fn entity(&self, key: &str) -> Option<E> {
        match self.values.get(key)? {
            BbValue::Entity(e) => Some(*e),
            _ => None,
        }
    }

    pub fn float(&self, key: &str) -> Option<f32> {
        match self.values.get(key)? {
            BbValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.values.get(key)? {
            BbValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    pub fn position(&self, key: &str) -> Option<Vec2> {
        match self.values.get(key)? {
            BbValue::Position(p) => Some(*p),
            _ => None,
        }
    }
}
