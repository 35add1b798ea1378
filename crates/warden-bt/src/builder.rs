//! Shorthands for assembling trees.
//!
//! `sequence(vec![...])` instead of `Box::new(Sequence::new(vec![...]))`.

use warden_core::{Blackboard, TickContext, WorldMut};

use crate::{BoxedNode, Condition, Inverter, ReactiveSelector, Repeater, Selector, Sequence};

#[inline]
pub fn sequence<W: WorldMut + 'static>(children: Vec<BoxedNode<W>>) -> BoxedNode<W> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<W: WorldMut + 'static>(children: Vec<BoxedNode<W>>) -> BoxedNode<W> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn reactive_selector<W: WorldMut + 'static>(children: Vec<BoxedNode<W>>) -> BoxedNode<W> {
    Box::new(ReactiveSelector::new(children))
}

#[inline]
pub fn inverter<W: WorldMut + 'static>(child: BoxedNode<W>) -> BoxedNode<W> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn repeat<W: WorldMut + 'static>(child: BoxedNode<W>, times: u32) -> BoxedNode<W> {
    Box::new(Repeater::times(child, times))
}

#[inline]
pub fn repeat_forever<W: WorldMut + 'static>(child: BoxedNode<W>) -> BoxedNode<W> {
    Box::new(Repeater::forever(child))
}

#[inline]
pub fn condition<W, F>(cond: F) -> BoxedNode<W>
where
    W: WorldMut + 'static,
    F: FnMut(&TickContext, W::Agent, &W, &Blackboard<W::Agent>) -> bool + 'static,
{
    Box::new(Condition::new(cond))
}
