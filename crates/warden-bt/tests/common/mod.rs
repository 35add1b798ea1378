#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use warden_bt::{BoxedNode, BtNode, BtStatus, WorldBlackboard};
use warden_core::{TickContext, Vec2, WorldMut, WorldView};

#[derive(Debug, Default)]
pub struct TestWorld;

impl WorldView for TestWorld {
    type Agent = u64;

    fn position(&self, _agent: u64) -> Option<Vec2> {
        Some(Vec2::ZERO)
    }
}

impl WorldMut for TestWorld {
    fn set_velocity(&mut self, _agent: u64, _velocity: Vec2) {}
}

pub type Log = Rc<RefCell<Vec<String>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(log: &Log, prefix: &str) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|e| e.starts_with(prefix))
        .cloned()
        .collect()
}

pub fn ctx(tick: u64) -> TickContext {
    TickContext {
        tick,
        dt_seconds: 0.1,
        now_seconds: tick as f64 * 0.1,
    }
}

/// Leaf that replays a fixed list of statuses (repeating the last one) and
/// records every hook invocation.
pub struct Scripted {
    name: &'static str,
    script: Vec<BtStatus>,
    next: usize,
    log: Log,
}

impl Scripted {
    pub fn new(name: &'static str, script: &[BtStatus], log: &Log) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            name,
            script: script.to_vec(),
            next: 0,
            log: log.clone(),
        }
    }

    pub fn boxed(name: &'static str, script: &[BtStatus], log: &Log) -> BoxedNode<TestWorld> {
        Box::new(Self::new(name, script, log))
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{event}:{}", self.name));
    }
}

impl BtNode<TestWorld> for Scripted {
    fn tick(
        &mut self,
        _ctx: &TickContext,
        _world: &mut TestWorld,
        _blackboard: &mut WorldBlackboard<TestWorld>,
    ) -> BtStatus {
        self.record("tick");
        let idx = self.next.min(self.script.len() - 1);
        self.next += 1;
        self.script[idx]
    }

    fn initialize(&mut self, _agent: u64) {
        self.record("init");
    }

    fn reset(&mut self) {
        self.record("reset");
    }

    fn enter(&mut self) {
        self.record("enter");
    }

    fn exit(&mut self) {
        self.record("exit");
    }
}
