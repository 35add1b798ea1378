/// Per-tick timing handed to every node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Number of ticks the owning tree has executed before this one.
    pub tick: u64,
    pub dt_seconds: f32,
    /// Clock reading for this tick; cooldowns compare against it.
    pub now_seconds: f64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, now_seconds: f64) -> Self {
        Self {
            tick,
            dt_seconds,
            now_seconds,
        }
    }
}
