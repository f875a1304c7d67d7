//! Deterministic timer scheduling
//!
//! The toolkit has no frame loop; deferred callbacks (toast fade-outs and
//! removals) are queued here and released by advancing a logical clock.
//! Timers scheduled from inside a firing callback land inside the same
//! `advance` window when their deadline falls within it.

use tracing::trace;

/// Handle to a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

type Callback<Ctx> = Box<dyn FnOnce(&mut Ctx) + Send>;

struct Timer<Ctx> {
    id: u64,
    fire_at: u64,
    callback: Callback<Ctx>,
}

/// One-shot timer queue over a logical millisecond clock
pub struct Scheduler<Ctx> {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer<Ctx>>,
}

impl<Ctx> Default for Scheduler<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> Scheduler<Ctx> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Current logical time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Queue a callback to fire `delay_ms` from now
    pub fn schedule<F>(&mut self, delay_ms: u64, callback: F) -> TimerId
    where
        F: FnOnce(&mut Ctx) + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        let fire_at = self.now_ms + delay_ms;
        trace!(target: "opal_layout::scheduler", id, fire_at, "schedule timer");
        self.timers.push(Timer {
            id,
            fire_at,
            callback: Box::new(callback),
        });
        TimerId(id)
    }

    /// Cancel a pending timer; returns false if it already fired
    pub fn cancel(&mut self, timer: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != timer.0);
        before != self.timers.len()
    }

    /// Remove and return the next callback due at or before `target_ms`,
    /// advancing the clock to its deadline
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, target_ms: u64) -> Option<Callback<Ctx>> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.fire_at <= target_ms)
            .min_by_key(|(_, t)| (t.fire_at, t.id))
            .map(|(i, _)| i)?;
        let timer = self.timers.swap_remove(index);
        self.now_ms = self.now_ms.max(timer.fire_at);
        Some(timer.callback)
    }

    /// Settle the clock at `target_ms` once every due timer has fired
    pub fn finish(&mut self, target_ms: u64) {
        self.now_ms = self.now_ms.max(target_ms);
    }
}
