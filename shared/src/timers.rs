//! Fire-once timers on a caller-supplied millisecond clock.
//!
//! Nothing here reads the system time: the owner passes `now` in, so the queue
//! behaves the same under `requestAnimationFrame` and in tests.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    EnableStop,
    ForceStop,
    RevealResult,
    ResetControls,
}

#[derive(Debug, Clone)]
struct ScheduledTimer {
    id: TimerId,
    kind: TimerKind,
    due_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: Vec<ScheduledTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TimerKind, due_at: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTimer { id, kind, due_at });
        id
    }

    /// Schedules `delay_ms` after `now`. The due time saturates instead of
    /// wrapping, so a huge delay just never comes due.
    pub fn schedule_in(&mut self, kind: TimerKind, now: u64, delay_ms: u64) -> TimerId {
        self.schedule(kind, now.saturating_add(delay_ms))
    }

    /// Returns true if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    /// Removes every timer due at or before `now`, earliest first. Timers due
    /// at the same instant come out in scheduling order.
    pub fn take_due(&mut self, now: u64) -> Vec<(TimerId, TimerKind)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|timer| timer.due_at <= now);
        self.pending = pending;
        due.sort_by_key(|timer| (timer.due_at, timer.id.0));
        due.into_iter().map(|timer| (timer.id, timer.kind)).collect()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|timer| timer.due_at).min()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
