use std::time::Duration;

/// A single pending tick, driven by polling with the current frame time.
#[derive(Debug, Default)]
pub struct TickTimer {
    deadline: Option<Duration>,
    interval: Duration,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any pending tick with one due `after` from `now`.
    pub fn schedule(&mut self, now: Duration, after: Duration) {
        self.interval = after;
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.deadline.map(|_| self.interval)
    }

    /// Returns true at most once per call when the deadline has passed, and
    /// re-arms one interval after `now`. Missed ticks are not replayed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
