//! Clock-driven debouncing.
//!
//! The debouncer never sleeps or spawns timers: callers pass the current
//! instant to [`Debouncer::call`] on every event and to [`Debouncer::poll`]
//! from their own loop.

use std::time::{Duration, Instant};

/// Collapses bursts of calls into one.
///
/// In trailing mode (the default) the action fires once `wait` has passed
/// since the last call. In immediate mode it fires on the first call of a
/// burst and stays quiet until the burst is over.
#[derive(Clone, Debug)]
pub struct Debouncer {
    wait: Duration,
    immediate: bool,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            immediate: false,
            deadline: None,
        }
    }

    /// Fires on the leading edge instead of the trailing one.
    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    /// Registers a call at `now`. Returns `true` if the action should run right away.
    pub fn call(&mut self, now: Instant) -> bool {
        let idle = self.deadline.is_none();
        self.deadline = Some(now + self.wait);
        self.immediate && idle
    }

    /// Returns `true` once the quiet period has passed and the action should run.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                !self.immediate
            }
            _ => false,
        }
    }

    /// Whether a burst is still in progress.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending call.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_fires_once_after_last_call() {
        let start = Instant::now();
        let ms = Duration::from_millis;
        let mut debouncer = Debouncer::new(ms(100));

        assert!(!debouncer.call(start));
        assert!(!debouncer.call(start + ms(50)));
        assert!(!debouncer.poll(start + ms(120)));
        assert!(debouncer.poll(start + ms(150)));
        assert!(!debouncer.poll(start + ms(300)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn immediate_fires_on_leading_edge_only() {
        let start = Instant::now();
        let ms = Duration::from_millis;
        let mut debouncer = Debouncer::new(ms(100)).immediate(true);

        assert!(debouncer.call(start));
        assert!(!debouncer.call(start + ms(10)));
        assert!(!debouncer.poll(start + ms(110)));
        assert!(debouncer.call(start + ms(200)));
    }
}
