use std::time::{Duration, Instant};

/// A cancellable repeating timer.
///
/// The timer is either active or cancelled; there is exactly one flag. While
/// active it is due immediately after [`start`](Self::start) and then once per
/// `delay` after each [`schedule`](Self::schedule).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Animation {
    delay: Duration,
    active: bool,
    next_due: Option<Instant>,
}

impl Animation {
    pub(super) fn new(delay: Duration) -> Self {
        Self {
            delay,
            active: false,
            next_due: None,
        }
    }

    pub(super) fn delay(&self) -> Duration {
        self.delay
    }

    pub(super) fn is_active(&self) -> bool {
        self.active
    }

    /// Activates the timer with the first tick due at once.
    ///
    /// Starting an already active timer keeps its schedule.
    pub(super) fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.next_due = None;
        }
    }

    pub(super) fn cancel(&mut self) {
        self.active = false;
        self.next_due = None;
    }

    pub(super) fn is_due(&self, now: Instant) -> bool {
        self.active && self.next_due.is_none_or(|due| now >= due)
    }

    /// Schedules the next tick one delay after `now`.
    pub(super) fn schedule(&mut self, now: Instant) {
        if self.active {
            self.next_due = Some(now + self.delay);
        }
    }

    pub(super) fn next_due(&self) -> Option<Instant> {
        self.next_due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_immediate() {
        let mut animation = Animation::new(Duration::from_millis(100));
        let now = Instant::now();

        assert!(!animation.is_due(now));
        animation.start();
        assert!(animation.is_due(now));
    }

    #[test]
    fn scheduled_tick_waits_one_delay() {
        let delay = Duration::from_millis(100);
        let mut animation = Animation::new(delay);
        let now = Instant::now();

        animation.start();
        animation.schedule(now);

        assert!(!animation.is_due(now + delay / 2));
        assert!(animation.is_due(now + delay));
        assert_eq!(animation.next_due(), Some(now + delay));
    }

    #[test]
    fn cancel_clears_schedule() {
        let mut animation = Animation::new(Duration::from_millis(100));
        let now = Instant::now();

        animation.start();
        animation.schedule(now);
        animation.cancel();

        assert!(!animation.is_active());
        assert!(!animation.is_due(now + Duration::from_secs(1)));
        assert_eq!(animation.next_due(), None);

        animation.schedule(now);
        assert_eq!(animation.next_due(), None);
    }
}
