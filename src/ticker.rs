use std::time::{Duration, Instant};

/// Schedules the game's periodic tick.
///
/// A deadline is set one period out the first time the ticker is consulted
/// and stays put until the tick fires or is called off, so input events that
/// arrive in between don't delay it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker { period, next: None }
    }

    /// Return how long to wait from `now` until the next tick is due,
    /// scheduling a tick if none is pending.  A zero result means the tick is
    /// due.
    pub(crate) fn time_left(&mut self, now: Instant) -> Duration {
        let when = *self.next.get_or_insert(now + self.period);
        when.saturating_duration_since(now)
    }

    /// Drop the pending tick, if any.  Called once a tick has been handled,
    /// and while the game isn't running so that it gets a full period after
    /// it resumes.
    pub(crate) fn cancel(&mut self) {
        self.next = None;
    }
}
