//! Last-value-wins debouncing of rapidly changing input.
//!
//! The debouncer is a two-state machine:
//!
//! ```text
//!            push(v, now)                 poll(now >= deadline)
//!   Idle ─────────────────▶ Pending ─────────────────────────────▶ Idle (emit v)
//!                           │   ▲
//!                           └───┘ push(v', now): replace value, deadline = now + delay
//! ```
//!
//! Time is passed in rather than read from the clock, so the event loop decides
//! what "now" is and tests can drive it with a logical clock. The pending
//! deadline doubles as the cancellable timer handle: the event loop sleeps
//! until [`Debouncer::deadline`] and the sleep is simply re-armed whenever the
//! deadline moves.

use std::time::{Duration, Instant};

/// Current state of a [`Debouncer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState<T> {
    Idle,
    Pending { value: T, deadline: Instant },
}

/// Delays a value until it has been stable for the full delay.
///
/// # Examples
///
/// ```
/// use spacex_explorer::app::Debouncer;
/// use std::time::{Duration, Instant};
///
/// let t0 = Instant::now();
/// let mut search = Debouncer::new(Duration::from_millis(300));
///
/// search.push("a", t0);
/// search.push("ab", t0 + Duration::from_millis(50));
///
/// assert_eq!(search.poll(t0 + Duration::from_millis(349)), None);
/// assert_eq!(search.poll(t0 + Duration::from_millis(350)), Some("ab"));
/// assert_eq!(search.poll(t0 + Duration::from_millis(900)), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    state: DebounceState<T>,
}

impl<T> Debouncer<T> {
    /// Creates an idle debouncer.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    /// Records a new input, superseding any pending one and restarting the delay.
    pub fn push(&mut self, value: T, now: Instant) {
        let deadline = now + self.delay;
        tracing::trace!(delay_ms = self.delay.as_millis(), "debounce timer restarted");
        self.state = DebounceState::Pending { value, deadline };
    }

    /// Emits the pending value once its deadline has passed.
    ///
    /// Returns `None` while idle or before the deadline.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.state {
            DebounceState::Pending { deadline, .. } if now >= *deadline => {
                match std::mem::replace(&mut self.state, DebounceState::Idle) {
                    DebounceState::Pending { value, .. } => Some(value),
                    DebounceState::Idle => None,
                }
            }
            _ => None,
        }
    }

    /// Drops any pending value without emitting it.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            tracing::trace!("debounce timer cancelled");
        }
        self.state = DebounceState::Idle;
    }

    /// Deadline of the pending value, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Pending { deadline, .. } => Some(*deadline),
            DebounceState::Idle => None,
        }
    }

    /// Returns `true` while a value is waiting for its deadline.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    /// Configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DebounceState<T> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn only_the_settled_value_is_emitted() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let mut emitted = Vec::new();

        debouncer.push("a", t0);
        debouncer.push("ab", t0 + ms(50));

        // Walk a logical clock in 10ms steps well past the deadline.
        for step in 0..=100 {
            let now = t0 + ms(step * 10);
            if let Some(value) = debouncer.poll(now) {
                emitted.push((value, now - t0));
            }
        }

        assert_eq!(emitted, vec![("ab", ms(350))]);
    }

    #[test]
    fn each_push_restarts_the_delay() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.push(1, t0);
        assert_eq!(debouncer.deadline(), Some(t0 + DELAY));

        debouncer.push(2, t0 + ms(299));
        assert_eq!(debouncer.poll(t0 + ms(300)), None);
        assert_eq!(debouncer.deadline(), Some(t0 + ms(599)));
        assert_eq!(debouncer.poll(t0 + ms(599)), Some(2));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancel_suppresses_emission() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.push("pending", t0);
        debouncer.cancel();

        assert_eq!(debouncer.state(), &DebounceState::Idle);
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.poll(t0 + ms(1_000)), None);
    }

    #[test]
    fn idle_poll_is_a_no_op() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        assert_eq!(debouncer.poll(Instant::now()), None);
        assert_eq!(debouncer.delay(), DELAY);
    }
}
