//! Deadline clock: per-turn time budget and the abort threshold.

use std::time::{Duration, Instant};

use crate::error::Timeout;

/// Wall-clock budget for one decision.
///
/// `time_left()` decreases monotonically from the moment the clock is created.
/// An unlimited clock always reports [`Duration::MAX`].
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
    budget: Option<Duration>,
}

impl Clock {
    /// Start a clock with `budget` remaining.
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    /// A clock that never runs out.
    pub fn unlimited() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    /// A clock with nothing left.
    pub fn expired() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Time remaining, saturating at zero.
    pub fn time_left(&self) -> Duration {
        match self.budget {
            Some(budget) => budget.saturating_sub(self.start.elapsed()),
            None => Duration::MAX,
        }
    }

    /// Time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A [`Clock`] paired with the threshold below which work must stop.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    clock: Clock,
    threshold: Duration,
}

impl Deadline {
    /// Abort once `clock` has less than `threshold` left.
    pub fn new(clock: Clock, threshold: Duration) -> Self {
        Self { clock, threshold }
    }

    /// A deadline that is never reached.
    pub fn unlimited() -> Self {
        Self::new(Clock::unlimited(), Duration::ZERO)
    }

    /// Time remaining on the underlying clock.
    #[inline]
    pub fn time_left(&self) -> Duration {
        self.clock.time_left()
    }

    /// The abort threshold.
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// The underlying clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Whether `time_left() < threshold`.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.time_left() < self.threshold
    }

    /// `Err(Timeout)` once the deadline is reached.
    ///
    /// Every recursive search and traversal frame calls this on entry.
    #[inline]
    pub fn check(&self) -> Result<(), Timeout> {
        if self.is_expired() {
            Err(Timeout)
        } else {
            Ok(())
        }
    }
}
