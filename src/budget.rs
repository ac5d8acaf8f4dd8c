//! Time budget seam between the search and its caller.
//!
//! The search only asks one question: "has the budget expired?". It polls
//! this once at the top of every iteration; nothing is preempted.

use std::time::{Duration, Instant};

/// Runtime cap used by the order batching challenge the engine targets.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(600);

/// A cooperative stop condition polled by the search loop.
pub trait TimeBudget {
    /// Returns `true` once no more search iterations may start.
    fn is_expired(&self) -> bool;
}

impl<T: TimeBudget + ?Sized> TimeBudget for &T {
    fn is_expired(&self) -> bool {
        (**self).is_expired()
    }
}

/// A wall-clock deadline measured from construction.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_wavepick::{Deadline, TimeBudget};
///
/// let deadline = Deadline::new(Duration::from_secs(60));
/// assert!(!deadline.is_expired());
/// assert!(Deadline::new(Duration::ZERO).is_expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    /// Starts the clock now with the given limit.
    pub fn new(limit: Duration) -> Self {
        Self::starting_at(Instant::now(), limit)
    }

    /// Uses an externally captured start instant, e.g. when instance loading
    /// should count against the same budget.
    pub fn starting_at(start: Instant, limit: Duration) -> Self {
        Self { start, limit }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before expiry, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

impl TimeBudget for Deadline {
    fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }
}

/// A budget that never expires.
///
/// The search then stops on stagnation or on the iteration cap only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl TimeBudget for Unlimited {
    fn is_expired(&self) -> bool {
        false
    }
}
