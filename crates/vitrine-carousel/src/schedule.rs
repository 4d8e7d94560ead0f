//! Auto-scroll schedule
//!
//! A single deadline per carousel. Timestamps are injected (milliseconds, as
//! returned by `Date.now()`), so the schedule is deterministic under test and
//! the browser binding only mirrors [`AutoScroll::deadline`] with one timeout.

/// Repeating auto-scroll deadline
#[derive(Clone, Debug, PartialEq)]
pub struct AutoScroll {
    /// Interval between advances
    period_ms: f64,
    /// Next advance, if running
    deadline_ms: Option<f64>,
}

impl AutoScroll {
    /// Create a stopped schedule
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            deadline_ms: None,
        }
    }

    /// Interval between advances
    #[inline]
    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Next advance time, if running
    #[inline]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// True while a deadline is pending
    #[inline]
    pub fn is_running(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Schedule the next advance one period from `now_ms`, replacing any pending one
    pub fn restart(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.period_ms);
    }

    /// Stop the schedule
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    /// Consume the deadline if it has passed. Fires at most once per call.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let deadline = match self.deadline_ms {
            Some(d) if now_ms >= d => d,
            _ => return false,
        };
        let next = deadline + self.period_ms;
        // Missed periods are dropped rather than replayed
        self.deadline_ms = Some(if next > now_ms { next } else { now_ms + self.period_ms });
        true
    }
}
