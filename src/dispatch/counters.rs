use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome counters shared by every in-flight request of one run.
///
/// Each completion increments its outcome counter strictly before the
/// total counter, so the task that advances the total to `expected` reads
/// a snapshot that already contains every outcome.
#[derive(Debug)]
pub struct DispatchCounters {
    expected: u64,
    total: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
}

/// Final counts for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSummary {
    pub total: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl DispatchCounters {
    #[must_use]
    pub fn new(expected: u64) -> Self {
        Self {
            expected,
            total: AtomicU64::new(0),
            succeeded: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Counts one success. Returns true for exactly the call that counted
    /// the final outstanding request.
    pub fn record_success(&self) -> bool {
        self.succeeded.fetch_add(1, Ordering::SeqCst);
        self.count_completion()
    }

    /// Counts one failure. Same completion contract as `record_success`.
    pub fn record_failure(&self) -> bool {
        self.failed.fetch_add(1, Ordering::SeqCst);
        self.count_completion()
    }

    // fetch_add hands every caller a distinct prior value, so only one
    // caller can observe the transition to `expected`.
    fn count_completion(&self) -> bool {
        let prior = self.total.fetch_add(1, Ordering::SeqCst);
        prior.saturating_add(1) == self.expected
    }

    #[must_use]
    pub fn snapshot(&self) -> DispatchSummary {
        DispatchSummary {
            total: self.total.load(Ordering::SeqCst),
            succeeded: self.succeeded.load(Ordering::SeqCst),
            failed: self.failed.load(Ordering::SeqCst),
        }
    }
}
