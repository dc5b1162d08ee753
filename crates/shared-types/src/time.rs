//! # Clock Port
//!
//! Subsystems never call `Utc::now()` directly; they read a [`TimeSource`].

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Wall-clock instant used across the ledger.
pub type Timestamp = DateTime<Utc>;

/// Abstract clock for deterministic testing.
pub trait TimeSource: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
}

/// Default time source using system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests.
#[derive(Debug)]
pub struct FixedTimeSource {
    current: Mutex<DateTime<Utc>>,
}

impl FixedTimeSource {
    /// Clock pinned at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
