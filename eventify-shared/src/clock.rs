use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Time source for the core components. Identity and booking ids are derived
/// from these timestamps, so implementations must be monotonically
/// non-decreasing.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Millisecond timestamp, the raw material for generated ids.
    fn timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Wall-clock implementation used by the application.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Settable clock for deterministic tests.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = now;
        }
    }

    pub fn advance(&self, duration: chrono::Duration) {
        if let Ok(mut guard) = self.now.lock() {
            *guard = *guard + duration;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
            .lock()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }
}
