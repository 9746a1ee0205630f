//! Monotonic clock abstraction
//!
//! Timestamps are only meaningful as relative durations within one
//! process run; there is no wall-clock guarantee.

use std::time::Instant;

/// Source of monotonic millisecond timestamps
pub trait MonotonicClock: Send + Sync {
    /// Milliseconds since an arbitrary monotonic epoch
    fn now_ms(&self) -> u64;
}

/// Default clock backed by `std::time::Instant`
///
/// The epoch is the moment the clock was constructed.
#[derive(Debug)]
pub struct SystemMonotonicClock {
    origin: Instant,
}

impl SystemMonotonicClock {
    /// Create a clock anchored at the current instant
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemMonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemMonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
