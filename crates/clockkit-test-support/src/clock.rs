//! Test clocks — deterministic `Clock` implementations for tests.

use std::sync::Mutex;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use clockkit_core::clock::Clock;

/// A clock that always returns a fixed point in time.
///
/// The offset carried by the wrapped value acts as the local timezone.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// A fixed clock whose local timezone is UTC.
    #[must_use]
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self(instant.fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// A clock that moves forward by `step` on every read, starting at `start`.
/// Local reads use the offset of `start`.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<DateTime<FixedOffset>>,
    step: Duration,
}

impl SteppingClock {
    /// Create a stepping clock.
    #[must_use]
    pub fn new(start: DateTime<FixedOffset>, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// Returns the current reading and advances the clock.
    fn tick(&self) -> DateTime<FixedOffset> {
        let mut next = self.next.lock().unwrap();
        let current = *next;
        *next = current + self.step;
        current
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        self.tick().with_timezone(&Utc)
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        self.tick()
    }
}
