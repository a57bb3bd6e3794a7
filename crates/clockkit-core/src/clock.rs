//! Clock abstraction for determinism.

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Abstraction over system time so formatting can run against a known instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant in the clock's local timezone.
    ///
    /// The default converts [`Clock::now`] using the host's `Local` zone.
    fn now_local(&self) -> DateTime<FixedOffset> {
        self.now().with_timezone(&Local).fixed_offset()
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn now_local(&self) -> DateTime<FixedOffset> {
        (**self).now_local()
    }
}
