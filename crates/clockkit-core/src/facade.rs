//! Clock facade: current time as formatted text or as a Unix timestamp.
//!
//! Every call reads the clock once and keeps nothing afterwards. The free
//! functions run against [`SystemClock`]. Wrap another [`Clock`] in a
//! [`ClockFacade`] to pin the instant.

use std::borrow::Cow;

use tracing::instrument;

use crate::clock::{Clock, SystemClock};
use crate::error::ClockError;
use crate::format::{self, DEFAULT_PATTERN};

/// Formats instants read from an injected [`Clock`].
#[derive(Debug, Clone)]
pub struct ClockFacade<C> {
    clock: C,
    default_pattern: Cow<'static, str>,
}

impl ClockFacade<SystemClock> {
    /// Facade over the host system clock.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl Default for ClockFacade<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: Clock> ClockFacade<C> {
    /// Create a facade that reads time from `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            default_pattern: Cow::Borrowed(DEFAULT_PATTERN),
        }
    }

    /// Replace the pattern used when a call passes no format.
    ///
    /// The pattern is checked when it is first used.
    #[must_use]
    pub fn with_default_pattern(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
        self.default_pattern = pattern.into();
        self
    }

    /// The pattern used when a call passes no format.
    #[must_use]
    pub fn default_pattern(&self) -> &str {
        &self.default_pattern
    }

    /// The current local time rendered with `format`, or with the default
    /// pattern when `format` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Formatting` if the pattern is not supported.
    #[instrument(skip(self))]
    pub fn time(&self, format: Option<&str>) -> Result<String, ClockError> {
        format::render(&self.clock.now_local(), self.pattern_or_default(format))
    }

    /// The current instant as seconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        format::unix_seconds(&self.clock.now())
    }

    /// Like [`ClockFacade::time`], rendered in UTC instead of local time.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Formatting` if the pattern is not supported.
    #[instrument(skip(self))]
    pub fn utc_time(&self, format: Option<&str>) -> Result<String, ClockError> {
        format::render(&self.clock.now(), self.pattern_or_default(format))
    }

    fn pattern_or_default<'a>(&'a self, format: Option<&'a str>) -> &'a str {
        format.unwrap_or(&*self.default_pattern)
    }
}

/// The current local time as text.
///
/// With `None` the result looks like `2025-06-15 13:45:30`.
///
/// # Errors
///
/// Returns `ClockError::Formatting` if `format` contains an unsupported token.
pub fn get_time(format: Option<&str>) -> Result<String, ClockError> {
    ClockFacade::system().time(format)
}

/// The current time as floating-point seconds since the Unix epoch.
#[must_use]
pub fn get_timestamp() -> f64 {
    ClockFacade::system().timestamp()
}

/// The current UTC time as text. See [`get_time`].
///
/// # Errors
///
/// Returns `ClockError::Formatting` if `format` contains an unsupported token.
pub fn get_utc_time(format: Option<&str>) -> Result<String, ClockError> {
    ClockFacade::system().utc_time(format)
}
