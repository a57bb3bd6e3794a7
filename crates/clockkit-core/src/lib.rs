//! Clockkit Core — the current time as formatted text or a Unix timestamp.
//!
//! Three entry points read the host clock: [`get_time`], [`get_utc_time`]
//! and [`get_timestamp`]. [`ClockFacade`] exposes the same operations over an
//! injected [`Clock`], so an instant can be pinned in tests.

pub mod clock;
pub mod error;
pub mod facade;
pub mod format;

pub use clock::{Clock, SystemClock};
pub use error::ClockError;
pub use facade::{ClockFacade, get_time, get_timestamp, get_utc_time};
pub use format::DEFAULT_PATTERN;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
