//! Shared test clocks and helpers for clockkit.

mod clock;
mod shape;

pub use clock::{FixedClock, SteppingClock};
pub use shape::matches_shape;
