//! Pattern validation and rendering on top of chrono's strftime formatter.

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use tracing::{debug, warn};

use crate::error::ClockError;

/// Pattern applied when the caller does not supply one: `YYYY-MM-DD HH:MM:SS`.
pub const DEFAULT_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

fn parse(pattern: &str) -> Result<Vec<Item<'_>>, ClockError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        warn!(pattern, "rejected format pattern");
        return Err(ClockError::formatting(pattern));
    }
    Ok(items)
}

/// Checks that every token in `pattern` is understood by the formatter.
///
/// # Errors
///
/// Returns `ClockError::Formatting` if the pattern contains an unsupported
/// token.
pub fn validate_pattern(pattern: &str) -> Result<(), ClockError> {
    parse(pattern).map(|_| ())
}

/// Renders `instant` with a strftime-style `pattern`.
///
/// The empty pattern renders as the empty string.
///
/// # Errors
///
/// Returns `ClockError::Formatting` if the pattern contains an unsupported
/// token or cannot be rendered for this instant.
pub fn render<Tz>(instant: &DateTime<Tz>, pattern: &str) -> Result<String, ClockError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items = parse(pattern)?;

    let mut out = String::with_capacity(pattern.len() * 2);
    write!(out, "{}", instant.format_with_items(items.iter())).map_err(|_| {
        warn!(pattern, "formatter failed to render pattern");
        ClockError::formatting(pattern)
    })?;

    debug!(pattern, rendered = %out, "rendered instant");
    Ok(out)
}

/// Seconds since the Unix epoch, including the sub-second part.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn unix_seconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9
}
