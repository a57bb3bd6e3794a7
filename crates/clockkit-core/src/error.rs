//! Error types.

use thiserror::Error;

/// Errors returned by the clock facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The pattern contains a token the formatter does not support, or the
    /// formatter could not render it for the given instant.
    #[error("formatting error: unsupported pattern '{pattern}'")]
    Formatting {
        /// The pattern as supplied by the caller.
        pattern: String,
    },
}

impl ClockError {
    pub(crate) fn formatting(pattern: &str) -> Self {
        Self::Formatting {
            pattern: pattern.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_error_message_names_pattern() {
        let err = ClockError::formatting("%Q");
        assert_eq!(
            err.to_string(),
            "formatting error: unsupported pattern '%Q'"
        );
    }
}
