//! Shape assertions for rendered time strings.

/// Returns `true` if `value` has the layout described by `shape`.
///
/// `D` in the shape matches any ASCII digit. Every other character must
/// appear verbatim. `matches_shape("07:03", "DD:DD")` holds.
#[must_use]
pub fn matches_shape(value: &str, shape: &str) -> bool {
    value.chars().count() == shape.chars().count()
        && value.chars().zip(shape.chars()).all(|(v, s)| match s {
            'D' => v.is_ascii_digit(),
            _ => v == s,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_shape_accepts_digits_in_place() {
        assert!(matches_shape("2025-06-15 13:45:30", "DDDD-DD-DD DD:DD:DD"));
    }

    #[test]
    fn test_matches_shape_rejects_wrong_length_or_separator() {
        assert!(!matches_shape("2025-06-15", "DDDD-DD-DD DD:DD:DD"));
        assert!(!matches_shape("2025/06/15", "DDDD-DD-DD"));
        assert!(!matches_shape("2025-0a-15", "DDDD-DD-DD"));
    }
}
