//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Format a value as a left-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// The value padded with spaces on the right, or unchanged if already wider
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("10.0.0.1", 14), "10.0.0.1      ");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 4), "test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("255.255.255.255", 14), "255.255.255.255");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "42    ");
    }
}
