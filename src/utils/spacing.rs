//! Spacing string parsing
//!
//! Catalog spacing is free text: "12", "12-18", "6 to 8 inches", "18\"".
//! The first integer present is the primary (smallest) spacing.

/// Parse the primary spacing value in inches
///
/// Returns None when the string has no digits.
pub fn parse_spacing_inches(raw: &str) -> Option<u32> {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }

    // Saturate absurd values rather than dropping them
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(parse_spacing_inches("12"), Some(12));
        assert_eq!(parse_spacing_inches("18\""), Some(18));
    }

    #[test]
    fn test_range_takes_first() {
        assert_eq!(parse_spacing_inches("12-18"), Some(12));
        assert_eq!(parse_spacing_inches("6 to 8 inches"), Some(6));
        assert_eq!(parse_spacing_inches("about 24 - 36 in"), Some(24));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_spacing_inches(""), None);
        assert_eq!(parse_spacing_inches("wide"), None);
    }

    #[test]
    fn test_overflow_saturates() {
        assert_eq!(parse_spacing_inches("99999999999999"), Some(u32::MAX));
    }
}
