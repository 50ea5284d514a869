//! Pattern analysis section - detects sequential and repeated character runs.

use super::SectionResult;

/// Length of the sliding window used by both checks.
const RUN_LENGTH: usize = 3;

/// Checks for three consecutive characters whose code points step by +1 or -1.
///
/// Comparison is case-sensitive, so "abc" and "CBA" match but "aBc" does not.
pub fn sequential_chars_section(password: &str) -> SectionResult {
    let chars: Vec<u32> = password.chars().map(u32::from).collect();

    let found = chars.windows(RUN_LENGTH).any(|w| {
        let ascending = w[1] == w[0].wrapping_add(1) && w[2] == w[1].wrapping_add(1);
        let descending = w[1] == w[0].wrapping_sub(1) && w[2] == w[1].wrapping_sub(1);
        ascending || descending
    });

    if found {
        return Some("Contains sequential characters (e.g., 123, abc)".to_string());
    }
    None
}

/// Checks for three identical consecutive characters.
pub fn repeated_chars_section(password: &str) -> SectionResult {
    let chars: Vec<char> = password.chars().collect();

    if chars
        .windows(RUN_LENGTH)
        .any(|w| w[0] == w[1] && w[1] == w[2])
    {
        return Some("Contains repeated characters (e.g., aaa, 111)".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_numbers() {
        let result = sequential_chars_section("test123x");
        assert_eq!(
            result,
            Some("Contains sequential characters (e.g., 123, abc)".to_string())
        );
    }

    #[test]
    fn test_sequential_descending_letters() {
        assert!(sequential_chars_section("zyxWins!").is_some());
    }

    #[test]
    fn test_sequential_is_case_sensitive() {
        assert_eq!(sequential_chars_section("aBc"), None);
        assert!(sequential_chars_section("ABC").is_some());
    }

    #[test]
    fn test_sequential_needs_constant_direction() {
        // 1,2,1 goes up then down.
        assert_eq!(sequential_chars_section("121"), None);
    }

    #[test]
    fn test_repeated_chars() {
        let result = repeated_chars_section("aaaaBBBB1111");
        assert_eq!(
            result,
            Some("Contains repeated characters (e.g., aaa, 111)".to_string())
        );
    }

    #[test]
    fn test_repeated_needs_three() {
        assert_eq!(repeated_chars_section("aabbcc"), None);
    }

    #[test]
    fn test_pattern_too_short() {
        assert_eq!(sequential_chars_section("ab"), None);
        assert_eq!(repeated_chars_section("aa"), None);
        assert_eq!(sequential_chars_section(""), None);
        assert_eq!(repeated_chars_section(""), None);
    }

    #[test]
    fn test_pattern_strong_password() {
        assert_eq!(sequential_chars_section("RandomPass!@#Word"), None);
        assert_eq!(repeated_chars_section("RandomPass!@#Word"), None);
    }
}
