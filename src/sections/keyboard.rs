//! Keyboard section - detects runs of adjacent keys on common layouts.

use super::SectionResult;

/// Keyboard row fragments, checked in this order.
pub const KEYBOARD_PATTERNS: [&str; 4] = ["qwerty", "asdfgh", "zxcvbn", "qwertz"];

/// Checks if the password contains a keyboard row fragment, ignoring case.
pub fn keyboard_pattern_section(password: &str) -> SectionResult {
    let lower = password.to_lowercase();
    if KEYBOARD_PATTERNS.iter().any(|pattern| lower.contains(pattern)) {
        return Some("Contains keyboard pattern (e.g., qwerty, asdf)".to_string());
    }
    None
}
