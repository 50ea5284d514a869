//! Character variety section - scans for uppercase, lowercase, digits and special chars.

use crate::types::CharacterProfile;

/// Characters counted as "special".
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>/?";

/// Classifies every character of the password into at most one class.
///
/// Classes are tried in order upper, lower, digit, special. Characters that
/// fit none of them are ignored.
pub fn character_profile(password: &str) -> CharacterProfile {
    let mut profile = CharacterProfile::default();

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            profile.has_upper = true;
        } else if c.is_ascii_lowercase() {
            profile.has_lower = true;
        } else if c.is_ascii_digit() {
            profile.has_digit = true;
        } else if SPECIAL_CHARS.contains(c) {
            profile.has_special = true;
        }
    }

    profile
}
