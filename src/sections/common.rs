//! Common password section - checks for well-known passwords embedded in the input.

use super::SectionResult;

/// Well-known passwords, checked in this order.
pub const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "12345678",
    "qwerty",
    "abc123",
    "letmein",
    "welcome",
    "monkey",
    "123456789",
    "password1",
    "admin",
];

/// Checks if the password contains a common password, ignoring case.
///
/// Only the first matching entry is reported.
///
/// # Returns
/// - `Some(reason)` naming the matched entry
/// - `None` if no common password is contained
pub fn common_password_section(password: &str) -> SectionResult {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS
        .iter()
        .find(|common| lower.contains(*common))
        .map(|common| format!("Contains common password pattern: '{}'", common))
}
