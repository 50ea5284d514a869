//! Improvement suggestions derived from length and character variety.

use crate::types::CharacterProfile;

pub(crate) const MIN_LENGTH: usize = 8;
pub(crate) const RECOMMENDED_LENGTH: usize = 12;

/// Builds suggestions in reporting order: minimum length, missing
/// uppercase, lowercase, digit, special, then recommended length.
pub fn build_suggestions(length: usize, profile: &CharacterProfile) -> Vec<String> {
    let mut suggestions = Vec::new();

    if length < MIN_LENGTH {
        suggestions.push(format!(
            "Increase password length to at least {} characters (current: {})",
            MIN_LENGTH, length
        ));
    }

    let missing = [
        (profile.has_upper, "Add at least one uppercase letter (A-Z)"),
        (profile.has_lower, "Add at least one lowercase letter (a-z)"),
        (profile.has_digit, "Add at least one number (0-9)"),
        (
            profile.has_special,
            "Add at least one special character (!@#$%^&*, etc.)",
        ),
    ];
    suggestions.extend(
        missing
            .into_iter()
            .filter(|(present, _)| !present)
            .map(|(_, text)| text.to_string()),
    );

    if (MIN_LENGTH..RECOMMENDED_LENGTH).contains(&length) {
        suggestions.push("Consider using 12+ characters for even better security".to_string());
    }

    suggestions
}
