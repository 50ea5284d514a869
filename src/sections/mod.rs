//! Password analysis sections
//!
//! Each section inspects one aspect of the password. Character variety
//! yields a profile; the remaining sections each report one weak-pattern
//! category.

mod common;
mod keyboard;
mod pattern;
mod variety;

pub use common::{common_password_section, COMMON_PASSWORDS};
pub use keyboard::{keyboard_pattern_section, KEYBOARD_PATTERNS};
pub use pattern::{repeated_chars_section, sequential_chars_section};
pub use variety::{character_profile, SPECIAL_CHARS};

/// Result type for weak-pattern sections.
/// - `Some(reason)` - Weak pattern found, with its description
/// - `None` - Section passed
pub type SectionResult = Option<String>;
