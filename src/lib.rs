//! Password analysis library
//!
//! This library rates a password as Weak, Medium or Strong from its length,
//! character variety and a fixed set of weak patterns (common passwords,
//! sequential or repeated runs, keyboard rows), and lists suggestions for
//! improving it.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-analyzer` command line shell
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze_password, Strength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Ab3!Ab3!Ab3!".to_string().into());
//! let result = analyze_password(&password);
//!
//! assert_eq!(result.strength(), Strength::Strong);
//! assert!(result.weak_patterns().is_empty());
//! ```

// Internal modules
mod analyzer;
mod report;
mod sections;
mod suggestions;
mod types;

// Public API
pub use analyzer::{analyze, analyze_password, base_strength};
pub use report::{render_report, write_report};
pub use sections::{character_profile, COMMON_PASSWORDS, KEYBOARD_PATTERNS, SPECIAL_CHARS};
pub use types::{AnalysisResult, CharacterProfile, Strength};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
