//! Password analyzer - runs every section and derives the strength rating.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    character_profile, common_password_section, keyboard_pattern_section,
    repeated_chars_section, sequential_chars_section, SectionResult,
};
use crate::suggestions::{build_suggestions, MIN_LENGTH};
use crate::types::{AnalysisResult, Strength};

const PATTERN_SUGGESTION: &str = "Avoid common patterns and sequences";

/// Analyzes a password held as a secret.
///
/// The secret is exposed only for the duration of the call.
pub fn analyze_password(password: &SecretString) -> AnalysisResult {
    analyze(password.expose_secret())
}

/// Analyzes a password and returns its strength, weak patterns and suggestions.
///
/// Total over all inputs, including the empty string.
pub fn analyze(password: &str) -> AnalysisResult {
    let length = password.chars().count();
    let profile = character_profile(password);

    // Orchestrator: weak-pattern sections in reporting order
    let sections: [(&str, fn(&str) -> SectionResult); 4] = [
        ("common", common_password_section),
        ("sequential", sequential_chars_section),
        ("repeated", repeated_chars_section),
        ("keyboard", keyboard_pattern_section),
    ];

    let mut weak_patterns = Vec::new();
    for (section_name, section_fn) in sections {
        if let Some(reason) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Weak pattern detected by section: {}", section_name);
            #[cfg(not(feature = "tracing"))]
            let _ = section_name;
            weak_patterns.push(reason);
        }
    }

    let mut suggestions = build_suggestions(length, &profile);

    let mut strength = base_strength(length, profile.criteria_count(), weak_patterns.is_empty());

    // Strong already requires no weak patterns, so this never fires.
    if !weak_patterns.is_empty() && strength == Strength::Strong {
        strength = Strength::Medium;
        suggestions.push(PATTERN_SUGGESTION.to_string());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Analysis finished: strength={}, weak_patterns={}, suggestions={}",
        strength,
        weak_patterns.len(),
        suggestions.len()
    );

    AnalysisResult::new(strength, suggestions, weak_patterns)
}

/// Scores a password from its length, satisfied class count and whether
/// any weak pattern was found.
pub fn base_strength(length: usize, criteria_count: usize, no_weak_patterns: bool) -> Strength {
    if length >= MIN_LENGTH && criteria_count == 4 && no_weak_patterns {
        Strength::Strong
    } else if length >= MIN_LENGTH && criteria_count >= 3 {
        Strength::Medium
    } else {
        Strength::Weak
    }
}

/// Async version that sends the analysis result via channel.
///
/// Nothing is sent if `token` is cancelled before the result is delivered.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("analysis cancelled before start");
        return;
    }

    let result = analyze_password(password);

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("analysis cancelled before delivery");
        }
        sent = tx.send(result) => {
            if let Err(e) = sent {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password analysis result: {}", e);
                #[cfg(not(feature = "tracing"))]
                let _ = e;
            }
        }
    }
}
