//! Result types produced by the analyzer.

use std::fmt;

/// Overall strength rating of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Returns the display label ("Weak", "Medium" or "Strong").
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterProfile {
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterProfile {
    /// Number of satisfied character classes, 0 to 4.
    pub fn criteria_count(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Outcome of a single analysis.
///
/// Built once by the analyzer and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    strength: Strength,
    suggestions: Vec<String>,
    weak_patterns: Vec<String>,
}

impl AnalysisResult {
    pub(crate) fn new(
        strength: Strength,
        suggestions: Vec<String>,
        weak_patterns: Vec<String>,
    ) -> Self {
        Self {
            strength,
            suggestions,
            weak_patterns,
        }
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Improvement suggestions, in reporting order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Detected weak patterns, one per category at most.
    pub fn weak_patterns(&self) -> &[String] {
        &self.weak_patterns
    }

    /// `true` when rated Strong with no weak pattern detected.
    pub fn is_strong(&self) -> bool {
        self.strength == Strength::Strong && self.weak_patterns.is_empty()
    }
}
