//! Human-readable rendering of an analysis result.

use std::io::{self, Write};

use crate::types::AnalysisResult;

/// Writes the analysis report.
///
/// Sections for weak patterns and suggestions are left out when empty.
/// The closing line only appears for a strong password with no weak pattern.
pub fn write_report<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Password Analysis ===")?;
    writeln!(out, "Password Strength: {}", result.strength())?;

    if !result.weak_patterns().is_empty() {
        writeln!(out)?;
        writeln!(out, "⚠ Weak Patterns Detected:")?;
        for pattern in result.weak_patterns() {
            writeln!(out, "  - {}", pattern)?;
        }
    }

    if !result.suggestions().is_empty() {
        writeln!(out)?;
        writeln!(out, "💡 Suggestions for Improvement:")?;
        for suggestion in result.suggestions() {
            writeln!(out, "  - {}", suggestion)?;
        }
    }

    if result.is_strong() {
        writeln!(out)?;
        writeln!(out, "✓ Your password is strong!")?;
    }

    Ok(())
}

/// Renders the analysis report into a `String`.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, result);
    String::from_utf8_lossy(&buf).into_owned()
}
