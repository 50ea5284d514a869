use pwd_analyzer::{analyze, analyze_password, character_profile, render_report, Strength};
use secrecy::SecretString;

const SAMPLES: &[&str] = &[
    "",
    "a",
    "abc",
    "Password123!",
    "aaa11122",
    "qwertyui",
    "Ab3!Ab3!Ab3!",
    "Xk9mPq2vLr7w",
    "Tr0ub4dor&3",
    "CorrectHorseBatteryStaple",
    "!@#$%^&*()",
    "ÄÖÜ äöü 123",
    "zyx987WVU!",
];

#[test]
fn test_empty_password() {
    let result = analyze("");

    assert_eq!(result.strength(), Strength::Weak);
    assert!(result.weak_patterns().is_empty());
    assert_eq!(
        result.suggestions(),
        &[
            "Increase password length to at least 8 characters (current: 0)".to_string(),
            "Add at least one uppercase letter (A-Z)".to_string(),
            "Add at least one lowercase letter (a-z)".to_string(),
            "Add at least one number (0-9)".to_string(),
            "Add at least one special character (!@#$%^&*, etc.)".to_string(),
        ]
    );
}

#[test]
fn test_common_password_blocks_strong() {
    let result = analyze("Password123!");

    assert_eq!(character_profile("Password123!").criteria_count(), 4);
    assert_eq!(result.strength(), Strength::Medium);
    assert!(
        result
            .weak_patterns()
            .contains(&"Contains common password pattern: 'password'".to_string())
    );
    assert!(result.suggestions().is_empty());
}

#[test]
fn test_repeated_run() {
    let result = analyze("aaa11122");

    assert!(
        result
            .weak_patterns()
            .contains(&"Contains repeated characters (e.g., aaa, 111)".to_string())
    );
    assert_eq!(result.strength(), Strength::Weak);
}

#[test]
fn test_keyboard_row() {
    let result = analyze("qwertyui");

    assert_eq!(
        result.weak_patterns(),
        &[
            "Contains common password pattern: 'qwerty'".to_string(),
            "Contains keyboard pattern (e.g., qwerty, asdf)".to_string(),
        ]
    );
}

#[test]
fn test_strong_password() {
    let result = analyze("Ab3!Ab3!Ab3!");

    assert_eq!(result.strength(), Strength::Strong);
    assert!(result.weak_patterns().is_empty());
    assert!(result.suggestions().is_empty());
}

#[test]
fn test_strong_iff_rules_hold() {
    for sample in SAMPLES {
        let result = analyze(sample);
        let profile = character_profile(sample);
        let expected = sample.chars().count() >= 8
            && profile.criteria_count() == 4
            && result.weak_patterns().is_empty();

        assert!(profile.criteria_count() <= 4);
        assert_eq!(
            result.strength() == Strength::Strong,
            expected,
            "unexpected strength for {:?}",
            sample
        );
        if !result.weak_patterns().is_empty() {
            assert_ne!(result.strength(), Strength::Strong);
        }
    }
}

#[test]
fn test_pattern_suggestion_never_emitted() {
    for sample in SAMPLES {
        let result = analyze(sample);
        assert!(
            !result
                .suggestions()
                .iter()
                .any(|s| s == "Avoid common patterns and sequences")
        );
    }
}

#[test]
fn test_analysis_is_repeatable() {
    for sample in SAMPLES {
        assert_eq!(analyze(sample), analyze(sample));
        let secret = SecretString::new(sample.to_string().into());
        assert_eq!(analyze_password(&secret), analyze(sample));
    }
}

#[test]
fn test_report_for_weak_password() {
    let report = render_report(&analyze("abc"));

    assert!(report.contains("Password Strength: Weak\n"));
    assert!(report.contains("  - Contains sequential characters (e.g., 123, abc)\n"));
    assert!(report.contains("  - Increase password length to at least 8 characters (current: 3)\n"));
    assert!(!report.contains("Your password is strong!"));
}

#[test]
fn test_report_for_strong_password() {
    let report = render_report(&analyze("Ab3!Ab3!Ab3!"));

    assert!(report.ends_with("✓ Your password is strong!\n"));
    assert!(!report.contains("Weak Patterns Detected"));
    assert!(!report.contains("Suggestions for Improvement"));
}
