//! Tests for the RFC 5893 Bidi Rule.

use idprep_core::PrecisError;
use idprep_core::bidi::{check_bidi_rule, requires_bidi};

fn assert_condition(label: &str, expected: u8) {
    match check_bidi_rule(label) {
        Err(PrecisError::DirectionalityViolation { condition, .. }) => {
            assert_eq!(condition, expected, "wrong condition for {label:?}");
        }
        other => panic!("expected DirectionalityViolation, got {other:?}"),
    }
}

/// A string needs the Bidi Rule as soon as it contains one right-to-left
/// code point, anywhere.
#[test]
fn test_requires_bidi() {
    assert!(!requires_bidi("latin only"));
    assert!(requires_bidi("\u{0627}")); // ARABIC LETTER ALEF (AL)
    assert!(requires_bidi("\u{05D0}")); // HEBREW LETTER ALEF (R)
    assert!(requires_bidi("\u{0660}")); // ARABIC-INDIC DIGIT ZERO (AN)
    assert!(requires_bidi("mixed \u{05D0} tail"));
}

/// The empty label passes vacuously.
#[test]
fn test_empty_label() {
    assert!(check_bidi_rule("").is_ok());
}

/// Condition 1: the first character must be of type L, R, or AL.
#[test]
fn test_first_character_direction() {
    // THAANA ABAFILI is a nonspacing mark.
    assert_condition("\u{07AA}\u{0786}", 1);
    assert_condition("0leading", 1);
}

/// Condition 2: an RTL label admits only R, AL, AN, EN, ES, CS, ET, ON,
/// BN, and NSM.
#[test]
fn test_rtl_rejects_ltr() {
    assert_condition("\u{0786}test", 2);
}

/// Condition 3: an RTL label must end in R, AL, EN, or AN (trailing
/// nonspacing marks excepted).
#[test]
fn test_rtl_end() {
    assert_condition("\u{0786}!", 3);
}

/// Condition 4: an RTL label must not mix EN and AN.
#[test]
fn test_rtl_mixed_digits() {
    assert_condition("\u{0786}123\u{0660}", 4);
}

/// Condition 5: an LTR label admits only L, EN, ES, CS, ET, ON, BN, and
/// NSM.
#[test]
fn test_ltr_rejects_rtl() {
    assert_condition("abc\u{0786}a", 5);
}

/// Condition 6: an LTR label must end in L or EN (trailing nonspacing
/// marks excepted).
#[test]
fn test_ltr_end() {
    assert_condition("a.", 6);
}

/// Well-formed RTL labels pass, including ones ending in nonspacing marks
/// and ones with European digits.
#[test]
fn test_valid_rtl() {
    // Arabic letters around a European digit.
    assert!(check_bidi_rule("\u{0627}1\u{0628}").is_ok());
    // Thaana word ending in a vowel sign (NSM).
    assert!(check_bidi_rule("\u{078C}\u{07A7}\u{0782}\u{07A6}").is_ok());
    // Pointed Hebrew, trailing NSM after an R letter.
    assert!(check_bidi_rule("\u{05D9}\u{05B4}\u{05D5}\u{05D0}\u{05B8}").is_ok());
}

/// Well-formed LTR labels pass.
#[test]
fn test_valid_ltr() {
    assert!(check_bidi_rule("plain").is_ok());
    assert!(check_bidi_rule("mark\u{0301}").is_ok());
    assert!(check_bidi_rule("route66").is_ok());
}
