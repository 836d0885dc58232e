//! Tests for the IdentifierClass code-point repertoire, exercised through
//! username preparation.

use idprep_core::{PrecisError, PrecisProfile, USERNAME_CASE_MAPPED};

fn assert_invalid(input: &str, expected_code_point: u32) {
    match USERNAME_CASE_MAPPED.prepare(input) {
        Err(PrecisError::InvalidCodePoint { code_point, .. }) => {
            assert_eq!(code_point, expected_code_point);
        }
        other => panic!("expected InvalidCodePoint, got {other:?}"),
    }
}

/// Noncharacters are disallowed in every string class.
#[test]
fn test_noncharacter_disallowed() {
    assert_invalid("\u{FDD0}", 0xFDD0);
    assert_invalid("\u{FFFF}", 0xFFFF);
}

/// Conjoining Hangul Jamo are disallowed; modern precomposed syllables
/// cover Korean text.
#[test]
fn test_old_hangul_jamo_disallowed() {
    assert_invalid("\u{A960}", 0xA960);
    assert_invalid("\u{1100}", 0x1100);
}

/// Default-ignorable code points are disallowed.
#[test]
fn test_ignorable_disallowed() {
    assert_invalid("\u{034F}", 0x034F); // COMBINING GRAPHEME JOINER
    assert_invalid("\u{061C}", 0x061C); // ARABIC LETTER MARK
}

/// Control characters are disallowed.
#[test]
fn test_control_disallowed() {
    assert_invalid("\t", 0x0009);
    assert_invalid("\u{0000}", 0x0000);
}

/// Symbols are disallowed under the IdentifierClass.
#[test]
fn test_symbols_disallowed() {
    assert_invalid("\u{265A}", 0x265A); // BLACK CHESS KING
    assert_invalid("\u{2600}", 0x2600); // BLACK SUN WITH RAYS
    assert_invalid("\u{26FF}", 0x26FF);
}

/// The exception list admits code points the general rules would reject.
#[test]
fn test_exceptionally_valid() {
    assert!(USERNAME_CASE_MAPPED.prepare("\u{03C2}\u{00DF}").is_ok());
    assert!(USERNAME_CASE_MAPPED.prepare("\u{0F0B}").is_ok());
}

/// The exception list also rejects code points the general rules would
/// admit.
#[test]
fn test_exceptionally_disallowed() {
    assert_invalid("\u{3032}", 0x3032); // VERTICAL KANA REPEAT WITH VOICED SOUND MARK
    assert_invalid("\u{0640}", 0x0640); // ARABIC TATWEEL
}

/// Unassigned code points are disallowed.
#[test]
fn test_unassigned_disallowed() {
    assert_invalid("\u{2065}", 0x2065);
    assert_invalid("\u{05FF}", 0x05FF);
}

/// Join controls are disallowed (no CONTEXTJ evaluation).
#[test]
fn test_join_control_disallowed() {
    assert_invalid("\u{200C}", 0x200C);
    assert_invalid("\u{200D}", 0x200D);
}

/// Compatibility characters are disallowed under the IdentifierClass when
/// classification runs without prior normalization.
#[test]
fn test_has_compat_disallowed() {
    assert_invalid("\u{FB00}", 0xFB00); // LATIN SMALL LIGATURE FF
}

/// Titlecase letters, letter numbers, other numbers, and enclosing marks
/// are only valid under the FreeformClass.
#[test]
fn test_other_letter_digits_disallowed() {
    assert_invalid("\u{01C5}", 0x01C5); // Lt LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON
    assert_invalid("\u{16EE}", 0x16EE); // Nl RUNIC ARLAUG SYMBOL
    assert_invalid("\u{00B2}", 0x00B2); // No SUPERSCRIPT TWO
    assert_invalid("\u{0488}", 0x0488); // Me COMBINING CYRILLIC HUNDRED THOUSANDS SIGN
}

/// The reported offset is the byte position of the offending code point.
#[test]
fn test_error_carries_byte_offset() {
    match USERNAME_CASE_MAPPED.prepare("ab\u{265A}") {
        Err(PrecisError::InvalidCodePoint {
            position,
            code_point,
        }) => {
            assert_eq!(position, 2);
            assert_eq!(code_point, 0x265A);
        }
        other => panic!("expected InvalidCodePoint, got {other:?}"),
    }
}

/// Printable ASCII passes.
#[test]
fn test_ascii7_valid() {
    assert!(USERNAME_CASE_MAPPED.prepare("juliet@example.com").is_ok());
    assert!(USERNAME_CASE_MAPPED.prepare("\u{0021}\u{007E}").is_ok());
}
