//! Tests for the UsernameCaseMapped and UsernameCasePreserved profiles
//! (RFC 8265).

use std::cmp::Ordering;

use idprep_core::{
    PrecisError, PrecisProfile, USERNAME_CASE_MAPPED, USERNAME_CASE_PRESERVED,
};

/// Enforcement lowercases, width-maps, and NFC-normalizes.
#[test]
fn test_enforce_case_mapped() {
    assert_eq!(USERNAME_CASE_MAPPED.enforce("Juliet").unwrap(), "juliet");
    assert_eq!(
        USERNAME_CASE_MAPPED.enforce("juliet@example.com").unwrap(),
        "juliet@example.com"
    );
    assert_eq!(USERNAME_CASE_MAPPED.enforce("FUSSBALL").unwrap(), "fussball");
    assert_eq!(USERNAME_CASE_MAPPED.enforce("Fu\u{00DF}ball").unwrap(), "fu\u{00DF}ball");
    // Lowercasing applies the Final_Sigma rule, so a word-final capital
    // sigma becomes U+03C2.
    assert_eq!(USERNAME_CASE_MAPPED.enforce("\u{03A0}\u{03A3}").unwrap(), "\u{03C0}\u{03C2}");
}

/// The case-preserved variant keeps the original case.
#[test]
fn test_enforce_case_preserved() {
    assert_eq!(USERNAME_CASE_PRESERVED.enforce("Juliet").unwrap(), "Juliet");
    assert_eq!(
        USERNAME_CASE_PRESERVED.enforce("\u{03A0}\u{03A3}").unwrap(),
        "\u{03A0}\u{03A3}"
    );
}

/// Fullwidth and halfwidth forms are width-mapped before classification,
/// so they are accepted and decomposed.
#[test]
fn test_width_mapping() {
    assert_eq!(USERNAME_CASE_MAPPED.enforce("\u{FF21}\u{FF22}").unwrap(), "ab");
    assert_eq!(USERNAME_CASE_PRESERVED.enforce("\u{FF21}\u{FF22}").unwrap(), "AB");
    assert!(USERNAME_CASE_MAPPED.prepare("\u{FF01}").is_ok());
}

/// All three spellings of the angstrom letter converge to one form.
#[test]
fn test_angstrom_convergence() {
    let canonical = USERNAME_CASE_MAPPED.enforce("\u{00C5}").unwrap();
    assert_eq!(canonical, "\u{00E5}");
    assert_eq!(USERNAME_CASE_MAPPED.enforce("\u{212B}").unwrap(), canonical);
    assert_eq!(
        USERNAME_CASE_MAPPED.enforce("A\u{030A}").unwrap(),
        canonical
    );
}

/// Spaces are not allowed in usernames.
#[test]
fn test_space_rejected() {
    assert!(matches!(
        USERNAME_CASE_MAPPED.enforce("foo bar"),
        Err(PrecisError::InvalidCodePoint { .. })
    ));
    assert!(matches!(
        USERNAME_CASE_MAPPED.enforce("\u{00A0}"),
        Err(PrecisError::InvalidCodePoint { .. })
    ));
}

/// The empty string may not be the result of enforcement.
#[test]
fn test_empty_rejected() {
    assert!(matches!(
        USERNAME_CASE_MAPPED.enforce(""),
        Err(PrecisError::EmptyResult)
    ));
}

/// Strings with right-to-left characters must satisfy the Bidi Rule.
#[test]
fn test_directionality() {
    assert!(USERNAME_CASE_MAPPED.enforce("\u{0627}\u{0628}").is_ok());
    assert!(matches!(
        USERNAME_CASE_MAPPED.enforce("\u{0786}test"),
        Err(PrecisError::DirectionalityViolation { .. })
    ));
}

/// Enforcement is idempotent: running it on its own output is a no-op.
#[test]
fn test_enforce_idempotent() {
    for input in [
        "Fu\u{00DF}ball",
        "\u{212B}",
        "\u{FF21}\u{FF22}",
        "juliet@example.com",
        "\u{03C2}",
        "\u{03B0}",
    ] {
        let once = USERNAME_CASE_MAPPED.enforce(input).unwrap();
        let twice = USERNAME_CASE_MAPPED.enforce(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

/// Comparison applies the case-mapped pipeline to both operands.
#[test]
fn test_compare() {
    assert_eq!(
        USERNAME_CASE_MAPPED.compare("Foo", "foo").unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        USERNAME_CASE_MAPPED.compare("\u{FF21}", "a").unwrap(),
        Ordering::Equal
    );
    assert_eq!(
        USERNAME_CASE_MAPPED.compare("a", "b").unwrap(),
        Ordering::Less
    );
    assert_eq!(
        USERNAME_CASE_PRESERVED.compare("Foo", "foo").unwrap(),
        Ordering::Less
    );
}

/// Visually confusable strings from different scripts stay distinct;
/// canonicalization never folds across scripts.
#[test]
fn test_confusables_stay_distinct() {
    // Cyrillic а/е against Latin a/e.
    let cyrillic = USERNAME_CASE_MAPPED.enforce("\u{0430}b\u{0435}").unwrap();
    let latin = USERNAME_CASE_MAPPED.enforce("abe").unwrap();
    assert_ne!(cyrillic, latin);
}

/// Compatibility characters are rejected by preparation, which runs on the
/// raw string, while enforcement sees them only after mapping.
#[test]
fn test_prepare_rejects_compat() {
    assert!(matches!(
        USERNAME_CASE_MAPPED.prepare("\u{2163}"),
        Err(PrecisError::InvalidCodePoint { .. })
    ));
    assert!(matches!(
        USERNAME_CASE_MAPPED.prepare("\u{FB00}"),
        Err(PrecisError::InvalidCodePoint { .. })
    ));
}
