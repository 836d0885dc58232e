//! Case mapping operations.
//!
//! Two distinct operations, not interchangeable: [`case_fold`] approximates
//! Unicode Default Case Folding (applied by the case-mapped username profile
//! and by nickname comparison) and [`lowercase`] is plain Unicode default
//! lower-casing (applied by the IDN profile).

/// Approximates Unicode Default Case Folding by applying the full uppercase
/// mapping followed by the full lowercase mapping.
///
/// Plain lower-casing is insufficient for some scripts: GREEK SMALL LETTER
/// FINAL SIGMA (U+03C2) already is lowercase and would survive unchanged,
/// while folding requires it to converge with U+03C3. The uppercase round
/// trip (U+03C2 -> U+03A3 -> U+03C3) handles those.
pub fn case_fold(input: &str) -> String {
    input.to_uppercase().to_lowercase()
}

/// Unicode default case mapping to lowercase.
pub fn lowercase(input: &str) -> String {
    input.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigma_forms_converge() {
        assert_eq!(case_fold("\u{03A3}"), "\u{03C3}");
        assert_eq!(case_fold("\u{03C3}"), "\u{03C3}");
        assert_eq!(case_fold("\u{03C2}"), "\u{03C3}");
    }

    #[test]
    fn test_sharp_s_expands() {
        assert_eq!(case_fold("Fu\u{00DF}ball"), "fussball");
    }

    #[test]
    fn test_lowercase_is_not_folding() {
        // Final sigma survives plain lower-casing; only the fold maps it.
        assert_eq!(lowercase("\u{03C2}"), "\u{03C2}");
        assert_eq!(lowercase("DOMAIN"), "domain");
    }
}
