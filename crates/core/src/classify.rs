//! Code-point classification for the PRECIS string classes (RFC 8264 §8-§9).
//!
//! Every code point is evaluated against an ordered cascade of category
//! checks; the first matching category decides whether it is valid for the
//! IdentifierClass, the FreeformClass, or neither. The cascade order is
//! significant and must not be rearranged: earlier categories shadow later
//! ones (e.g. the exception lists override the general-category buckets).

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::{PrecisError, Result};

/// The two PRECIS string classes (RFC 8264 §4).
///
/// `Identifier` rejects spaces, symbols, punctuation, compatibility
/// characters and the "other" letter/digit categories; `Freeform` accepts
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringClass {
    Identifier,
    Freeform,
}

/// The classification bucket assigned to a code point.
///
/// Buckets are listed in evaluation order; [`categorize`] returns the first
/// one that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// RFC 8264 §9.6 exceptions, PVALID side.
    ExceptionallyValid,
    /// RFC 8264 §9.6 exceptions, DISALLOWED side.
    ExceptionallyDisallowed,
    /// RFC 8264 §9.7. Currently the empty set; the arm is kept so the
    /// precedence slot stays where the derivation algorithm puts it.
    BackwardCompatible,
    /// General category Cn, excluding noncharacters.
    Unassigned,
    /// Printable ASCII, U+0021..U+007E.
    Ascii7,
    /// ZERO WIDTH NON-JOINER / ZERO WIDTH JOINER.
    JoinControl,
    /// Conjoining Hangul Jamo blocks.
    OldHangulJamo,
    /// Default-ignorable code points and noncharacters.
    Ignorable,
    /// General category Cc.
    Control,
    /// NFKC of the lone code point differs from it.
    HasCompat,
    /// Ll, Lu, Lo, Nd, Lm, Mn, Mc.
    LetterDigit,
    /// Lt, Nl, No, Me.
    OtherLetterDigit,
    /// Zs.
    Space,
    /// Sm, Sc, Sk, So.
    Symbol,
    /// Pc, Pd, Ps, Pe, Pi, Pf, Po.
    Punctuation,
    /// Anything that matched none of the above; always disallowed.
    Other,
}

/// RFC 8264 §9.6, PVALID entries.
fn is_exceptionally_valid(c: char) -> bool {
    matches!(
        c,
        '\u{00DF}'   // LATIN SMALL LETTER SHARP S
        | '\u{03C2}' // GREEK SMALL LETTER FINAL SIGMA
        | '\u{06FD}' // ARABIC SIGN SINDHI AMPERSAND
        | '\u{06FE}' // ARABIC SIGN SINDHI POSTPOSITION MEN
        | '\u{0F0B}' // TIBETAN MARK INTERSYLLABIC TSHEG
        | '\u{3007}' // IDEOGRAPHIC NUMBER ZERO
    )
}

/// RFC 8264 §9.6, DISALLOWED entries.
fn is_exceptionally_disallowed(c: char) -> bool {
    matches!(
        c,
        '\u{0640}'   // ARABIC TATWEEL
        | '\u{07FA}' // NKO LAJANYALAN
        | '\u{302E}' // HANGUL SINGLE DOT TONE MARK
        | '\u{302F}' // HANGUL DOUBLE DOT TONE MARK
        | '\u{3031}'..='\u{3035}' // VERTICAL KANA REPEAT MARKS
        | '\u{303B}' // VERTICAL IDEOGRAPHIC ITERATION MARK
    )
}

/// RFC 8264 §9.7. The category is defined as the empty set at present, but
/// its slot in the cascade must survive so that future additions keep the
/// documented precedence.
fn is_backward_compatible(_c: char) -> bool {
    false
}

/// Noncharacter code points: U+FDD0..U+FDEF plus the last two code points of
/// every plane.
fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    matches!(cp, 0xFDD0..=0xFDEF) || (cp & 0xFFFE) == 0xFFFE
}

/// Default_Ignorable_Code_Point, per DerivedCoreProperties.txt.
fn is_default_ignorable(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'                // SOFT HYPHEN
        | '\u{034F}'              // COMBINING GRAPHEME JOINER
        | '\u{061C}'              // ARABIC LETTER MARK
        | '\u{115F}'..='\u{1160}' // HANGUL CHOSEONG/JUNGSEONG FILLER
        | '\u{17B4}'..='\u{17B5}' // KHMER VOWEL INHERENT AQ/AA
        | '\u{180B}'..='\u{180E}' // MONGOLIAN FREE VARIATION SELECTORS, MVS
        | '\u{200B}'..='\u{200F}' // ZWSP, ZWNJ, ZWJ, LRM, RLM
        | '\u{202A}'..='\u{202E}' // embedding and override controls
        | '\u{2060}'..='\u{206F}' // WORD JOINER .. NOMINAL DIGIT SHAPES
        | '\u{3164}'              // HANGUL FILLER
        | '\u{FE00}'..='\u{FE0F}' // VARIATION SELECTOR-1 through -16
        | '\u{FEFF}'              // ZERO WIDTH NO-BREAK SPACE (BOM)
        | '\u{FFA0}'              // HALFWIDTH HANGUL FILLER
        | '\u{FFF0}'..='\u{FFF8}' // reserved format characters
    )
}

fn is_old_hangul_jamo(c: char) -> bool {
    matches!(
        c,
        '\u{1100}'..='\u{11FF}'   // Hangul Jamo
        | '\u{A960}'..='\u{A97F}' // Hangul Jamo Extended-A
        | '\u{D7B0}'..='\u{D7FF}' // Hangul Jamo Extended-B
    )
}

/// HasCompat: applying NFKC to the lone code point changes it.
fn has_compatibility_equivalent(c: char) -> bool {
    let mut nfkc = std::iter::once(c).nfkc();
    nfkc.next() != Some(c) || nfkc.next().is_some()
}

fn is_letter_digit(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::LowercaseLetter
            | GeneralCategory::UppercaseLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::ModifierLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
    )
}

fn is_other_letter_digit(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::TitlecaseLetter
            | GeneralCategory::LetterNumber
            | GeneralCategory::OtherNumber
            | GeneralCategory::EnclosingMark
    )
}

fn is_symbol(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

fn is_punctuation(gc: GeneralCategory) -> bool {
    matches!(
        gc,
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Assigns a code point to its classification bucket.
///
/// This is the derived-property algorithm of RFC 8264 §8, written as a
/// cascade of guards returning on first match.
pub fn categorize(c: char) -> Category {
    let gc = c.general_category();
    if is_exceptionally_valid(c) {
        Category::ExceptionallyValid
    } else if is_exceptionally_disallowed(c) {
        Category::ExceptionallyDisallowed
    } else if is_backward_compatible(c) {
        Category::BackwardCompatible
    } else if gc == GeneralCategory::Unassigned && !is_noncharacter(c) {
        Category::Unassigned
    } else if ('\u{0021}'..='\u{007E}').contains(&c) {
        Category::Ascii7
    } else if c == '\u{200C}' || c == '\u{200D}' {
        Category::JoinControl
    } else if is_old_hangul_jamo(c) {
        Category::OldHangulJamo
    } else if is_default_ignorable(c) || is_noncharacter(c) {
        Category::Ignorable
    } else if gc == GeneralCategory::Control {
        Category::Control
    } else if has_compatibility_equivalent(c) {
        Category::HasCompat
    } else if is_letter_digit(gc) {
        Category::LetterDigit
    } else if is_other_letter_digit(gc) {
        Category::OtherLetterDigit
    } else if gc == GeneralCategory::SpaceSeparator {
        Category::Space
    } else if is_symbol(gc) {
        Category::Symbol
    } else if is_punctuation(gc) {
        Category::Punctuation
    } else {
        Category::Other
    }
}

/// Returns whether a code point is valid under the given string class.
pub fn is_allowed(c: char, class: StringClass) -> bool {
    let freeform = class == StringClass::Freeform;
    match categorize(c) {
        Category::ExceptionallyValid
        | Category::BackwardCompatible
        | Category::Ascii7
        | Category::LetterDigit => true,
        Category::HasCompat
        | Category::OtherLetterDigit
        | Category::Space
        | Category::Symbol
        | Category::Punctuation => freeform,
        Category::ExceptionallyDisallowed
        | Category::Unassigned
        | Category::JoinControl
        | Category::OldHangulJamo
        | Category::Ignorable
        | Category::Control
        | Category::Other => false,
    }
}

/// Scans a string and reports the first code point disallowed under the
/// given string class.
pub fn check_allowed(input: &str, class: StringClass) -> Result<()> {
    for (position, c) in input.char_indices() {
        if !is_allowed(c, class) {
            return Err(PrecisError::InvalidCodePoint {
                position,
                code_point: c as u32,
            });
        }
    }
    Ok(())
}
