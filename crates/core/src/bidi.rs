//! The Bidi Rule of RFC 5893 §2: a six-condition validity check for labels
//! containing right-to-left characters.

use unicode_bidi::{BidiClass, bidi_class};

use crate::{PrecisError, Result};

/// Returns whether a string contains any character requiring bidirectional
/// handling, i.e. one with Bidi_Class R, AL, or AN.
///
/// Profiles with a directionality rule only run [`check_bidi_rule`] when
/// this holds; a purely left-to-right string is never rejected for ending in
/// a digit or punctuation.
pub fn requires_bidi(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(bidi_class(c), BidiClass::R | BidiClass::AL | BidiClass::AN))
}

fn violation(condition: u8, description: &'static str) -> PrecisError {
    PrecisError::DirectionalityViolation {
        condition,
        description,
    }
}

/// Checks a label against the six conditions of the Bidi Rule.
///
/// An empty label is vacuously valid. The first character's Bidi_Class fixes
/// whether the label is LTR or RTL; the remaining conditions are evaluated
/// against that direction and the first violated condition is reported.
pub fn check_bidi_rule(label: &str) -> Result<()> {
    let Some(first) = label.chars().next() else {
        return Ok(());
    };

    // 1. The first character must have Bidi property L, R, or AL. R or AL
    //    makes it an RTL label, L an LTR label.
    let first_class = bidi_class(first);
    let rtl = matches!(first_class, BidiClass::R | BidiClass::AL);
    if !rtl && first_class != BidiClass::L {
        return Err(violation(
            1,
            "the first character must have Bidi property L, R, or AL",
        ));
    }

    let mut last_non_nsm = first_class;
    let mut has_en = false;
    let mut has_an = false;

    for c in label.chars() {
        let class = bidi_class(c);
        if rtl {
            // 2. In an RTL label, only characters with the Bidi properties
            //    R, AL, AN, EN, ES, CS, ET, ON, BN, or NSM are allowed.
            if !matches!(
                class,
                BidiClass::R
                    | BidiClass::AL
                    | BidiClass::AN
                    | BidiClass::EN
                    | BidiClass::ES
                    | BidiClass::CS
                    | BidiClass::ET
                    | BidiClass::ON
                    | BidiClass::BN
                    | BidiClass::NSM
            ) {
                return Err(violation(
                    2,
                    "an RTL label may only contain characters with Bidi property \
                     R, AL, AN, EN, ES, CS, ET, ON, BN, or NSM",
                ));
            }
        } else {
            // 5. In an LTR label, only characters with the Bidi properties
            //    L, EN, ES, CS, ET, ON, BN, or NSM are allowed.
            if !matches!(
                class,
                BidiClass::L
                    | BidiClass::EN
                    | BidiClass::ES
                    | BidiClass::CS
                    | BidiClass::ET
                    | BidiClass::ON
                    | BidiClass::BN
                    | BidiClass::NSM
            ) {
                return Err(violation(
                    5,
                    "an LTR label may only contain characters with Bidi property \
                     L, EN, ES, CS, ET, ON, BN, or NSM",
                ));
            }
        }
        has_en |= class == BidiClass::EN;
        has_an |= class == BidiClass::AN;
        if class != BidiClass::NSM {
            last_non_nsm = class;
        }
    }

    if rtl {
        // 3. In an RTL label, the end of the label must be a character with
        //    Bidi property R, AL, EN, or AN, optionally followed by NSMs.
        if !matches!(
            last_non_nsm,
            BidiClass::R | BidiClass::AL | BidiClass::EN | BidiClass::AN
        ) {
            return Err(violation(
                3,
                "an RTL label must end with a character with Bidi property \
                 R, AL, EN, or AN",
            ));
        }
        // 4. In an RTL label, if an EN is present, no AN may be present,
        //    and vice versa.
        if has_en && has_an {
            return Err(violation(
                4,
                "an RTL label must not contain both EN and AN characters",
            ));
        }
    } else {
        // 6. In an LTR label, the end of the label must be a character with
        //    Bidi property L or EN, optionally followed by NSMs.
        if !matches!(last_non_nsm, BidiClass::L | BidiClass::EN) {
            return Err(violation(
                6,
                "an LTR label must end with a character with Bidi property L or EN",
            ));
        }
    }

    Ok(())
}
