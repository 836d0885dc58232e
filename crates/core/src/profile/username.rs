//! The UsernameCaseMapped and UsernameCasePreserved profiles (RFC 8265 §3).

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::bidi::{check_bidi_rule, requires_bidi};
use crate::case::case_fold;
use crate::classify::{StringClass, check_allowed};
use crate::profile::PrecisProfile;
use crate::width::width_map;
use crate::{PrecisError, Result};

/// Username profile over the IdentifierClass. The two RFC 8265 username
/// profiles differ only in the case mapping rule, so a single configuration
/// flag covers both.
#[derive(Debug, Clone, Copy)]
pub struct UsernameProfile {
    case_mapped: bool,
}

impl UsernameProfile {
    pub(crate) const fn new(case_mapped: bool) -> Self {
        Self { case_mapped }
    }
}

impl PrecisProfile for UsernameProfile {
    fn string_class(&self) -> StringClass {
        StringClass::Identifier
    }

    /// RFC 8265 folds width mapping into preparation: fullwidth and
    /// halfwidth characters are decomposed before classification, because
    /// the IdentifierClass HasCompat check would otherwise reject them
    /// before normalization ever saw them. The returned string is the
    /// width-mapped input.
    fn prepare(&self, input: &str) -> Result<String> {
        let mapped = width_map(input);
        check_allowed(&mapped, self.string_class())?;
        Ok(mapped.into_owned())
    }

    // Width mapping already happened in `prepare`; the enforce-stage hook
    // stays the identity.

    fn case_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.case_mapped {
            Cow::Owned(case_fold(input))
        } else {
            Cow::Borrowed(input)
        }
    }

    fn normalization_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(input.nfc().collect())
    }

    fn directionality_rule(&self, input: &str) -> Result<()> {
        if requires_bidi(input) {
            check_bidi_rule(input)
        } else {
            Ok(())
        }
    }

    fn enforce(&self, input: &str) -> Result<String> {
        let enforced = self.apply_rules(input)?;
        // A username must not be zero bytes in length, checked after all
        // normalization and mapping of code points.
        if enforced.is_empty() {
            return Err(PrecisError::EmptyResult);
        }
        Ok(enforced)
    }
}
