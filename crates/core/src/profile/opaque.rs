//! The OpaqueString profile for passwords and other opaque secrets
//! (RFC 8265 §4.2).

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::classify::StringClass;
use crate::profile::PrecisProfile;
use crate::{PrecisError, Result};

/// Maps every non-ASCII space (general category Zs) to SPACE (U+0020).
pub(crate) fn map_spaces_to_ascii(input: &str) -> Cow<'_, str> {
    if input
        .chars()
        .any(|c| c != ' ' && c.general_category() == GeneralCategory::SpaceSeparator)
    {
        Cow::Owned(
            input
                .chars()
                .map(|c| {
                    if c.general_category() == GeneralCategory::SpaceSeparator {
                        ' '
                    } else {
                        c
                    }
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(input)
    }
}

/// Password profile over the FreeformClass. Fullwidth and halfwidth
/// characters are deliberately NOT width-mapped: visually distinct secrets
/// must stay distinct.
#[derive(Debug, Clone, Copy)]
pub struct OpaqueStringProfile;

impl PrecisProfile for OpaqueStringProfile {
    fn string_class(&self) -> StringClass {
        StringClass::Freeform
    }

    fn additional_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        map_spaces_to_ascii(input)
    }

    fn normalization_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(input.nfc().collect())
    }

    fn enforce(&self, input: &str) -> Result<String> {
        let enforced = self.apply_rules(input)?;
        if enforced.is_empty() {
            return Err(PrecisError::EmptyResult);
        }
        Ok(enforced)
    }
}
