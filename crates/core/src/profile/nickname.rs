//! The Nickname profile (RFC 8266).
//!
//! Nicknames are the one profile where enforcement and comparison use
//! different rule sets: enforcement preserves case, comparison folds it.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::case::case_fold;
use crate::classify::StringClass;
use crate::profile::PrecisProfile;
use crate::profile::opaque::map_spaces_to_ascii;
use crate::{PrecisError, Result};

#[derive(Debug, Clone, Copy)]
pub struct NicknameProfile;

impl NicknameProfile {
    /// RFC 8266 §2.3/§2.4: preparation, then the additional mapping rule,
    /// optionally the case mapping rule (comparison only), then NFKC.
    /// Unlike the base pipeline, classification runs first here.
    fn apply_nickname_rules(&self, input: &str, fold_case: bool) -> Result<String> {
        let prepared = self.prepare(input)?;
        let mapped = self.additional_mapping_rule(&prepared);
        let cased = if fold_case {
            self.case_mapping_rule(&mapped)
        } else {
            mapped
        };
        let normalized = self.normalization_rule(&cased);
        // There is no directionality rule for nicknames.
        Ok(normalized.into_owned())
    }
}

impl PrecisProfile for NicknameProfile {
    fn string_class(&self) -> StringClass {
        StringClass::Freeform
    }

    /// Non-ASCII spaces map to SPACE, leading/trailing spaces are removed,
    /// and interior space runs collapse to a single SPACE.
    fn additional_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mapped = map_spaces_to_ascii(input);
        let trimmed = mapped.trim_matches(' ');
        if trimmed.contains("  ") {
            let mut collapsed = String::with_capacity(trimmed.len());
            let mut previous_space = false;
            for c in trimmed.chars() {
                if c == ' ' {
                    if !previous_space {
                        collapsed.push(c);
                    }
                    previous_space = true;
                } else {
                    collapsed.push(c);
                    previous_space = false;
                }
            }
            Cow::Owned(collapsed)
        } else if trimmed.len() == mapped.len() {
            mapped
        } else {
            Cow::Owned(trimmed.to_owned())
        }
    }

    fn case_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(case_fold(input))
    }

    /// NFKC, deliberately more aggressive than the NFC of the other
    /// profiles: compatibility variants of a nickname should collide.
    fn normalization_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(input.nfkc().collect())
    }

    fn enforce(&self, input: &str) -> Result<String> {
        let enforced = self.apply_nickname_rules(input, false)?;
        // Checked after the rules: internationalized input can map to
        // nothing, and such a nickname must not silently become empty.
        if enforced.is_empty() {
            return Err(PrecisError::EmptyResult);
        }
        Ok(enforced)
    }

    /// Comparison inserts the case mapping rule between the additional
    /// mapping and normalization rules.
    fn to_comparable_string(&self, input: &str) -> Result<String> {
        self.apply_nickname_rules(input, true)
    }
}
