//! Internationalized domain names, following the general procedure of
//! RFC 5895. IDNA predates PRECIS, but its prepare/enforce shape fits the
//! same contract, so it is exposed as a profile here.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::case::lowercase;
use crate::classify::StringClass;
use crate::profile::PrecisProfile;
use crate::width::width_map;
use crate::{PrecisError, Result};

/// Characters that must be recognized as label separators wherever dots
/// separate labels: FULL STOP, IDEOGRAPHIC FULL STOP, FULLWIDTH FULL STOP,
/// HALFWIDTH IDEOGRAPHIC FULL STOP.
const LABEL_SEPARATORS: [char; 4] = ['.', '\u{3002}', '\u{FF0E}', '\u{FF61}'];

#[derive(Debug, Clone, Copy)]
pub struct IdnProfile;

impl PrecisProfile for IdnProfile {
    fn string_class(&self) -> StringClass {
        StringClass::Freeform
    }

    /// Validates the domain through an IDNA ASCII/Unicode round trip with
    /// STD3 rules: the ToASCII pass rejects malformed labels, and the
    /// ToUnicode pass guarantees the result carries U-labels rather than
    /// "xn--" A-labels.
    fn prepare(&self, input: &str) -> Result<String> {
        let ascii = idna::domain_to_ascii_strict(input)
            .map_err(|e| PrecisError::MalformedLabel(e.to_string()))?;
        let (unicode, checks) = idna::domain_to_unicode(&ascii);
        checks.map_err(|e| PrecisError::MalformedLabel(e.to_string()))?;
        Ok(unicode)
    }

    fn width_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        width_map(input)
    }

    fn additional_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if input.contains(&LABEL_SEPARATORS[1..]) {
            Cow::Owned(
                input
                    .chars()
                    .map(|c| if LABEL_SEPARATORS.contains(&c) { '.' } else { c })
                    .collect(),
            )
        } else {
            Cow::Borrowed(input)
        }
    }

    fn case_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(lowercase(input))
    }

    fn normalization_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(input.nfc().collect())
    }

    /// RFC 5895 §2 order: lowercase, decompose widths, NFC, then map the
    /// alternate full stops to '.'.
    fn enforce(&self, input: &str) -> Result<String> {
        let prepared = self.prepare(input)?;
        let cased = self.case_mapping_rule(&prepared);
        let widened = self.width_mapping_rule(&cased);
        let normalized = self.normalization_rule(&widened);
        Ok(self.additional_mapping_rule(&normalized).into_owned())
    }
}
