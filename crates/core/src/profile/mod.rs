//! The PRECIS profile contract: five ordered transformation rules over one
//! of the two string classes, plus the three public operations built on
//! them (preparation, enforcement, comparison).
//!
//! Profiles are immutable configuration values; every operation is a pure
//! function of its input, so instances can be shared freely across threads.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::Result;
use crate::classify::{StringClass, check_allowed};

pub mod idn;
pub mod nickname;
pub mod opaque;
pub mod username;
pub mod xmpp;

pub use idn::IdnProfile;
pub use nickname::NicknameProfile;
pub use opaque::OpaqueStringProfile;
pub use username::UsernameProfile;
pub use xmpp::XmppLocalpartProfile;

/// A PRECIS profile: a string class plus the width-mapping, additional-
/// mapping, case-mapping, normalization, and directionality rules.
///
/// The rule hooks default to the identity (or to "no rule" for
/// directionality); each variant overrides exactly the hooks its governing
/// specification defines. The provided operations compose the hooks in the
/// fixed order required by RFC 8264 §7.
pub trait PrecisProfile {
    /// The string class whose code-point repertoire this profile enforces.
    fn string_class(&self) -> StringClass;

    /// Width mapping rule: decomposing fullwidth/halfwidth variants.
    fn width_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }

    /// Additional mapping rule, e.g. mapping non-ASCII spaces to SPACE.
    fn additional_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }

    /// Case mapping rule: folding or lower-casing, where the profile asks
    /// for case mapping rather than case preservation.
    fn case_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }

    /// Normalization rule: the Unicode normalization form to apply.
    fn normalization_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }

    /// Directionality rule: validates (but never rewrites) the string.
    fn directionality_rule(&self, _input: &str) -> Result<()> {
        Ok(())
    }

    /// Ensures that every code point in `input` is allowed by the profile's
    /// string class. Returns the input unchanged on success.
    fn prepare(&self, input: &str) -> Result<String> {
        check_allowed(input, self.string_class())?;
        Ok(input.to_owned())
    }

    /// Applies the five rules in order, then re-runs [`prepare`] on the
    /// transformed string.
    ///
    /// Classification deliberately runs last, so that the code points
    /// produced by normalization are the ones classified. RFC 8264 §7
    /// leaves the relative order of rules and class checking ambiguous;
    /// transforming first is what lets U+212B (ANGSTROM SIGN) normalize to
    /// U+00C5 and pass the IdentifierClass instead of being rejected for
    /// its compatibility equivalent.
    ///
    /// [`prepare`]: PrecisProfile::prepare
    fn apply_rules(&self, input: &str) -> Result<String> {
        let widened = self.width_mapping_rule(input);
        let mapped = self.additional_mapping_rule(&widened);
        let cased = self.case_mapping_rule(&mapped);
        let normalized = self.normalization_rule(&cased);
        self.directionality_rule(&normalized)?;
        self.prepare(&normalized)
    }

    /// Applies all of the profile's rules to `input`, producing the
    /// canonical string for the protocol slot. Idempotent for every input
    /// it accepts.
    fn enforce(&self, input: &str) -> Result<String> {
        self.apply_rules(input)
    }

    /// Produces the string used for comparison. Defaults to [`enforce`];
    /// profiles with a distinct comparison rule set override this.
    ///
    /// [`enforce`]: PrecisProfile::enforce
    fn to_comparable_string(&self, input: &str) -> Result<String> {
        self.enforce(input)
    }

    /// Compares two strings under the profile's comparison rules,
    /// lexicographically ordering the comparable forms.
    fn compare(&self, left: &str, right: &str) -> Result<Ordering> {
        Ok(self
            .to_comparable_string(left)?
            .cmp(&self.to_comparable_string(right)?))
    }
}
