//! The XMPP localpart profile (RFC 7622 §3.3): UsernameCaseMapped plus the
//! localpart delimiter exclusions and the 1023-byte size cap.

use std::borrow::Cow;

use crate::classify::StringClass;
use crate::profile::PrecisProfile;
use crate::profile::username::UsernameProfile;
use crate::{PrecisError, Result};

/// RFC 7622 §3.3.1: characters excluded from localparts on top of the
/// IdentifierClass. Kept sorted for binary search.
const FURTHER_EXCLUDED: [char; 8] = ['"', '&', '\'', '/', ':', '<', '>', '@'];

/// Maximum size of an enforced localpart in UTF-8 bytes.
const MAX_LOCALPART_BYTES: usize = 1023;

#[derive(Debug, Clone, Copy)]
pub struct XmppLocalpartProfile {
    inner: UsernameProfile,
}

impl XmppLocalpartProfile {
    pub(crate) const fn new() -> Self {
        Self {
            inner: UsernameProfile::new(true),
        }
    }
}

impl PrecisProfile for XmppLocalpartProfile {
    fn string_class(&self) -> StringClass {
        StringClass::Identifier
    }

    fn prepare(&self, input: &str) -> Result<String> {
        self.inner.prepare(input)
    }

    fn case_mapping_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.inner.case_mapping_rule(input)
    }

    fn normalization_rule<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.inner.normalization_rule(input)
    }

    fn directionality_rule(&self, input: &str) -> Result<()> {
        self.inner.directionality_rule(input)
    }

    fn enforce(&self, input: &str) -> Result<String> {
        for (position, c) in input.char_indices() {
            if FURTHER_EXCLUDED.binary_search(&c).is_ok() {
                return Err(PrecisError::InvalidCodePoint {
                    position,
                    code_point: c as u32,
                });
            }
        }
        let enforced = self.inner.enforce(input)?;
        if enforced.len() > MAX_LOCALPART_BYTES {
            return Err(PrecisError::OversizedResult(enforced.len()));
        }
        Ok(enforced)
    }
}
