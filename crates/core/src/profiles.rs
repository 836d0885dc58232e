//! Preconfigured profile instances.
//!
//! Each constant is an immutable configuration value; operations never
//! mutate it, so the instances can be used concurrently without
//! synchronization.
//!
//! ```
//! use idprep_core::{PrecisProfile, profiles};
//!
//! let username = profiles::USERNAME_CASE_MAPPED.enforce("Juliet")?;
//! assert_eq!(username, "juliet");
//! # Ok::<(), idprep_core::PrecisError>(())
//! ```

use crate::profile::{
    IdnProfile, NicknameProfile, OpaqueStringProfile, UsernameProfile, XmppLocalpartProfile,
};

/// The UsernameCaseMapped profile of RFC 8265 §3.3.
pub const USERNAME_CASE_MAPPED: UsernameProfile = UsernameProfile::new(true);

/// The UsernameCasePreserved profile of RFC 8265 §3.4.
pub const USERNAME_CASE_PRESERVED: UsernameProfile = UsernameProfile::new(false);

/// The OpaqueString profile of RFC 8265 §4.2, for passwords.
pub const OPAQUE_STRING: OpaqueStringProfile = OpaqueStringProfile;

/// The Nickname profile of RFC 8266.
pub const NICKNAME: NicknameProfile = NicknameProfile;

/// Domain labels following the general procedure of RFC 5895.
pub const IDN: IdnProfile = IdnProfile;

/// The XMPP localpart profile of RFC 7622 §3.3.
pub const XMPP_LOCALPART: XmppLocalpartProfile = XmppLocalpartProfile::new();
