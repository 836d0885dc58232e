//! idprep - preparation, enforcement, and comparison of internationalized
//! strings used as protocol identifiers (PRECIS, RFC 8264/8265/8266).
//!
//! Visually or semantically equivalent Unicode strings can have different
//! binary encodings, which makes raw strings unsafe as usernames,
//! passwords, nicknames, or domain labels. This crate classifies every
//! code point against the PRECIS string classes, rejects disallowed ones,
//! and canonicalizes the rest through a profile's width-mapping,
//! additional-mapping, case-mapping, normalization, and directionality
//! rules so that equivalent inputs converge to one canonical form.

pub mod bidi;
pub mod case;
pub mod classify;
pub mod error;
pub mod profile;
pub mod profiles;
pub mod width;

pub use classify::{Category, StringClass};
pub use error::{PrecisError, Result};
pub use profile::PrecisProfile;
pub use profiles::{
    IDN, NICKNAME, OPAQUE_STRING, USERNAME_CASE_MAPPED, USERNAME_CASE_PRESERVED, XMPP_LOCALPART,
};
