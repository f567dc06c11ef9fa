//! Fixed-width identities and locator payloads.
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Width of an [`Identity`] in bytes.
pub const IDENTITY_LEN: usize = 20;

/// Width of a [`Locator`] in bytes.
pub const LOCATOR_LEN: usize = 32;

/// Unique key of a registrant, e.g. a participant's address.
///
/// [`Identity::ZERO`] is the null identity; it is never a valid registrant and is what
/// [`Registry::lookup()`](crate::Registry::lookup) reports for absent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Identity([u8; IDENTITY_LEN]);

/// Opaque fixed-width payload attached to an identity.
///
/// The registry stores it verbatim and never looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Locator([u8; LOCATOR_LEN]);

impl Identity {
    pub const ZERO: Self = Identity([0; IDENTITY_LEN]);

    pub const fn new(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }
}

impl Locator {
    pub const ZERO: Self = Locator([0; LOCATOR_LEN]);

    pub const fn new(bytes: [u8; LOCATOR_LEN]) -> Self {
        Self(bytes)
    }

    /// Left-pad an identity into a locator, the usual encoding for makers that are reached at
    /// their own address.
    pub fn from_identity(identity: Identity) -> Self {
        let mut bytes = [0; LOCATOR_LEN];
        bytes[LOCATOR_LEN - IDENTITY_LEN..].copy_from_slice(identity.as_bytes());
        Self(bytes)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn as_bytes(&self) -> &[u8; LOCATOR_LEN] {
        &self.0
    }
}

/// Decode `0x`-prefixed (or bare) hex into exactly `N` bytes.
fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N]> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(digits).map_err(|source| Error::InvalidHex {
        input: s.to_owned(),
        source,
    })?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Error::InvalidLength {
        expected: N,
        actual,
    })
}

macro_rules! impl_fixed_bytes {
    () => {};

    (impl $name:ident[$len:ident]; $($toks:tt)*) => {
        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;
            fn from_str(s: &str) -> Result<Self> {
                decode_fixed::<$len>(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }
        impl_fixed_bytes!{$($toks)*}
    };
}

impl_fixed_bytes! {
    impl Identity[IDENTITY_LEN];
    impl Locator[LOCATOR_LEN];
}
