use alloc::{
    string::String,
    vec::Vec,
};
use core::{
    fmt,
    str::FromStr,
};

use crate::error::LandError;

pub const ADDRESS_BYTES: usize = 32;

/// A 32-byte account or program identifier, displayed as base58.
///
/// Opaque: no program address derivation or curve checks.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_BYTES]);

impl Address {
    #[inline(always)]
    pub const fn new_from_array(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub const fn to_bytes(&self) -> [u8; ADDRESS_BYTES] {
        self.0
    }

    #[inline(always)]
    pub const fn as_array(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_BYTES]> for Address {
    fn from(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; ADDRESS_BYTES] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = LandError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        bytes
            .try_into()
            .map(Self)
            .or(Err(LandError::InvalidAddress))
    }
}

impl FromStr for Address {
    type Err = LandError;

    /// Parses a base58 string. Anything that isn't valid base58 or doesn't decode to exactly
    /// [`ADDRESS_BYTES`] bytes is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: Vec<u8> = bs58::decode(s)
            .into_vec()
            .or(Err(LandError::InvalidAddress))?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}
