//! Local account addresses and the bech32 codec that parses them.
//!
//! Signers are carried on the wire as bech32 strings. The core never parses
//! them directly; it goes through an [`AddressCodec`] so the prefix and
//! encoding stay a property of the chain configuration.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Fe32, Hrp};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AddressError;

/// Bech32 human-readable part used for account addresses on this chain.
pub const DEFAULT_ACCOUNT_PREFIX: &str = "push";

/// Maximum length of a raw account address in bytes.
pub const MAX_ADDR_LEN: usize = 255;

/// A raw local-chain account address.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccAddress(Vec<u8>);

impl AccAddress {
    /// Create an address from raw bytes, enforcing the length bound.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, AddressError> {
        let bytes = bytes.into();
        if bytes.is_empty() || bytes.len() > MAX_ADDR_LEN {
            return Err(AddressError::InvalidLength {
                max: MAX_ADDR_LEN,
                got: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Encode with the given bech32 prefix.
    pub fn to_bech32(&self, prefix: &str) -> Result<String, AddressError> {
        Bech32Codec::new(prefix).encode(self)
    }
}

impl fmt::Debug for AccAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "AccAddress({})", &hex[..hex.len().min(16)])
    }
}

impl AsRef<[u8]> for AccAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for AccAddress {
    type Error = AddressError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(slice)
    }
}

/// Converts between address strings and raw account addresses.
///
/// Implementations must be stateless with respect to individual calls so a
/// single codec can be shared across concurrent validations.
pub trait AddressCodec {
    /// Parse an address string.
    fn decode(&self, address: &str) -> Result<AccAddress, AddressError>;

    /// Render an address as a string.
    fn encode(&self, address: &AccAddress) -> Result<String, AddressError>;
}

/// Classic (BIP-173) bech32 codec bound to a single human-readable prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Codec {
    prefix: String,
}

impl Bech32Codec {
    /// Create a codec for the given prefix. The prefix is stored lowercase.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().to_ascii_lowercase(),
        }
    }

    /// Create a codec, rejecting prefixes that are not a valid bech32 human-readable part.
    pub fn try_new(prefix: impl Into<String>) -> Result<Self, AddressError> {
        let codec = Self::new(prefix);
        Hrp::parse(&codec.prefix).map_err(|e| AddressError::InvalidPrefix {
            prefix: codec.prefix.clone(),
            reason: e.to_string(),
        })?;
        Ok(codec)
    }

    /// The human-readable prefix this codec accepts and produces.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for Bech32Codec {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNT_PREFIX)
    }
}

impl AddressCodec for Bech32Codec {
    fn decode(&self, address: &str) -> Result<AccAddress, AddressError> {
        if address.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let checked = CheckedHrpstring::new::<Bech32>(address)
            .map_err(|e| AddressError::Bech32(e.to_string()))?;

        let hrp = checked.hrp().to_string().to_ascii_lowercase();
        if hrp != self.prefix {
            return Err(AddressError::WrongPrefix {
                expected: self.prefix.clone(),
                got: hrp,
            });
        }

        check_padding(checked.data_part_ascii_no_checksum())?;
        AccAddress::from_bytes(checked.byte_iter().collect::<Vec<u8>>())
    }

    fn encode(&self, address: &AccAddress) -> Result<String, AddressError> {
        let hrp = Hrp::parse(&self.prefix).map_err(|e| AddressError::Encoding(e.to_string()))?;
        bech32::encode::<Bech32>(hrp, address.as_bytes())
            .map_err(|e| AddressError::Encoding(e.to_string()))
    }
}

/// Reject data parts that do not regroup into whole bytes: a trailing group
/// of 5 or more bits, or non-zero padding bits in the last character.
fn check_padding(data: &[u8]) -> Result<(), AddressError> {
    let leftover = data.len() * 5 % 8;
    if leftover >= 5 {
        return Err(AddressError::Bech32("invalid incomplete group".into()));
    }

    if let Some(&last) = data.last() {
        let fe = Fe32::from_char(char::from(last.to_ascii_lowercase()))
            .map_err(|e| AddressError::Bech32(e.to_string()))?;
        if fe.to_u8() & ((1u8 << leftover) - 1) != 0 {
            return Err(AddressError::Bech32("invalid padding".into()));
        }
    }
    Ok(())
}
