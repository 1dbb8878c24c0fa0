//! The remote-chain account a UEA is bound to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chain::ChainId;
use crate::error::{ChainIdError, OwnerError, ValidationError};
use crate::validation::validate_universal_account;

/// Prefix every owner address must carry.
pub const OWNER_PREFIX: &str = "0x";

/// An account on a remote chain: a CAIP-2 chain plus a hex owner address.
///
/// Fields hold the wire strings unchanged; use [`validate_basic`] before
/// trusting them, or the typed accessors [`chain_id`] and [`owner_bytes`].
///
/// [`validate_basic`]: UniversalAccountId::validate_basic
/// [`chain_id`]: UniversalAccountId::chain_id
/// [`owner_bytes`]: UniversalAccountId::owner_bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniversalAccountId {
    pub chain: String,
    pub owner: String,
}

impl UniversalAccountId {
    pub fn new(chain: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            owner: owner.into(),
        }
    }

    /// Stateless checks: chain format first, then owner format.
    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        validate_universal_account(self)
    }

    /// Parse the chain field.
    pub fn chain_id(&self) -> Result<ChainId, ValidationError> {
        Ok(ChainId::parse(&self.chain)?)
    }

    /// Decode the owner field to raw bytes.
    pub fn owner_bytes(&self) -> Result<Vec<u8>, ValidationError> {
        Ok(parse_owner(&self.owner)?)
    }
}

/// Decode a `0x`-prefixed hex owner address.
///
/// The digits after the prefix must be non-empty and of even length. Upper
/// and lower case digits are both accepted; the prefix itself is lowercase.
pub fn parse_owner(owner: &str) -> Result<Vec<u8>, OwnerError> {
    let digits = owner
        .strip_prefix(OWNER_PREFIX)
        .ok_or(OwnerError::MissingPrefix)?;
    if digits.is_empty() {
        return Err(OwnerError::Empty);
    }
    Ok(hex::decode(digits)?)
}

/// CAIP-10 form: `namespace:reference:owner`.
impl fmt::Display for UniversalAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain, self.owner)
    }
}

impl FromStr for UniversalAccountId {
    type Err = ValidationError;

    /// Parse the CAIP-10 form. The owner is everything after the last `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain, owner) = s
            .rsplit_once(':')
            .ok_or_else(|| ChainIdError::MissingSeparator(s.to_string()))?;
        let account = Self::new(chain, owner);
        account.validate_basic()?;
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAD: &str = "0x000000000000000000000000000000000000dead";

    #[test]
    fn test_valid_evm_account() {
        let account = UniversalAccountId::new("eip155:1", DEAD);
        assert!(account.validate_basic().is_ok());

        let owner = account.owner_bytes().unwrap();
        assert_eq!(owner.len(), 20);
        assert_eq!(&owner[18..], &[0xde, 0xad]);
        assert_eq!(account.chain_id().unwrap().reference(), "1");
    }

    #[test]
    fn test_chain_error_masks_owner_error() {
        let account = UniversalAccountId::new("invalid-chain-format", "0xzzzzzzzz");
        let err = account.validate_basic().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidChainFormat(ChainIdError::MissingSeparator(_))
        ));
        assert!(err.to_string().contains("chain must be in CAIP-2 format"));
    }

    #[test]
    fn test_owner_without_prefix() {
        let account = UniversalAccountId::new("eip155:1", "000000000000000000000000000000000000dead");
        assert_eq!(
            account.validate_basic(),
            Err(ValidationError::InvalidOwnerFormat(OwnerError::MissingPrefix))
        );

        let upper = UniversalAccountId::new("eip155:1", "0X000000000000000000000000000000000000dead");
        assert_eq!(
            upper.validate_basic(),
            Err(ValidationError::InvalidOwnerFormat(OwnerError::MissingPrefix))
        );
    }

    #[test]
    fn test_owner_non_hex() {
        let account = UniversalAccountId::new("eip155:1", "0xzzzzzzzz");
        assert!(matches!(
            account.validate_basic(),
            Err(ValidationError::InvalidOwnerFormat(OwnerError::InvalidHex(_)))
        ));
    }

    #[test]
    fn test_owner_odd_length() {
        let account = UniversalAccountId::new("eip155:1", "0xabc");
        assert_eq!(
            account.validate_basic(),
            Err(ValidationError::InvalidOwnerFormat(OwnerError::InvalidHex(
                hex::FromHexError::OddLength
            )))
        );
    }

    #[test]
    fn test_owner_empty() {
        assert_eq!(parse_owner("0x"), Err(OwnerError::Empty));
        assert_eq!(parse_owner(""), Err(OwnerError::MissingPrefix));
    }

    #[test]
    fn test_owner_mixed_case_digits() {
        let checksummed = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(parse_owner(checksummed).unwrap().len(), 20);
    }

    #[test]
    fn test_caip10_roundtrip() {
        let account = UniversalAccountId::new("eip155:1", DEAD);
        let s = account.to_string();
        assert_eq!(s, format!("eip155:1:{DEAD}"));

        let parsed: UniversalAccountId = s.parse().unwrap();
        assert_eq!(parsed, account);
    }

    #[test]
    fn test_caip10_rejects_bad_input() {
        assert!("no-separators".parse::<UniversalAccountId>().is_err());
        assert!(matches!(
            "eip155:0xdead".parse::<UniversalAccountId>(),
            Err(ValidationError::InvalidChainFormat(_))
        ));
    }
}
