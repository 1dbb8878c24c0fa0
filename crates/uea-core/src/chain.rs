//! CAIP-2 chain identifiers.
//!
//! A chain is named by `namespace:reference`, e.g. `eip155:1`. The grammar
//! is the published CAIP-2 one:
//!
//! - namespace: `[-a-z0-9]{3,8}`
//! - reference: `[-_a-zA-Z0-9]{1,32}`
//!
//! The string is split on the first `:`, so any further `:` is part of the
//! reference and rejected by its charset.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ChainIdError;

/// Separator between namespace and reference.
pub const SEPARATOR: char = ':';

pub const NAMESPACE_MIN_LEN: usize = 3;
pub const NAMESPACE_MAX_LEN: usize = 8;
pub const REFERENCE_MAX_LEN: usize = 32;

/// Namespace of EVM chains.
pub const EIP155_NAMESPACE: &str = "eip155";

/// A parsed CAIP-2 chain identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    namespace: String,
    reference: String,
}

impl ChainId {
    /// Parse a `namespace:reference` string.
    pub fn parse(chain: &str) -> Result<Self, ChainIdError> {
        let (namespace, reference) = chain
            .split_once(SEPARATOR)
            .ok_or_else(|| ChainIdError::MissingSeparator(chain.to_string()))?;

        if namespace.is_empty() {
            return Err(ChainIdError::EmptyNamespace);
        }
        if reference.is_empty() {
            return Err(ChainIdError::EmptyReference);
        }
        if !is_valid_namespace(namespace) {
            return Err(ChainIdError::InvalidNamespace(namespace.to_string()));
        }
        if !is_valid_reference(reference) {
            return Err(ChainIdError::InvalidReference(reference.to_string()));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            reference: reference.to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Whether this is an EVM chain (`eip155` namespace).
    pub fn is_eip155(&self) -> bool {
        self.namespace == EIP155_NAMESPACE
    }
}

fn is_valid_namespace(namespace: &str) -> bool {
    (NAMESPACE_MIN_LEN..=NAMESPACE_MAX_LEN).contains(&namespace.len())
        && namespace
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn is_valid_reference(reference: &str) -> bool {
    (1..=REFERENCE_MAX_LEN).contains(&reference.len())
        && reference
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, SEPARATOR, self.reference)
    }
}

impl FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_eip155_mainnet() {
        let chain = ChainId::parse("eip155:1").unwrap();
        assert_eq!(chain.namespace(), "eip155");
        assert_eq!(chain.reference(), "1");
        assert!(chain.is_eip155());
        assert_eq!(chain.to_string(), "eip155:1");
    }

    #[test]
    fn test_parse_solana_genesis_reference() {
        let chain: ChainId = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp".parse().unwrap();
        assert_eq!(chain.namespace(), "solana");
        assert!(!chain.is_eip155());
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            ChainId::parse("invalid-chain-format"),
            Err(ChainIdError::MissingSeparator("invalid-chain-format".into()))
        );
        assert!(matches!(
            ChainId::parse(""),
            Err(ChainIdError::MissingSeparator(_))
        ));
    }

    #[test]
    fn test_empty_parts() {
        assert_eq!(ChainId::parse(":1"), Err(ChainIdError::EmptyNamespace));
        assert_eq!(ChainId::parse("eip155:"), Err(ChainIdError::EmptyReference));
        assert_eq!(ChainId::parse(":"), Err(ChainIdError::EmptyNamespace));
    }

    #[test]
    fn test_namespace_bounds() {
        assert!(ChainId::parse("abc:1").is_ok());
        assert!(ChainId::parse("abcdefgh:1").is_ok());
        assert!(matches!(
            ChainId::parse("ab:1"),
            Err(ChainIdError::InvalidNamespace(_))
        ));
        assert!(matches!(
            ChainId::parse("abcdefghi:1"),
            Err(ChainIdError::InvalidNamespace(_))
        ));
        assert!(matches!(
            ChainId::parse("EIP155:1"),
            Err(ChainIdError::InvalidNamespace(_))
        ));
        assert!(matches!(
            ChainId::parse("eip_155:1"),
            Err(ChainIdError::InvalidNamespace(_))
        ));
    }

    #[test]
    fn test_reference_bounds() {
        let max = "a".repeat(REFERENCE_MAX_LEN);
        assert!(ChainId::parse(&format!("eip155:{max}")).is_ok());
        assert!(matches!(
            ChainId::parse(&format!("eip155:{max}a")),
            Err(ChainIdError::InvalidReference(_))
        ));
        assert!(ChainId::parse("cosmos:cosmoshub-4").is_ok());
        assert!(ChainId::parse("cosmos:push_42101-1").is_ok());
    }

    #[test]
    fn test_second_separator_lands_in_reference() {
        assert_eq!(
            ChainId::parse("eip155:1:2"),
            Err(ChainIdError::InvalidReference("1:2".into()))
        );
    }

    #[test]
    fn test_serde_as_string() {
        let chain = ChainId::parse("eip155:11155111").unwrap();
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, "\"eip155:11155111\"");

        let back: ChainId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);

        assert!(serde_json::from_str::<ChainId>("\"eip155\"").is_err());
    }

    proptest! {
        #[test]
        fn test_well_formed_chains_parse(
            namespace in "[-a-z0-9]{3,8}",
            reference in "[-_a-zA-Z0-9]{1,32}",
        ) {
            let input = format!("{namespace}:{reference}");
            let chain = ChainId::parse(&input).unwrap();
            prop_assert_eq!(chain.to_string(), input);
        }

        #[test]
        fn test_no_separator_never_parses(s in "[^:]{0,40}") {
            prop_assert!(matches!(
                ChainId::parse(&s),
                Err(ChainIdError::MissingSeparator(_))
            ));
        }
    }
}
