//! Error types for UEA Core.

use thiserror::Error;

/// Errors produced by an [`AddressCodec`](crate::address::AddressCodec).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("decoding bech32 failed: {0}")]
    Bech32(String),

    #[error("encoding bech32 failed: {0}")]
    Encoding(String),

    #[error("invalid Bech32 prefix; expected {expected}, got {got}")]
    WrongPrefix { expected: String, got: String },

    #[error("invalid Bech32 prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("address length must be between 1 and {max} bytes, got {got}")]
    InvalidLength { max: usize, got: usize },
}

/// Reasons a chain string is not a CAIP-2 identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainIdError {
    #[error("missing ':' separator in {0:?}")]
    MissingSeparator(String),

    #[error("namespace is empty")]
    EmptyNamespace,

    #[error("reference is empty")]
    EmptyReference,

    #[error("namespace {0:?} must match [-a-z0-9]{{3,8}}")]
    InvalidNamespace(String),

    #[error("reference {0:?} must match [-_a-zA-Z0-9]{{1,32}}")]
    InvalidReference(String),
}

/// Reasons an owner string is not a 0x-prefixed hex address.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OwnerError {
    #[error("owner must start with 0x")]
    MissingPrefix,

    #[error("owner has no hex digits after 0x")]
    Empty,

    #[error("owner is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Validation errors for a deployment request.
///
/// Exactly one is returned per validation call; the first violated rule wins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid signer address: {0}")]
    InvalidSigner(AddressError),

    #[error("universalAccount cannot be nil")]
    MissingAccount,

    #[error("txHash cannot be empty")]
    MissingProof,

    #[error("chain must be in CAIP-2 format <namespace>:<reference>: {0}")]
    InvalidChainFormat(ChainIdError),

    #[error("invalid owner format: {0}")]
    InvalidOwnerFormat(OwnerError),
}

impl From<ChainIdError> for ValidationError {
    fn from(e: ChainIdError) -> Self {
        ValidationError::InvalidChainFormat(e)
    }
}

impl From<OwnerError> for ValidationError {
    fn from(e: OwnerError) -> Self {
        ValidationError::InvalidOwnerFormat(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_wire_text() {
        assert_eq!(
            ValidationError::MissingAccount.to_string(),
            "universalAccount cannot be nil"
        );
        assert_eq!(
            ValidationError::MissingProof.to_string(),
            "txHash cannot be empty"
        );

        let signer = ValidationError::InvalidSigner(AddressError::Empty);
        assert!(signer.to_string().starts_with("invalid signer address: "));

        let chain = ValidationError::from(ChainIdError::EmptyNamespace);
        assert!(chain
            .to_string()
            .starts_with("chain must be in CAIP-2 format"));
    }

    #[test]
    fn test_owner_error_from_hex() {
        let err: ValidationError = OwnerError::from(hex::FromHexError::OddLength).into();
        assert!(matches!(
            err,
            ValidationError::InvalidOwnerFormat(OwnerError::InvalidHex(_))
        ));
    }
}
