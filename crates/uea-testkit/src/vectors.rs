//! Reference scenario vectors.
//!
//! Each vector is a concrete request and the error text a caller must see,
//! or `None` when the request must pass.

use uea_core::{MsgDeployUea, UniversalAccountId};

use crate::fixtures::{
    INVALID_CHAIN, INVALID_OWNER, INVALID_SIGNER, VALID_CHAIN, VALID_OWNER, VALID_SIGNER,
    VALID_TX_HASH,
};

/// A reference scenario.
#[derive(Debug, Clone)]
pub struct ScenarioVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub signer: &'static str,
    /// `(chain, owner)`, or `None` for an absent account.
    pub account: Option<(&'static str, &'static str)>,
    pub tx_hash: &'static str,
    /// Substring the error must contain, or `None` for success.
    pub expected_error: Option<&'static str>,
}

impl ScenarioVector {
    /// Build the request this vector describes.
    pub fn to_msg(&self) -> MsgDeployUea {
        MsgDeployUea {
            signer: self.signer.to_string(),
            universal_account: self
                .account
                .map(|(chain, owner)| UniversalAccountId::new(chain, owner)),
            tx_hash: self.tx_hash.to_string(),
        }
    }
}

/// Get all scenario vectors.
pub fn all_vectors() -> Vec<ScenarioVector> {
    vec![
        ScenarioVector {
            name: "valid message",
            signer: VALID_SIGNER,
            account: Some((VALID_CHAIN, VALID_OWNER)),
            tx_hash: VALID_TX_HASH,
            expected_error: None,
        },
        ScenarioVector {
            name: "invalid signer format",
            signer: INVALID_SIGNER,
            account: Some((VALID_CHAIN, VALID_OWNER)),
            tx_hash: VALID_TX_HASH,
            expected_error: Some("invalid signer address"),
        },
        ScenarioVector {
            name: "nil universal account",
            signer: VALID_SIGNER,
            account: None,
            tx_hash: VALID_TX_HASH,
            expected_error: Some("universalAccount cannot be nil"),
        },
        ScenarioVector {
            name: "empty txHash",
            signer: VALID_SIGNER,
            account: Some((VALID_CHAIN, VALID_OWNER)),
            tx_hash: "",
            expected_error: Some("txHash cannot be empty"),
        },
        ScenarioVector {
            name: "invalid universal account",
            signer: VALID_SIGNER,
            account: Some((INVALID_CHAIN, INVALID_OWNER)),
            tx_hash: VALID_TX_HASH,
            expected_error: Some("chain must be in CAIP-2 format"),
        },
    ]
}

/// Run every vector through `validate_basic`.
///
/// Returns `(name, matches, outcome)` where `outcome` is `"ok"` or the error text.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let result = v.to_msg().validate_basic();
            let (matches, outcome) = match (&result, v.expected_error) {
                (Ok(()), None) => (true, "ok".to_string()),
                (Ok(()), Some(_)) => (false, "ok".to_string()),
                (Err(e), None) => (false, e.to_string()),
                (Err(e), Some(expected)) => (e.to_string().contains(expected), e.to_string()),
            };
            (v.name.to_string(), matches, outcome)
        })
        .collect()
}
