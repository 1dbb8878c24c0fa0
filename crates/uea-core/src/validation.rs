//! Deployment request validation: ordered, first-failure-wins checks.

use crate::account::{parse_owner, UniversalAccountId};
use crate::address::AddressCodec;
use crate::chain::ChainId;
use crate::error::ValidationError;
use crate::msg::MsgDeployUea;

/// Validate a deployment request without touching state.
///
/// Checks, in order:
/// - Signer decodes through `codec`
/// - Universal account is present
/// - Proof transaction hash is non-empty
/// - Universal account is well-formed (errors propagate unchanged)
pub fn validate_deploy_request<C>(msg: &MsgDeployUea, codec: &C) -> Result<(), ValidationError>
where
    C: AddressCodec + ?Sized,
{
    // 1. Signer
    codec
        .decode(&msg.signer)
        .map_err(ValidationError::InvalidSigner)?;

    // 2. Account presence
    let account = msg
        .universal_account
        .as_ref()
        .ok_or(ValidationError::MissingAccount)?;

    // 3. Proof hash presence
    if msg.tx_hash.is_empty() {
        return Err(ValidationError::MissingProof);
    }

    // 4. Nested account
    validate_universal_account(account)
}

/// Validate a universal account: chain format, then owner format.
///
/// A malformed chain is reported even when the owner is also malformed.
pub fn validate_universal_account(account: &UniversalAccountId) -> Result<(), ValidationError> {
    ChainId::parse(&account.chain)?;
    parse_owner(&account.owner)?;
    Ok(())
}
