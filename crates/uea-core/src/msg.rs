//! The UEA deployment request message.

use serde::{Deserialize, Serialize};

use crate::account::UniversalAccountId;
use crate::address::{AccAddress, AddressCodec, Bech32Codec};
use crate::chain::ChainId;
use crate::error::{AddressError, ValidationError};
use crate::validation::validate_deploy_request;

/// Module route the message is dispatched under.
pub const ROUTE: &str = "ue";

/// Short message type name.
pub const TYPE: &str = "deploy_uea";

/// Fully-qualified type URL for the message.
pub const TYPE_URL: &str = "/ue.v1.MsgDeployUEA";

/// Request to deploy a Universal Execution Account.
///
/// Binds `signer` (a local bech32 address) to `universal_account` (an account
/// on a remote chain), with `tx_hash` naming the remote transaction offered as
/// proof. Constructed immediately before submission and validated once at
/// ingress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeployUea {
    pub signer: String,
    #[serde(default)]
    pub universal_account: Option<UniversalAccountId>,
    pub tx_hash: String,
}

impl MsgDeployUea {
    /// Create a request with all fields set.
    pub fn new(
        signer: impl Into<String>,
        universal_account: UniversalAccountId,
        tx_hash: impl Into<String>,
    ) -> Self {
        Self {
            signer: signer.into(),
            universal_account: Some(universal_account),
            tx_hash: tx_hash.into(),
        }
    }

    /// Create a request from a raw signer address, encoding it with `codec`.
    pub fn from_address<C>(
        signer: &AccAddress,
        codec: &C,
        universal_account: UniversalAccountId,
        tx_hash: impl Into<String>,
    ) -> Result<Self, AddressError>
    where
        C: AddressCodec + ?Sized,
    {
        Ok(Self::new(codec.encode(signer)?, universal_account, tx_hash))
    }

    pub fn route(&self) -> &'static str {
        ROUTE
    }

    pub fn msg_type(&self) -> &'static str {
        TYPE
    }

    /// Validate with the default `push` account codec.
    pub fn validate_basic(&self) -> Result<(), ValidationError> {
        self.validate_basic_with(&Bech32Codec::default())
    }

    /// Validate with an explicit account codec.
    pub fn validate_basic_with<C>(&self, codec: &C) -> Result<(), ValidationError>
    where
        C: AddressCodec + ?Sized,
    {
        validate_deploy_request(self, codec)
    }

    /// Decode the single signer of this message.
    pub fn signer_address<C>(&self, codec: &C) -> Result<AccAddress, AddressError>
    where
        C: AddressCodec + ?Sized,
    {
        codec.decode(&self.signer)
    }

    /// Validate, then convert into typed fields.
    pub fn into_verified<C>(self, codec: &C) -> Result<VerifiedDeploy, ValidationError>
    where
        C: AddressCodec + ?Sized,
    {
        self.validate_basic_with(codec)?;

        let signer = self
            .signer_address(codec)
            .map_err(ValidationError::InvalidSigner)?;
        let account = self
            .universal_account
            .ok_or(ValidationError::MissingAccount)?;
        let chain = account.chain_id()?;
        let owner = account.owner_bytes()?;

        Ok(VerifiedDeploy {
            signer,
            chain,
            owner,
            account,
            tx_hash: self.tx_hash,
        })
    }
}

/// A deployment request that passed validation, with every field parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedDeploy {
    pub signer: AccAddress,
    pub account: UniversalAccountId,
    pub chain: ChainId,
    pub owner: Vec<u8>,
    pub tx_hash: String,
}
