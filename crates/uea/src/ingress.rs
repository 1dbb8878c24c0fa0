//! The Ingress: gatekeeper between submitters and the deploy handler.
//!
//! Every request is validated before anything else happens. Invalid requests
//! are rejected here and never reach the handler.

use std::sync::Arc;

use uea_core::{Bech32Codec, MsgDeployUea, DEFAULT_ACCOUNT_PREFIX};

use crate::error::{IngressError, Result};
use crate::handler::DeployHandler;

/// Default upper bound on an encoded request.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 64 * 1024;

/// Configuration for the Ingress.
#[derive(Debug, Clone)]
pub struct IngressConfig {
    /// Bech32 prefix signer addresses must carry.
    pub account_prefix: String,
    /// Largest JSON request accepted by `submit_json`.
    pub max_message_bytes: usize,
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self {
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }
}

/// Validates deployment requests and dispatches the valid ones.
pub struct Ingress<H: DeployHandler> {
    /// Codec for signer addresses, built from the configured prefix.
    codec: Bech32Codec,
    /// Where verified requests go.
    handler: Arc<H>,
    /// Configuration.
    config: IngressConfig,
}

impl<H: DeployHandler> Ingress<H> {
    /// Create a new ingress. Fails if `account_prefix` is not a valid bech32 prefix.
    pub fn new(handler: H, config: IngressConfig) -> Result<Self> {
        let codec = Bech32Codec::try_new(config.account_prefix.clone())?;
        Ok(Self {
            codec,
            handler: Arc::new(handler),
            config,
        })
    }

    /// Get the handler reference.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn config(&self) -> &IngressConfig {
        &self.config
    }

    /// Validate without dispatching.
    pub fn check(&self, msg: &MsgDeployUea) -> Result<()> {
        msg.validate_basic_with(&self.codec).map_err(|e| {
            tracing::warn!(signer = %msg.signer, "Rejected deploy request: {}", e);
            IngressError::from(e)
        })
    }

    /// Validate a request and hand it to the handler.
    pub async fn submit(&self, msg: MsgDeployUea) -> Result<H::Output> {
        let signer = msg.signer.clone();
        let verified = msg.into_verified(&self.codec).map_err(|e| {
            tracing::warn!(signer = %signer, "Rejected deploy request: {}", e);
            IngressError::from(e)
        })?;
        tracing::debug!(
            signer = ?verified.signer,
            chain = %verified.chain,
            tx_hash = %verified.tx_hash,
            "Accepted deploy request"
        );

        let output = self.handler.deploy(verified).await.map_err(|e| {
            tracing::warn!("Deploy handler failed: {}", e);
            IngressError::from(e)
        })?;
        Ok(output)
    }

    /// Decode a JSON request, then [`submit`](Self::submit) it.
    pub async fn submit_json(&self, bytes: &[u8]) -> Result<H::Output> {
        if bytes.len() > self.config.max_message_bytes {
            return Err(IngressError::TooLarge {
                size: bytes.len(),
                max: self.config.max_message_bytes,
            });
        }

        let msg: MsgDeployUea = serde_json::from_slice(bytes).map_err(|e| {
            tracing::warn!("Undecodable deploy request: {}", e);
            IngressError::from(e)
        })?;
        self.submit(msg).await
    }
}
