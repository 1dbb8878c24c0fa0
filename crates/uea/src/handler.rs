//! DeployHandler trait: where verified requests go after ingress.
//!
//! Registration storage, remote-chain proof checks and account deployment
//! are implemented behind this trait, outside this crate.

use async_trait::async_trait;
use thiserror::Error;
use uea_core::VerifiedDeploy;

/// A handler's refusal of an otherwise valid request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl HandlerError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Consumer of validated deployment requests.
///
/// Only requests that passed `validate_basic` are ever passed in.
#[async_trait]
pub trait DeployHandler: Send + Sync {
    /// What a successful deployment returns (e.g. the deployed address).
    type Output: Send;

    /// Act on a verified request.
    async fn deploy(&self, request: VerifiedDeploy) -> Result<Self::Output, HandlerError>;
}
