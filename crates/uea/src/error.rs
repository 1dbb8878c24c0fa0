//! Error types for the ingress.

use thiserror::Error;
use uea_core::{AddressError, ValidationError};

use crate::handler::HandlerError;

/// Errors that can occur while accepting a deployment request.
#[derive(Debug, Error)]
pub enum IngressError {
    /// The request is malformed. Surfaced verbatim to the submitter.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The bytes are not a deployment request.
    #[error("malformed message: {0}")]
    Decode(#[from] serde_json::Error),

    /// The encoded request exceeds the configured limit.
    #[error("message is {size} bytes, limit is {max}")]
    TooLarge { size: usize, max: usize },

    /// The configured account prefix cannot be used.
    #[error("invalid ingress configuration: {0}")]
    InvalidPrefix(#[from] AddressError),

    /// The handler refused a valid request.
    #[error("handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Result type for ingress operations.
pub type Result<T> = std::result::Result<T, IngressError>;
