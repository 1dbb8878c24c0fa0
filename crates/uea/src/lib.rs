//! # UEA
//!
//! Ingress for Universal Execution Account deployment requests.
//!
//! ## Overview
//!
//! Requests arrive as [`MsgDeployUea`] values or JSON bytes. The [`Ingress`]
//! validates each one and forwards only well-formed requests, as a typed
//! [`VerifiedDeploy`], to a [`DeployHandler`]. Persistence, proof
//! verification and account deployment all live behind that trait.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uea::{DeployHandler, HandlerError, Ingress, IngressConfig, VerifiedDeploy};
//!
//! struct Deployer;
//!
//! #[async_trait::async_trait]
//! impl DeployHandler for Deployer {
//!     type Output = ();
//!
//!     async fn deploy(&self, request: VerifiedDeploy) -> Result<(), HandlerError> {
//!         println!("deploying {} for {:?}", request.account, request.signer);
//!         Ok(())
//!     }
//! }
//!
//! async fn example(bytes: &[u8]) {
//!     let ingress = Ingress::new(Deployer, IngressConfig::default()).expect("default prefix is valid");
//!     if let Err(e) = ingress.submit_json(bytes).await {
//!         eprintln!("rejected: {e}");
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `uea::core` - Message types, codecs and validation

pub mod error;
pub mod handler;
pub mod ingress;

pub use uea_core as core;

pub use error::{IngressError, Result};
pub use handler::{DeployHandler, HandlerError};
pub use ingress::{Ingress, IngressConfig};

pub use uea_core::{
    AccAddress, AddressCodec, Bech32Codec, ChainId, MsgDeployUea, UniversalAccountId,
    ValidationError, VerifiedDeploy,
};
