//! # UEA Core
//!
//! Pure primitives for Universal Execution Account (UEA) deployment requests.
//!
//! This crate contains no I/O, no storage, no networking and no logging. It is
//! pure validation over the fields of a deployment request.
//!
//! ## Key Types
//!
//! - [`MsgDeployUea`] - Request binding a local signer to a remote-chain account
//! - [`UniversalAccountId`] - The remote account: CAIP-2 chain plus hex owner
//! - [`ChainId`] - Parsed CAIP-2 `namespace:reference` identifier
//! - [`AccAddress`] - Raw local account address, produced by an [`AddressCodec`]
//!
//! ## Validation
//!
//! Validation is first-failure-wins. See the [`validation`] module for the
//! exact order of checks.
//!
//! ```rust
//! use uea_core::{MsgDeployUea, UniversalAccountId};
//!
//! let msg = MsgDeployUea::new(
//!     "push1fgaewhyd9fkwtqaj9c233letwcuey6dgly9gv9",
//!     UniversalAccountId::new("eip155:1", "0x000000000000000000000000000000000000dead"),
//!     "0xabc123",
//! );
//! assert!(msg.validate_basic().is_ok());
//! ```

pub mod account;
pub mod address;
pub mod chain;
pub mod error;
pub mod msg;
pub mod validation;

pub use account::UniversalAccountId;
pub use address::{AccAddress, AddressCodec, Bech32Codec, DEFAULT_ACCOUNT_PREFIX, MAX_ADDR_LEN};
pub use chain::ChainId;
pub use error::{AddressError, ChainIdError, OwnerError, ValidationError};
pub use msg::{MsgDeployUea, VerifiedDeploy};
pub use validation::{validate_deploy_request, validate_universal_account};
