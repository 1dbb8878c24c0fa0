//! # UEA Testkit
//!
//! Testing utilities for UEA deployment requests.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Scenario vectors**: The reference requests and the error text each must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Signers, accounts and an in-memory deploy handler
//!
//! ## Scenario Vectors
//!
//! ```rust
//! use uea_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for (name, ok, _outcome) in verify_all_vectors() {
//!     assert!(ok, "{name}");
//! }
//! assert_eq!(all_vectors().len(), 5);
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use uea_testkit::generators::DeployParams;
//!
//! proptest! {
//!     #[test]
//!     fn valid_params_validate(params: DeployParams) {
//!         prop_assert!(params.to_msg().validate_basic().is_ok());
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use uea_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let msg = fixture.make_msg("0xabc123");
//! assert!(msg.validate_basic().is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, RecordingHandler, TestFixture};
pub use generators::DeployParams;
pub use vectors::{all_vectors, verify_all_vectors, ScenarioVector};
