//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uea::{DeployHandler, HandlerError};
use uea_core::{
    AccAddress, AddressCodec, Bech32Codec, MsgDeployUea, UniversalAccountId, VerifiedDeploy,
};

/// A signer that decodes under the default `push` prefix.
pub const VALID_SIGNER: &str = "push1fgaewhyd9fkwtqaj9c233letwcuey6dgly9gv9";

/// Raw bytes of [`VALID_SIGNER`], hex encoded.
pub const VALID_SIGNER_HEX: &str = "4a3b975c8d2a6ce583b22e1518ff2b76399269a8";

/// Not a bech32 string at all.
pub const INVALID_SIGNER: &str = "invalid_bech32";

pub const VALID_CHAIN: &str = "eip155:1";
pub const VALID_OWNER: &str = "0x000000000000000000000000000000000000dead";
pub const VALID_TX_HASH: &str = "0xabc123";

pub const INVALID_CHAIN: &str = "invalid-chain-format";
pub const INVALID_OWNER: &str = "0xzzzzzzzz";

/// The well-formed remote account used across scenarios.
pub fn valid_account() -> UniversalAccountId {
    UniversalAccountId::new(VALID_CHAIN, VALID_OWNER)
}

/// A remote account where both chain and owner are malformed.
pub fn invalid_account() -> UniversalAccountId {
    UniversalAccountId::new(INVALID_CHAIN, INVALID_OWNER)
}

/// A test fixture with a signer address and the codec that encodes it.
pub struct TestFixture {
    pub codec: Bech32Codec,
    pub signer: AccAddress,
}

impl TestFixture {
    /// Create a new test fixture with a random 20-byte signer.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create with a deterministic signer.
    pub fn with_seed(seed: [u8; 20]) -> Self {
        Self {
            codec: Bech32Codec::default(),
            signer: AccAddress::from_bytes(seed).expect("20 bytes is a valid address length"),
        }
    }

    /// The signer in its bech32 wire form.
    pub fn signer_bech32(&self) -> String {
        self.codec
            .encode(&self.signer)
            .expect("default prefix always encodes")
    }

    /// Create a request against [`valid_account`].
    pub fn make_msg(&self, tx_hash: &str) -> MsgDeployUea {
        self.make_msg_for(valid_account(), tx_hash)
    }

    /// Create a request against a given account.
    pub fn make_msg_for(&self, account: UniversalAccountId, tx_hash: &str) -> MsgDeployUea {
        MsgDeployUea::from_address(&self.signer, &self.codec, account, tx_hash)
            .expect("default prefix always encodes")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures with distinct signers.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 20];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            seed[19] = 0x01;
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// In-memory deploy handler that records every request it receives.
///
/// Requests whose `tx_hash` equals `refuse_tx_hash` are refused.
#[derive(Default)]
pub struct RecordingHandler {
    deployed: Mutex<Vec<VerifiedDeploy>>,
    refuse_tx_hash: Option<String>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse requests carrying this proof hash.
    pub fn refusing(tx_hash: impl Into<String>) -> Self {
        Self {
            deployed: Mutex::new(Vec::new()),
            refuse_tx_hash: Some(tx_hash.into()),
        }
    }

    /// Snapshot of recorded requests, in arrival order.
    pub async fn deployed(&self) -> Vec<VerifiedDeploy> {
        self.deployed.lock().await.clone()
    }
}

#[async_trait]
impl DeployHandler for RecordingHandler {
    /// Number of requests recorded so far, including this one.
    type Output = usize;

    async fn deploy(&self, request: VerifiedDeploy) -> Result<usize, HandlerError> {
        if self.refuse_tx_hash.as_deref() == Some(request.tx_hash.as_str()) {
            return Err(HandlerError::new(format!(
                "proof transaction {} not found",
                request.tx_hash
            )));
        }

        let mut deployed = self.deployed.lock().await;
        deployed.push(request);
        Ok(deployed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uea::{Ingress, IngressConfig, IngressError};

    #[test]
    fn test_valid_signer_constant() {
        let addr = Bech32Codec::default().decode(VALID_SIGNER).unwrap();
        assert_eq!(addr.to_hex(), VALID_SIGNER_HEX);
    }

    #[test]
    fn test_fixture_msg_validates() {
        let fixture = TestFixture::new();
        let msg = fixture.make_msg(VALID_TX_HASH);

        assert!(msg.signer.starts_with("push1"));
        assert_eq!(msg.signer, fixture.signer_bech32());
        assert!(msg.validate_basic().is_ok());
    }

    #[test]
    fn test_fixture_invalid_account() {
        let fixture = TestFixture::with_seed([0x11; 20]);
        let msg = fixture.make_msg_for(invalid_account(), VALID_TX_HASH);
        assert!(msg
            .validate_basic()
            .unwrap_err()
            .to_string()
            .contains("chain must be in CAIP-2 format"));
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(3);

        let signers: Vec<_> = parties.iter().map(|p| p.signer_bech32()).collect();
        assert_ne!(signers[0], signers[1]);
        assert_ne!(signers[1], signers[2]);
        assert_ne!(signers[0], signers[2]);
    }

    #[test]
    fn test_multi_party_signers_stay_distinct() {
        let parties = multi_party_fixtures(300);
        let signers: std::collections::HashSet<_> =
            parties.iter().map(|p| p.signer.clone()).collect();
        assert_eq!(signers.len(), 300);
    }

    #[tokio::test]
    async fn test_recording_handler() {
        let ingress = Ingress::new(RecordingHandler::refusing("0xdead"), IngressConfig::default()).unwrap();
        let fixture = TestFixture::new();

        assert_eq!(ingress.submit(fixture.make_msg("0x01")).await.unwrap(), 1);
        assert_eq!(ingress.submit(fixture.make_msg("0x02")).await.unwrap(), 2);

        let err = ingress.submit(fixture.make_msg("0xdead")).await.unwrap_err();
        assert!(matches!(err, IngressError::Handler(_)));

        let deployed = ingress.handler().deployed().await;
        assert_eq!(deployed.len(), 2);
        assert_eq!(deployed[0].signer, fixture.signer);
        assert_eq!(deployed[1].tx_hash, "0x02");
    }
}
